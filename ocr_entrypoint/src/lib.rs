#![deny(missing_docs)]
//! Standard process initialization for the entrypoint binaries of this workspace.
//! Every binary calls [Entrypoint::init] first so that tracing output looks the same everywhere.

use ocr_env::Environment;
use tracing_subscriber::EnvFilter;

/// How log lines are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line, colored output for reading in a terminal
    Pretty,
    /// One flattened json object per event for CloudWatch ingestion
    Json,
}

impl From<Environment> for LogFormat {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Local => LogFormat::Pretty,
            Environment::Production | Environment::Develop => LogFormat::Json,
        }
    }
}

/// Describes how the current binary should be initialized
#[derive(Debug)]
pub struct Entrypoint {
    env: Environment,
    format: Option<LogFormat>,
}

impl Default for Entrypoint {
    fn default() -> Self {
        Entrypoint {
            env: Environment::new_or_prod(),
            format: None,
        }
    }
}

/// sentinel struct which guarantees that we called [Entrypoint::init]
#[derive(Debug)]
pub struct InitializedEntrypoint {
    /// The environment the process was initialized for
    pub env: Environment,
}

impl Entrypoint {
    /// create a new instance of [Self] for an explicit [Environment]
    pub fn new(env: Environment) -> Self {
        Self { env, format: None }
    }

    /// override the log format otherwise derived from the environment
    pub fn log_format(mut self, format: LogFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// the log format [Self::init] will install
    pub fn resolved_format(&self) -> LogFormat {
        self.format.unwrap_or_else(|| LogFormat::from(self.env))
    }

    /// consume self, initialize this binary, and return a proof that it was initialized
    pub fn init(self) -> InitializedEntrypoint {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_file(true)
            .with_line_number(true);

        match self.resolved_format() {
            LogFormat::Pretty => builder.with_ansi(true).pretty().init(),
            LogFormat::Json => builder
                .with_ansi(false)
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .flatten_event(true)
                .init(),
        }

        tracing::trace!(env=%self.env, "entrypoint initialized");

        InitializedEntrypoint { env: self.env }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_logs_pretty() {
        let entrypoint = Entrypoint::new(Environment::Local);
        assert_eq!(entrypoint.resolved_format(), LogFormat::Pretty);
    }

    #[test]
    fn deployed_environments_log_json() {
        assert_eq!(
            Entrypoint::new(Environment::Production).resolved_format(),
            LogFormat::Json
        );
        assert_eq!(
            Entrypoint::new(Environment::Develop).resolved_format(),
            LogFormat::Json
        );
    }

    #[test]
    fn explicit_format_wins() {
        let entrypoint = Entrypoint::new(Environment::Production).log_format(LogFormat::Pretty);
        assert_eq!(entrypoint.resolved_format(), LogFormat::Pretty);
    }
}
