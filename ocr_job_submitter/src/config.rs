use std::{env::VarError, time::Duration};

pub use ocr_env::Environment;
use thiserror::Error;

/// Signed urls are valid for an hour unless configured otherwise
pub const DEFAULT_PRESIGNED_URL_EXPIRY_SECONDS: u64 = 3600;

/// The longest expiry s3 accepts for a presigned url (7 days)
pub const MAX_PRESIGNED_URL_EXPIRY_SECONDS: u64 = 604_800;

/// An error raised while reading [Config]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigErr {
    #[error("{0} must be provided")]
    Missing(&'static str),
    #[error("{0} must not be empty")]
    Empty(&'static str),
    #[error("{var} must be between 1 and 604800 seconds, got {value}")]
    InvalidExpiry { var: &'static str, value: String },
}

/// The configuration parameters for the lambda.
///
/// These are pulled from environment variables set on the function.
/// See `.env.sample` in the ocr_job_submitter root for details.
#[derive(Debug, Clone)]
pub struct Config {
    /// The batch job definition the submitted job runs
    pub job_definition: String,

    /// The batch job queue the job is submitted to
    pub job_queue: String,

    /// How long the signed url handed to the job stays valid
    pub presigned_url_expiry: Duration,

    /// The environment we are in
    pub environment: Environment,
}

impl Config {
    pub fn new(job_definition: &str, job_queue: &str, environment: Environment) -> Self {
        Config {
            job_definition: job_definition.to_string(),
            job_queue: job_queue.to_string(),
            presigned_url_expiry: Duration::from_secs(DEFAULT_PRESIGNED_URL_EXPIRY_SECONDS),
            environment,
        }
    }

    pub fn from_env() -> Result<Self, ConfigErr> {
        Self::from_vars(|name| std::env::var(name), Environment::new_or_prod())
    }

    /// Builds the config from an arbitrary variable reader
    pub fn from_vars<F>(read: F, environment: Environment) -> Result<Self, ConfigErr>
    where
        F: Fn(&'static str) -> Result<String, VarError>,
    {
        let job_definition = required(&read, "JOB_DEFINITION")?;
        let job_queue = required(&read, "JOB_QUEUE")?;

        let mut config = Config::new(&job_definition, &job_queue, environment);

        if let Ok(value) = read("PRESIGNED_URL_EXPIRY_SECONDS") {
            let seconds = value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| (1..=MAX_PRESIGNED_URL_EXPIRY_SECONDS).contains(s))
                .ok_or(ConfigErr::InvalidExpiry {
                    var: "PRESIGNED_URL_EXPIRY_SECONDS",
                    value,
                })?;
            config.presigned_url_expiry = Duration::from_secs(seconds);
        }

        Ok(config)
    }
}

fn required<F>(read: &F, name: &'static str) -> Result<String, ConfigErr>
where
    F: Fn(&'static str) -> Result<String, VarError>,
{
    let value = read(name).map_err(|_| ConfigErr::Missing(name))?;
    if value.trim().is_empty() {
        return Err(ConfigErr::Empty(name));
    }
    Ok(value)
}
