use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::{config::Config, service};

/// Source of the wall-clock time used in job names
pub type Clock = fn() -> NaiveDateTime;

/// The local wall-clock time
pub fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Handles constructed once per process and shared by every invocation
#[derive(Clone)]
pub struct Context {
    pub s3_client: Arc<service::s3::S3>,
    pub batch_client: Arc<service::batch::Batch>,
    pub config: Arc<Config>,
    pub clock: Clock,
}

impl Context {
    pub fn new(
        s3_client: service::s3::S3,
        batch_client: service::batch::Batch,
        config: Config,
    ) -> Self {
        Self {
            s3_client: Arc::new(s3_client),
            batch_client: Arc::new(batch_client),
            config: Arc::new(config),
            clock: local_now,
        }
    }

    /// Replaces the clock, used to pin job names in tests
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }
}
