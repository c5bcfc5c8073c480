mod submit_job;

use aws_sdk_batch as batch;
use lambda_runtime::tracing;
#[allow(unused_imports)]
use mockall::automock;

use crate::{
    error::SubmitError,
    model::{JobDescriptor, SubmittedJob},
};

#[cfg(test)]
pub use MockBatchClient as Batch;
#[cfg(not(test))]
pub use BatchClient as Batch;

#[derive(Clone, Debug)]
pub struct BatchClient {
    /// Inner Batch client
    inner: batch::Client,
}

#[cfg_attr(test, automock)]
impl BatchClient {
    pub fn new(inner: batch::Client) -> Self {
        Self { inner }
    }

    /// Submits the job to its queue. Single attempt, no retries.
    #[tracing::instrument(skip(self))]
    pub async fn submit_job(&self, job: JobDescriptor) -> Result<SubmittedJob, SubmitError> {
        submit_job::submit_job(&self.inner, job).await
    }
}
