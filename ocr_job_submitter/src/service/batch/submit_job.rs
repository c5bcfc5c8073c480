use aws_sdk_batch as batch;
use aws_sdk_batch::error::DisplayErrorContext;
use lambda_runtime::tracing;

use crate::{
    error::SubmitError,
    model::{JobDescriptor, SubmittedJob},
};

#[tracing::instrument(skip(client), fields(job_name=%job.job_name))]
pub async fn submit_job(
    client: &batch::Client,
    job: JobDescriptor,
) -> Result<SubmittedJob, SubmitError> {
    #[cfg(feature = "local")]
    {
        tracing::info!(job=?job, "local feature enabled, skipping batch submission");
        let _ = client;
        return Ok(SubmittedJob {
            job_id: format!("local-{}", job.job_name),
            job_name: job.job_name,
            job_arn: None,
        });
    }

    #[cfg(not(feature = "local"))]
    {
        let output = client
            .submit_job()
            .job_name(job.job_name)
            .job_definition(job.job_definition)
            .job_queue(job.job_queue)
            .set_parameters(Some(job.parameters.into_map()))
            .send()
            .await
            .map_err(|e| {
                tracing::debug!(error=?e, "batch rejected job");
                SubmitError::Submit {
                    details: DisplayErrorContext(&e).to_string(),
                }
            })?;

        Ok(SubmittedJob {
            job_id: output.job_id().to_string(),
            job_name: output.job_name().to_string(),
            job_arn: output.job_arn().map(str::to_string),
        })
    }
}
