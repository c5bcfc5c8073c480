use lambda_runtime::tracing;

use crate::{
    context::Context,
    error::SubmitError,
    model::{JobDescriptor, JobParameters, NotificationRecord, SubmittedJob, extract_key, job_name},
};

/// Signs a url for the record's object and submits an ocr job that reads from it.
#[tracing::instrument(skip(ctx, record))]
pub async fn submit_ocr_job(
    ctx: &Context,
    record: &NotificationRecord,
) -> Result<SubmittedJob, SubmitError> {
    let bucket = record.bucket()?;
    let key = extract_key(record)?;

    let url = ctx
        .s3_client
        .get_presigned_url(bucket, &key, ctx.config.presigned_url_expiry)
        .await?;

    tracing::trace!("presigned url generated");

    let job = JobDescriptor {
        job_name: job_name(&key, (ctx.clock)()),
        job_definition: ctx.config.job_definition.clone(),
        job_queue: ctx.config.job_queue.clone(),
        parameters: JobParameters { url, key },
    };

    tracing::info!(job=?job, "submitting job");

    let submitted = ctx.batch_client.submit_job(job).await?;

    tracing::info!(job_id=%submitted.job_id, job_name=%submitted.job_name, "job submitted");

    Ok(submitted)
}
