use lambda_runtime::{Error, LambdaEvent, tracing};

use crate::{
    context::Context,
    error::SubmitError,
    model::{HandlerResponse, S3Notification, extract_key},
    service,
};

/// Processes the s3 notification.
/// Only the first record is acted on, the notification is expected to carry a single object.
#[tracing::instrument(skip(ctx, event))]
pub async fn handler(
    ctx: Context,
    event: LambdaEvent<S3Notification>,
) -> Result<HandlerResponse, Error> {
    tracing::trace!(payload=?event.payload, "handler invoked");

    process(&ctx, &event.payload).await.map_err(|e| {
        tracing::error!(error=?e, kind=%e.kind(), "unable to submit ocr job");
        Error::from(e)
    })
}

/// Verifies the first record's object exists, then submits an ocr job for it.
pub async fn process(
    ctx: &Context,
    notification: &S3Notification,
) -> Result<HandlerResponse, SubmitError> {
    let record = notification.first_record()?;

    if notification.records.len() > 1 {
        tracing::warn!(
            ignored = notification.records.len() - 1,
            "notification has more than one record, only the first is processed"
        );
    }

    if !service::ocr::verify_object_exists(ctx, record).await? {
        return Err(SubmitError::NotFound {
            bucket: record.bucket()?.to_string(),
            key: extract_key(record)?,
        });
    }

    service::ocr::submit_ocr_job(ctx, record).await?;

    tracing::info!("processing complete");

    Ok(HandlerResponse::ok())
}
