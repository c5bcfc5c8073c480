use lambda_runtime::tracing;

use crate::{context::Context, error::SubmitError, model::NotificationRecord, model::extract_key};

/// Checks that the object the record points at can be read from s3.
///
/// Returns `Ok(false)` when s3 reports there is no such key, any other storage failure is an error.
#[tracing::instrument(skip(ctx, record))]
pub async fn verify_object_exists(
    ctx: &Context,
    record: &NotificationRecord,
) -> Result<bool, SubmitError> {
    let bucket = record.bucket()?;
    let key = extract_key(record)?;

    match ctx.s3_client.get_object_attributes(bucket, &key).await {
        Ok(attributes) => {
            tracing::debug!(bucket=%bucket, key=%key, attributes=?attributes, "object attributes");
            Ok(true)
        }
        Err(SubmitError::NotFound { .. }) => {
            tracing::warn!(bucket=%bucket, key=%key, "object does not exist");
            Ok(false)
        }
        Err(e) => Err(e),
    }
}
