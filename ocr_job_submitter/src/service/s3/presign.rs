use std::time::Duration;

use aws_sdk_s3 as s3;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::presigning::PresigningConfig;
use lambda_runtime::tracing;

use crate::error::SubmitError;

/// Generate a url for a presigned GET request that expires after `expires_in`.
#[tracing::instrument(skip(client))]
pub async fn get_presigned_url(
    client: &s3::Client,
    bucket: &str,
    key: &str,
    expires_in: Duration,
) -> Result<String, SubmitError> {
    let presigning_config = PresigningConfig::expires_in(expires_in).map_err(|e| {
        SubmitError::Sign {
            details: e.to_string(),
        }
    })?;

    let presigned_request = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .presigned(presigning_config)
        .await
        .map_err(|e| SubmitError::Sign {
            details: DisplayErrorContext(&e).to_string(),
        })?;

    Ok(presigned_request.uri().to_string())
}
