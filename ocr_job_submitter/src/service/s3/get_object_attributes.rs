use aws_sdk_s3 as s3;
use aws_sdk_s3::error::DisplayErrorContext;
use lambda_runtime::tracing;
use s3::types::ObjectAttributes;

use crate::error::SubmitError;

/// The attributes requested when checking that an object exists
pub const REQUESTED_ATTRIBUTES: [&str; 5] =
    ["ETag", "Checksum", "ObjectParts", "StorageClass", "ObjectSize"];

/// The subset of object attributes we log when verifying an object
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectSummary {
    pub e_tag: Option<String>,
    pub checksum_sha256: Option<String>,
    pub total_parts_count: Option<i32>,
    pub storage_class: Option<String>,
    pub object_size: Option<i64>,
}

#[tracing::instrument(skip(client))]
pub async fn get_object_attributes(
    client: &s3::Client,
    bucket: &str,
    key: &str,
) -> Result<ObjectSummary, SubmitError> {
    let attributes = REQUESTED_ATTRIBUTES
        .iter()
        .map(|a| ObjectAttributes::from(*a))
        .collect::<Vec<ObjectAttributes>>();

    let resp = client
        .get_object_attributes()
        .bucket(bucket)
        .key(key)
        .set_object_attributes(Some(attributes))
        .send()
        .await;

    let output = match resp {
        Ok(output) => output,
        Err(e) => {
            if e.as_service_error().map(|e| e.is_no_such_key()) == Some(true) {
                return Err(SubmitError::NotFound {
                    bucket: bucket.to_string(),
                    key: key.to_string(),
                });
            }
            return Err(SubmitError::StorageQuery {
                details: DisplayErrorContext(&e).to_string(),
            });
        }
    };

    Ok(ObjectSummary {
        e_tag: output.e_tag().map(str::to_string),
        checksum_sha256: output
            .checksum()
            .and_then(|c| c.checksum_sha256())
            .map(str::to_string),
        total_parts_count: output.object_parts().and_then(|p| p.total_parts_count()),
        storage_class: output.storage_class().map(|c| c.as_str().to_string()),
        object_size: output.object_size(),
    })
}
