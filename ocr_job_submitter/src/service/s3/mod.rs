mod get_object_attributes;
mod presign;

use std::time::Duration;

use aws_sdk_s3 as s3;
use lambda_runtime::tracing;
#[allow(unused_imports)]
use mockall::automock;

pub use get_object_attributes::{ObjectSummary, REQUESTED_ATTRIBUTES};

use crate::error::SubmitError;

#[cfg(test)]
pub use MockS3Client as S3;
#[cfg(not(test))]
pub use S3Client as S3;

#[derive(Clone, Debug)]
pub struct S3Client {
    /// Inner S3 client
    inner: s3::Client,
}

#[cfg_attr(test, automock)]
impl S3Client {
    pub fn new(inner: s3::Client) -> Self {
        Self { inner }
    }

    /// Fetches the attributes of an object, failing with [SubmitError::NotFound] if there is no such key.
    #[tracing::instrument(skip(self))]
    pub async fn get_object_attributes(
        &self,
        bucket: &str,
        key: &str,
    ) -> Result<ObjectSummary, SubmitError> {
        get_object_attributes::get_object_attributes(&self.inner, bucket, key).await
    }

    /// Gets a presigned GET url for the provided key.
    #[tracing::instrument(skip(self))]
    pub async fn get_presigned_url(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, SubmitError> {
        presign::get_presigned_url(&self.inner, bucket, key, expires_in).await
    }
}
