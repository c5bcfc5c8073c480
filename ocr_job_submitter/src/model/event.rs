use serde::{Deserialize, Serialize};

use crate::error::SubmitError;

// see: https://docs.aws.amazon.com/AmazonS3/latest/userguide/notification-content-structure.html
/// The s3 notification the lambda is invoked with.
/// Only the fields the submitter reads are modelled, everything else is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct S3Notification {
    #[serde(rename = "Records", default)]
    pub records: Vec<NotificationRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationRecord {
    #[serde(default)]
    pub s3: S3Entity,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct S3Entity {
    #[serde(default)]
    pub bucket: Bucket,
    #[serde(default)]
    pub object: Object,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bucket {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Object {
    /// The key exactly as s3 sent it, url encoded with `+` for spaces
    pub key: Option<String>,
}

impl NotificationRecord {
    pub fn new(bucket: &str, key: &str) -> Self {
        Self {
            s3: S3Entity {
                bucket: Bucket {
                    name: Some(bucket.to_string()),
                },
                object: Object {
                    key: Some(key.to_string()),
                },
            },
        }
    }

    pub fn bucket(&self) -> Result<&str, SubmitError> {
        self.s3
            .bucket
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or(SubmitError::MissingField {
                field: "s3.bucket.name",
            })
    }

    pub fn encoded_key(&self) -> Result<&str, SubmitError> {
        self.s3
            .object
            .key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(SubmitError::MissingField {
                field: "s3.object.key",
            })
    }
}

impl S3Notification {
    /// The record this invocation acts on. Records after the first are never processed.
    pub fn first_record(&self) -> Result<&NotificationRecord, SubmitError> {
        self.records.first().ok_or(SubmitError::NoRecords)
    }
}
