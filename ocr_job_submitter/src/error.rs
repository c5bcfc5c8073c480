/// Every way submitting an ocr job for a notification can fail.
///
/// Each variant keeps the message of the failure that caused it so the lambda logs and the
/// invocation error still say what actually went wrong.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("notification contained no records")]
    NoRecords,
    #[error("notification record is missing {field}")]
    MissingField { field: &'static str },
    #[error("unable to decode object key {key}: {details}")]
    Decode { key: String, details: String },
    #[error("object {key} not found in bucket {bucket}")]
    NotFound { bucket: String, key: String },
    #[error("unable to query object attributes: {details}")]
    StorageQuery { details: String },
    #[error("unable to sign url: {details}")]
    Sign { details: String },
    #[error("unable to submit job: {details}")]
    Submit { details: String },
}

impl SubmitError {
    /// A stable tag for the kind of failure, used as a log field
    pub fn kind(&self) -> &'static str {
        match self {
            SubmitError::NoRecords => "no_records",
            SubmitError::MissingField { .. } => "missing_field",
            SubmitError::Decode { .. } => "decode_failure",
            SubmitError::NotFound { .. } => "not_found",
            SubmitError::StorageQuery { .. } => "storage_query_failure",
            SubmitError::Sign { .. } => "sign_failure",
            SubmitError::Submit { .. } => "submit_failure",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_keeps_original_details() {
        let err = SubmitError::Submit {
            details: "JobQueue  not found".to_string(),
        };
        assert_eq!(err.to_string(), "unable to submit job: JobQueue  not found");
        assert_eq!(err.kind(), "submit_failure");
    }

    #[test]
    fn not_found_names_the_object() {
        let err = SubmitError::NotFound {
            bucket: "uploads".to_string(),
            key: "scan.pdf".to_string(),
        };
        assert_eq!(err.to_string(), "object scan.pdf not found in bucket uploads");
        assert_eq!(err.kind(), "not_found");
    }
}
