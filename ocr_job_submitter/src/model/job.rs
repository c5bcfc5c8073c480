use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::Serialize;

/// Prefix of every submitted job name
pub const JOB_NAME_PREFIX: &str = "OCR";

const JOB_NAME_TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

/// Everything needed to submit one ocr job to batch
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JobDescriptor {
    pub job_name: String,
    pub job_definition: String,
    pub job_queue: String,
    pub parameters: JobParameters,
}

/// The parameters substituted into the job definition's command
#[derive(Clone, Serialize, PartialEq, Eq)]
pub struct JobParameters {
    /// Signed url the job downloads the document from
    pub url: String,
    /// The decoded object key
    pub key: String,
}

impl JobParameters {
    pub fn into_map(self) -> HashMap<String, String> {
        HashMap::from([
            ("url".to_string(), self.url),
            ("key".to_string(), self.key),
        ])
    }
}

// The query string of a presigned url carries its credentials, keep it out of logs
impl std::fmt::Debug for JobParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let url = match self.url.split_once('?') {
            Some((base, _)) => format!("{base}?<redacted>"),
            None => self.url.clone(),
        };
        f.debug_struct("JobParameters")
            .field("url", &url)
            .field("key", &self.key)
            .finish()
    }
}

/// What batch handed back for a submitted job
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedJob {
    pub job_id: String,
    pub job_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_arn: Option<String>,
}

/// Builds the job name `OCR-{key without extension}-{YYYY-MM-DD-HH-MM-SS}`.
///
/// Names only have second resolution, two submissions of the same key within one second
/// share a name.
pub fn job_name(key: &str, submitted_at: NaiveDateTime) -> String {
    format!(
        "{JOB_NAME_PREFIX}-{}-{}",
        strip_extension(key),
        submitted_at.format(JOB_NAME_TIMESTAMP_FORMAT)
    )
}

/// Drops everything from the first `.` that is followed by at least one character and no
/// line terminator up to the end of the key
fn strip_extension(key: &str) -> &str {
    key.match_indices('.')
        .map(|(i, _)| i)
        .find(|i| {
            let rest = &key[i + 1..];
            !rest.is_empty() && !rest.contains(['\n', '\r', '\u{2028}', '\u{2029}'])
        })
        .map_or(key, |i| &key[..i])
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn strips_extension_and_formats_timestamp() {
        assert_eq!(job_name("scan.pdf", at(9, 7, 2)), "OCR-scan-2024-03-05-09-07-02");
    }

    #[test]
    fn strips_every_extension_after_the_first_dot() {
        assert_eq!(
            job_name("archive.tar.gz", at(23, 59, 59)),
            "OCR-archive-2024-03-05-23-59-59"
        );
    }

    #[test]
    fn keeps_key_without_extension() {
        assert_eq!(job_name("scan", at(0, 0, 0)), "OCR-scan-2024-03-05-00-00-00");
    }

    #[test]
    fn trailing_dot_is_kept() {
        assert_eq!(job_name("scan.", at(0, 0, 0)), "OCR-scan.-2024-03-05-00-00-00");
    }

    #[test]
    fn extension_spanning_a_line_break_is_kept() {
        assert_eq!(strip_extension("a.\nb"), "a.\nb");
        assert_eq!(strip_extension("a.\nb.pdf"), "a.\nb");
        assert_eq!(strip_extension("dir.v1/scan.pdf"), "dir");
    }

    #[test]
    fn debug_output_hides_url_credentials() {
        let job = JobDescriptor {
            job_name: "OCR-scan-2024-03-05-09-07-02".to_string(),
            job_definition: "ocr-def:1".to_string(),
            job_queue: "ocr-queue".to_string(),
            parameters: JobParameters {
                url: "https://ocr-uploads.s3.amazonaws.com/scan.pdf?X-Amz-Signature=abc"
                    .to_string(),
                key: "scan.pdf".to_string(),
            },
        };

        let logged = format!("{job:?}");
        assert!(logged.contains("https://ocr-uploads.s3.amazonaws.com/scan.pdf?<redacted>"));
        assert!(!logged.contains("X-Amz-Signature"));
        assert!(logged.contains("scan.pdf"));
    }

    #[test]
    fn same_key_in_same_second_collides() {
        let first = job_name("scan.pdf", at(9, 7, 2));
        let second = job_name("scan.pdf", at(9, 7, 2));
        assert_eq!(first, second);
    }

    #[test]
    fn parameters_map_has_url_and_key() {
        let map = JobParameters {
            url: "https://signed".to_string(),
            key: "scan.pdf".to_string(),
        }
        .into_map();

        assert_eq!(map.len(), 2);
        assert_eq!(map["url"], "https://signed");
        assert_eq!(map["key"], "scan.pdf");
    }
}
