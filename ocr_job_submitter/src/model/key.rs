use crate::{error::SubmitError, model::NotificationRecord};

/// Reverses the encoding s3 applies to keys in event notifications:
/// `+` becomes a space and the rest is percent decoded.
///
/// A `%` that does not start a two digit hex escape, or escapes that do not decode to utf-8,
/// are rejected.
pub fn decode_key(encoded: &str) -> Result<String, SubmitError> {
    let spaced = encoded.replace('+', " ");

    if let Some(position) = malformed_escape(&spaced) {
        return Err(SubmitError::Decode {
            key: encoded.to_string(),
            details: format!("malformed percent escape at byte {position}"),
        });
    }

    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| SubmitError::Decode {
            key: encoded.to_string(),
            details: e.to_string(),
        })
}

/// Extracts the literal object key from a notification record
pub fn extract_key(record: &NotificationRecord) -> Result<String, SubmitError> {
    decode_key(record.encoded_key()?)
}

fn malformed_escape(value: &str) -> Option<usize> {
    let bytes = value.as_bytes();
    bytes
        .iter()
        .enumerate()
        .filter(|(_, b)| **b == b'%')
        .map(|(i, _)| i)
        .find(|i| {
            !matches!(
                (bytes.get(i + 1), bytes.get(i + 2)),
                (Some(hi), Some(lo)) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plus_and_escapes_become_spaces() {
        assert_eq!(decode_key("a+b%20c").unwrap(), "a b c");
    }

    #[test]
    fn decodes_reserved_and_unicode_characters() {
        assert_eq!(
            decode_key("invoices/2024%2F03/r%C3%A9sum%C3%A9+final.pdf").unwrap(),
            "invoices/2024/03/résumé final.pdf"
        );
    }

    #[test]
    fn encoded_plus_stays_a_plus() {
        assert_eq!(decode_key("c%2B%2B+notes.pdf").unwrap(), "c++ notes.pdf");
    }

    #[test]
    fn plain_key_is_unchanged() {
        assert_eq!(decode_key("scan.pdf").unwrap(), "scan.pdf");
    }

    #[test]
    fn truncated_escape_is_a_decode_failure() {
        let err = decode_key("report%2").unwrap_err();
        assert_eq!(err.kind(), "decode_failure");
    }

    #[test]
    fn non_hex_escape_is_a_decode_failure() {
        assert!(matches!(
            decode_key("100%zz.pdf"),
            Err(SubmitError::Decode { .. })
        ));
    }

    #[test]
    fn invalid_utf8_is_a_decode_failure() {
        assert!(matches!(
            decode_key("bad%FF.pdf"),
            Err(SubmitError::Decode { .. })
        ));
    }

    #[test]
    fn extracts_from_record() {
        let record = NotificationRecord::new("ocr-uploads", "my+scan.pdf");
        assert_eq!(extract_key(&record).unwrap(), "my scan.pdf");
    }
}
