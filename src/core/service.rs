//! Service trait for acquiring the record set

use crate::core::error::LoadError;
use crate::core::record::Record;
use async_trait::async_trait;

/// A place the catalog's records are fetched from, exactly once per session
///
/// Implementations perform a single fetch with no retry and no timeout.
/// Per-record oddities are tolerated during decoding; only I/O, transport,
/// or a payload that is not a JSON array of objects is a [`LoadError`].
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Human-readable origin (path or URL) used in logs and errors
    fn origin(&self) -> String;

    /// Fetch and decode the full record list
    async fn fetch(&self) -> Result<Vec<Record>, LoadError>;
}

/// Decode a record payload
pub fn decode_records(payload: &[u8], origin: &str) -> Result<Vec<Record>, LoadError> {
    serde_json::from_slice(payload).map_err(|e| LoadError::Decode {
        origin: origin.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_array() {
        let payload = br#"[{"element_id": "1"}, {"element_id": 2, "price_cad": null}]"#;
        let records = decode_records(payload, "inline").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].id, "2");
    }

    #[test]
    fn test_decode_rejects_non_array() {
        let err = decode_records(br#"{"element_id": "1"}"#, "inline").unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = decode_records(b"<html>404</html>", "data.json").unwrap_err();
        assert!(err.to_string().contains("data.json"));
    }
}
