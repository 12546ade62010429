//! Record source implementations

use crate::core::error::LoadError;
use crate::core::record::Record;
use crate::core::service::{RecordSource, decode_records};
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads the record list from a local JSON file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RecordSource for FileSource {
    fn origin(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<Record>, LoadError> {
        let payload = tokio::fs::read(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.origin(),
                source,
            })?;
        decode_records(&payload, &self.origin())
    }
}

/// Fetches the record list with a single HTTP GET
#[cfg(feature = "remote")]
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

#[cfg(feature = "remote")]
impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[cfg(feature = "remote")]
#[async_trait]
impl RecordSource for HttpSource {
    fn origin(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<Record>, LoadError> {
        let http_error = |e: reqwest::Error| LoadError::Http {
            url: self.url.clone(),
            message: e.to_string(),
        };

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(http_error)?;
        let payload = response.bytes().await.map_err(http_error)?;
        decode_records(&payload, &self.url)
    }
}

/// Records held in memory, handed out as if fetched
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<Record>,
}

impl StaticSource {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl RecordSource for StaticSource {
    fn origin(&self) -> String {
        "memory".to_string()
    }

    async fn fetch(&self) -> Result<Vec<Record>, LoadError> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_file_source_reads_records() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"element_id": "3001", "main_group": "Bricks", "price_cad": 0.35}}]"#
        )
        .unwrap();

        let records = FileSource::new(file.path()).fetch().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category_a, "Bricks");
    }

    #[tokio::test]
    async fn test_file_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("data.json"));
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("data.json"));
    }

    #[tokio::test]
    async fn test_static_source() {
        let source = StaticSource::new(vec![Record::new("1", "", "", "")]);
        assert_eq!(source.fetch().await.unwrap().len(), 1);
        assert_eq!(source.origin(), "memory");
    }
}
