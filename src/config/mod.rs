//! Configuration loading and management

use crate::core::error::ConfigError;
use crate::core::query::PAGE_SIZE;
use crate::core::service::RecordSource;
use crate::storage::FileSource;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Where the record list is fetched from
///
/// Exactly one of `path` (local JSON file) or `url` (remote JSON document,
/// requires the `remote` feature) is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::path("data.json")
    }
}

impl SourceConfig {
    pub fn path(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            url: None,
        }
    }

    pub fn url(url: impl Into<String>) -> Self {
        Self {
            path: None,
            url: Some(url.into()),
        }
    }

    /// Build the record source this configuration names
    pub fn build(&self) -> Result<Box<dyn RecordSource>, ConfigError> {
        match (&self.path, &self.url) {
            (Some(path), None) => Ok(Box::new(FileSource::new(path))),
            (None, Some(url)) => Self::remote(url),
            _ => Err(ConfigError::InvalidValue {
                field: "source".to_string(),
                value: format!("{:?}", self),
                message: "exactly one of `path` or `url` must be set".to_string(),
            }),
        }
    }

    #[cfg(feature = "remote")]
    fn remote(url: &str) -> Result<Box<dyn RecordSource>, ConfigError> {
        Ok(Box::new(crate::storage::HttpSource::new(url)))
    }

    #[cfg(not(feature = "remote"))]
    fn remote(url: &str) -> Result<Box<dyn RecordSource>, ConfigError> {
        Err(ConfigError::InvalidValue {
            field: "source.url".to_string(),
            value: url.to_string(),
            message: "remote sources require the `remote` feature".to_string(),
        })
    }
}

/// Complete configuration for a catalog browser
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Record source
    #[serde(default)]
    pub source: SourceConfig,

    /// Listen address of the HTTP host
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Records per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Page title
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_bind() -> String {
    "127.0.0.1:8000".to_string()
}

fn default_page_size() -> usize {
    PAGE_SIZE
}

fn default_title() -> String {
    "NewfoundLUG Bulk 2026 – Parts Browser".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

impl CatalogConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse(&content, Some(path.display().to_string()))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Self::parse(yaml, None)
    }

    fn parse(yaml: &str, file: Option<String>) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file,
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the browser cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "page_size".to_string(),
                value: self.page_size.to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.source.path.is_some() == self.source.url.is_some() {
            return Err(ConfigError::InvalidValue {
                field: "source".to_string(),
                value: format!("{:?}", self.source),
                message: "exactly one of `path` or `url` must be set".to_string(),
            });
        }
        if self.bind.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "bind".to_string(),
                value: self.bind.clone(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// The configuration used when none is given
    pub fn default_config() -> Self {
        Self {
            source: SourceConfig::default(),
            bind: default_bind(),
            page_size: default_page_size(),
            title: default_title(),
        }
    }
}
