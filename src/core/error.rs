//! Typed error handling for the parts browser
//!
//! Per-record problems (null prices, missing images, empty categories) are
//! never errors: they are absorbed into "empty" semantics while decoding.
//! What remains is a small hierarchy:
//!
//! - [`LoadError`]: the single startup fetch of the record source failed
//! - [`ConfigError`]: the YAML configuration could not be read or is invalid
//! - [`CatalogError`]: the top-level error, mapped onto HTTP responses
//!
//! # Example
//!
//! ```rust,ignore
//! use parts_browser::prelude::*;
//!
//! match FileSource::new("data.json").fetch().await {
//!     Ok(records) => println!("loaded {} records", records.len()),
//!     Err(LoadError::Io { path, .. }) => eprintln!("cannot read {}", path),
//!     Err(e) => eprintln!("load failed: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// The main error type for the parts browser
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The record source could not be loaded
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The catalog failed to load at startup and serves no records
    #[error("Catalog unavailable: {reason}")]
    Unavailable { reason: String },

    /// Internal errors (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional remediation hint for the operator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl CatalogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::Load(_) => StatusCode::SERVICE_UNAVAILABLE,
            CatalogError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CatalogError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            CatalogError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::Load(e) => e.error_code(),
            CatalogError::Config(_) => "CONFIG_ERROR",
            CatalogError::Unavailable { .. } => "CATALOG_UNAVAILABLE",
            CatalogError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            hint: self.hint(),
        }
    }

    fn hint(&self) -> Option<String> {
        match self {
            CatalogError::Load(_) | CatalogError::Unavailable { .. } => {
                Some(crate::view::html::LOAD_FAILURE_HINT.to_string())
            }
            _ => None,
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Load Errors
// =============================================================================

/// Errors raised by the single startup fetch of the record source
#[derive(Debug, Error)]
pub enum LoadError {
    /// The local record file could not be read
    #[error("Failed to read record file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The remote record source could not be fetched
    #[error("Failed to fetch '{url}': {message}")]
    Http { url: String, message: String },

    /// The payload is not a JSON array of records
    #[error("Malformed record payload from '{origin}': {message}")]
    Decode { origin: String, message: String },
}

impl LoadError {
    pub fn error_code(&self) -> &'static str {
        match self {
            LoadError::Io { .. } => "LOAD_IO_ERROR",
            LoadError::Http { .. } => "LOAD_HTTP_ERROR",
            LoadError::Decode { .. } => "LOAD_DECODE_ERROR",
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration
    #[error("Failed to parse config{}: {message}", .file.as_ref().map(|f| format!(" file '{}'", f)).unwrap_or_default())]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// Configuration file could not be read
    #[error("Failed to read config file '{path}': {message}")]
    IoError { path: String, message: String },
}
