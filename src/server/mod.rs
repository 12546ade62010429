//! Server module for hosting the catalog over HTTP
//!
//! This module provides a `ServerBuilder` that performs the startup load and
//! registers the catalog page, JSON API and health routes.

pub mod builder;
pub mod exposure;
pub mod host;
pub mod router;

pub use builder::ServerBuilder;
pub use host::{CatalogState, ServerHost};
