//! REST exposure for the catalog
//!
//! Consumes a `ServerHost` and produces an Axum `Router` serving the HTML
//! page, the JSON API and health checks.

pub mod handlers;

use super::super::host::ServerHost;
use crate::server::router::build_catalog_routes;
use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// Returns a router with:
    /// - Health check routes
    /// - Catalog page and JSON routes
    /// - Custom routes
    pub fn build_router(host: Arc<ServerHost>, custom_routes: Vec<Router>) -> Router {
        let mut app = Self::health_routes(host.clone()).merge(build_catalog_routes(host));

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        app.layer(TraceLayer::new_for_http())
    }

    /// Build health check routes
    fn health_routes(host: Arc<ServerHost>) -> Router {
        Router::new()
            .route("/health", get(handlers::health_check))
            .route("/healthz", get(handlers::health_check))
            .with_state(host)
    }
}
