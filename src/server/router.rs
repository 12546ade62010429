//! Router builder for the catalog routes

use crate::server::exposure::rest::handlers::{catalog_page, list_categories, list_records};
use crate::server::host::ServerHost;
use axum::{Router, routing::get};
use std::sync::Arc;

/// Build catalog routes
///
/// - GET / - HTML page for `?q=&main_group=&sub_group=&page=`
/// - GET /api/records - JSON page of cards for the same parameters
/// - GET /api/categories - main groups and dependent sub groups
pub fn build_catalog_routes(host: Arc<ServerHost>) -> Router {
    Router::new()
        .route("/", get(catalog_page))
        .route("/api/records", get(list_records))
        .route("/api/categories", get(list_categories))
        .with_state(host)
}
