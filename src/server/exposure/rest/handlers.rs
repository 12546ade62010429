//! HTTP handlers for the catalog routes
//!
//! Every request rebuilds a session from its query parameters: criteria
//! first (which resets to page 1), then the requested page, clamped.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::category::derive_category_b_options;
use crate::core::error::CatalogError;
use crate::core::filter::selection;
use crate::core::query::{PaginatedResponse, QueryParams};
use crate::core::session::CatalogSession;
use crate::server::host::ServerHost;
use crate::view::{CardView, FilterChoices, PageSummary};

/// Response for the JSON record listing
#[derive(Debug, Serialize)]
pub struct RecordsResponse {
    #[serde(flatten)]
    pub page: PaginatedResponse<CardView>,
    pub summary: PageSummary,
    pub choices: FilterChoices,
}

/// Query for the category choice lists
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CategoriesQuery {
    pub main_group: Option<String>,
    pub sub_group: Option<String>,
}

/// Response for the category choice lists
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub main_groups: Vec<String>,
    pub sub_groups: Vec<String>,
    /// The prior sub group if still valid, otherwise `null`
    pub sub_group: Option<String>,
}

fn session_for(host: &ServerHost, params: &QueryParams) -> Result<CatalogSession, CatalogError> {
    let mut session = host.session(params.criteria())?;
    session.go_to_page(params.page());
    Ok(session)
}

/// GET / - HTML catalog page
pub async fn catalog_page(
    State(host): State<Arc<ServerHost>>,
    Query(params): Query<QueryParams>,
) -> Result<Response, CatalogError> {
    let session = match session_for(&host, &params) {
        Ok(session) => session,
        Err(CatalogError::Unavailable { .. }) => {
            let page = host.renderer.render_failure_page()?;
            return Ok((StatusCode::SERVICE_UNAVAILABLE, Html(page)).into_response());
        }
        Err(err) => return Err(err),
    };

    let page = host.renderer.render_page(&session.view())?;
    Ok(Html(page).into_response())
}

/// GET /api/records - JSON page of record cards
pub async fn list_records(
    State(host): State<Arc<ServerHost>>,
    Query(params): Query<QueryParams>,
) -> Result<Json<RecordsResponse>, CatalogError> {
    let session = session_for(&host, &params)?;
    let view = session.view();

    Ok(Json(RecordsResponse {
        page: PaginatedResponse {
            data: view.cards,
            pagination: session.pagination(),
        },
        summary: view.summary,
        choices: view.choices,
    }))
}

/// GET /api/categories - main group and dependent sub group lists
pub async fn list_categories(
    State(host): State<Arc<ServerHost>>,
    Query(query): Query<CategoriesQuery>,
) -> Result<Json<CategoriesResponse>, CatalogError> {
    let store = host.store()?;
    let main_group = selection(query.main_group);
    let prior = selection(query.sub_group);
    let (sub_groups, sub_group) =
        derive_category_b_options(store.records(), main_group.as_deref(), prior.as_deref());

    Ok(Json(CategoriesResponse {
        main_groups: store.main_groups().to_vec(),
        sub_groups,
        sub_group,
    }))
}

/// GET /health - liveness and load status
pub async fn health_check(State(host): State<Arc<ServerHost>>) -> impl IntoResponse {
    let status = if host.is_ready() { "ok" } else { "degraded" };
    Json(serde_json::json!({
        "status": status,
        "service": "parts-browser",
        "records": host.record_count()
    }))
}
