//! Content API endpoints.
//!
//! Serves the live cache as JSON: the whole site map, one page, or one
//! section of a page.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use rowsite_content::{PageContent, Section, SiteMap};
use rowsite_site::normalize_filename;

use crate::error::ServerError;
use crate::state::AppState;

/// Handle GET /api/pages.
pub(crate) async fn get_site_map(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SiteMap>, ServerError> {
    Ok(Json(state.cache.site_map()?))
}

/// Handle GET /api/pages/{page}.
pub(crate) async fn get_page(
    Path(page): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<PageContent>, ServerError> {
    let filename = normalize_filename(&page);
    Ok(Json(state.cache.page(&filename)?))
}

/// Handle GET /api/pages/{page}/sections/{section}.
pub(crate) async fn get_section(
    Path((page, section)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Section>, ServerError> {
    let filename = normalize_filename(&page);
    Ok(Json(state.cache.section(&filename, &section)?))
}
