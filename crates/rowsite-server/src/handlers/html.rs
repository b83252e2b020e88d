//! Rendered page endpoint.
//!
//! Renders the current generation of a page into a full HTML document on
//! every request, so edits to the content source show up without a rebuild.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use chrono::{DateTime, Utc};
use md5::{Digest, Md5};
use rowsite_site::normalize_filename;

use crate::error::ServerError;
use crate::state::AppState;

/// Handle GET / (the index page).
pub(crate) async fn get_index(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    render_page(&state, "index.html", &headers)
}

/// Handle GET /{page}.
pub(crate) async fn get_page(
    Path(page): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    render_page(&state, &normalize_filename(&page), &headers)
}

fn render_page(
    state: &AppState,
    filename: &str,
    headers: &HeaderMap,
) -> Result<Response, ServerError> {
    let snapshot = state.cache.snapshot()?;
    let page = snapshot.page(filename)?;
    let html = state.layout.render(page);

    let etag = compute_etag(&state.version, &html);

    // Check If-None-Match header for conditional request
    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    let mut response = (
        [
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "no-cache".to_owned()),
        ],
        Html(html),
    )
        .into_response();

    if let Some(modified) = snapshot.modified() {
        let last_modified: DateTime<Utc> = modified.into();
        if let Ok(value) = last_modified
            .format("%a, %d %b %Y %H:%M:%S GMT")
            .to_string()
            .parse::<HeaderValue>()
        {
            response.headers_mut().insert(header::LAST_MODIFIED, value);
        }
    }

    Ok(response)
}

/// Compute `ETag` from version and content.
///
/// Uses MD5 hash truncated to 64 bits (16 hex chars).
fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}
