//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rowsite_site::SiteError;
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// No page targets the requested filename.
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// Page exists but the section does not.
    #[error("Section not found: {section} in {page}")]
    SectionNotFound { page: String, section: String },

    /// Content source missing or unreadable.
    #[error("Content source unavailable: {0}")]
    SourceUnavailable(String),
}

impl From<SiteError> for ServerError {
    fn from(err: SiteError) -> Self {
        match err {
            SiteError::PageNotFound(page) => Self::PageNotFound(page),
            SiteError::SectionNotFound { page, section } => {
                Self::SectionNotFound { page, section }
            }
            other => Self::SourceUnavailable(other.to_string()),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::PageNotFound(page) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Page not found", "path": page}),
            ),
            Self::SectionNotFound { page, section } => (
                StatusCode::NOT_FOUND,
                json!({"error": "Section not found", "path": page, "section": section}),
            ),
            Self::SourceUnavailable(message) => {
                tracing::error!(error = %message, "Content source unavailable");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": "Content source unavailable"}),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
