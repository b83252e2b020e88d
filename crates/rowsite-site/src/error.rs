//! Site error types.

use std::path::PathBuf;

use rowsite_content::SourceError;

/// Error returned by cache lookups and output generation.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Content source missing or unreadable.
    #[error(transparent)]
    SourceUnavailable(#[from] SourceError),
    /// No page targets the requested filename.
    #[error("Page not found: {0}")]
    PageNotFound(String),
    /// Page exists but has no section with the requested key.
    #[error("Section not found: {section} in {page}")]
    SectionNotFound {
        /// Page filename.
        page: String,
        /// Requested section key.
        section: String,
    },
    /// Output file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// JSON serialization failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SiteError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// True for lookup misses (page or section), as opposed to failures.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PageNotFound(_) | Self::SectionNotFound { .. })
    }
}
