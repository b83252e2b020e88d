//! Application state.
//!
//! Shared state for all request handlers.

use rowsite_renderer::PageLayout;
use rowsite_site::ContentCache;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Live content cache over the CSV source.
    pub(crate) cache: ContentCache,
    /// Page chrome for rendered documents.
    pub(crate) layout: PageLayout,
    /// Application version (part of every `ETag`).
    pub(crate) version: String,
}
