//! Live content cache.
//!
//! [`ContentCache`] serves pages from an in-memory [`ContentSnapshot`] and
//! re-parses the CSV source only when its modification time advances.
//!
//! # Thread Safety
//!
//! - Readers clone the current `Arc<ContentSnapshot>` under a brief read lock
//!   and never observe a half-built snapshot.
//! - Refreshes are serialized by a reload mutex with a double check, so at
//!   most one thread parses at a time.
//! - The new snapshot is parsed into a local value and installed with a
//!   single `Arc` swap under the write lock.
//!
//! # Staleness
//!
//! A refresh happens only when the source mtime is strictly greater than the
//! mtime of the loaded snapshot. Content rewritten without an mtime bump (or
//! within the filesystem's timestamp resolution) is served stale until the
//! next bump.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, RwLock};
use std::time::SystemTime;

use rowsite_content::{PageContent, Section, SectionStore, SiteMap, load_store, source_modified};

use crate::error::SiteError;

/// One generation of parsed content.
#[derive(Debug, Default)]
pub struct ContentSnapshot {
    store: SectionStore,
    modified: Option<SystemTime>,
}

impl ContentSnapshot {
    /// Parsed pages of this generation.
    #[must_use]
    pub fn store(&self) -> &SectionStore {
        &self.store
    }

    /// Source modification time this generation was loaded from.
    ///
    /// `None` before the first load.
    #[must_use]
    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }

    /// Get a page, or [`SiteError::PageNotFound`].
    pub fn page(&self, filename: &str) -> Result<&PageContent, SiteError> {
        self.store
            .page(filename)
            .ok_or_else(|| SiteError::PageNotFound(filename.to_owned()))
    }

    /// True if this generation is at least as new as `modified`.
    fn is_current(&self, modified: SystemTime) -> bool {
        self.modified.is_some_and(|loaded| modified <= loaded)
    }
}

/// Modification-time gated cache over a CSV content source.
pub struct ContentCache {
    source_path: PathBuf,
    business: Option<String>,
    /// Serializes refreshes.
    reload_lock: Mutex<()>,
    /// Current generation (atomically swappable).
    current: RwLock<Arc<ContentSnapshot>>,
}

impl ContentCache {
    /// Create an empty cache over `source_path`.
    ///
    /// Nothing is read until the first query.
    #[must_use]
    pub fn new(source_path: PathBuf) -> Self {
        Self::with_business(source_path, None)
    }

    /// Create an empty cache that keeps only one business's sections.
    ///
    /// See [`SectionStore::build`] for the filter rules.
    #[must_use]
    pub fn with_business(source_path: PathBuf, business: Option<String>) -> Self {
        Self {
            source_path,
            business,
            reload_lock: Mutex::new(()),
            current: RwLock::new(Arc::new(ContentSnapshot::default())),
        }
    }

    /// Path of the content source.
    #[must_use]
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Business filter applied on every load.
    #[must_use]
    pub fn business(&self) -> Option<&str> {
        self.business.as_deref()
    }

    /// Current snapshot without a refresh check.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    fn state(&self) -> Arc<ContentSnapshot> {
        Arc::clone(&self.current.read().unwrap())
    }

    /// Modification time of the loaded generation, `None` before the first load.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn last_modified(&self) -> Option<SystemTime> {
        self.state().modified()
    }

    /// Refresh if the source changed and return the current snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::SourceUnavailable`] if the source cannot be
    /// statted or read. The previous generation stays installed.
    ///
    /// # Panics
    ///
    /// Panics if internal locks are poisoned.
    pub fn snapshot(&self) -> Result<Arc<ContentSnapshot>, SiteError> {
        let modified = source_modified(&self.source_path)?;

        // Fast path: loaded generation is current
        let state = self.state();
        if state.is_current(modified) {
            tracing::debug!(path = %self.source_path.display(), "Content cache is current");
            return Ok(state);
        }

        // Slow path: acquire reload lock
        let _guard = self.reload_lock.lock().unwrap();

        // Double-check after acquiring lock
        let state = self.state();
        if state.is_current(modified) {
            return Ok(state);
        }

        let store = load_store(&self.source_path, self.business.as_deref())?;
        tracing::info!(
            path = %self.source_path.display(),
            pages = store.len(),
            sections = store.section_count(),
            "Reloaded content source"
        );

        let snapshot = Arc::new(ContentSnapshot {
            store,
            modified: Some(modified),
        });
        *self.current.write().unwrap() = Arc::clone(&snapshot);

        Ok(snapshot)
    }

    /// Get a page by filename.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::PageNotFound`] if no section targets `filename`,
    /// or [`SiteError::SourceUnavailable`] if the source cannot be read.
    pub fn page(&self, filename: &str) -> Result<PageContent, SiteError> {
        self.snapshot()?.page(filename).cloned()
    }

    /// Get every page, ordered by filename.
    pub fn site_map(&self) -> Result<SiteMap, SiteError> {
        Ok(self.snapshot()?.store().site_map())
    }

    /// Get one section of a page.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::PageNotFound`] or [`SiteError::SectionNotFound`]
    /// for lookup misses.
    pub fn section(&self, filename: &str, key: &str) -> Result<Section, SiteError> {
        let snapshot = self.snapshot()?;
        let page = snapshot.page(filename)?;
        page.section(key)
            .cloned()
            .ok_or_else(|| SiteError::SectionNotFound {
                page: filename.to_owned(),
                section: key.to_owned(),
            })
    }
}

/// Turn a logical page name into a target filename.
///
/// Trims whitespace, maps an empty name to `index.html` and appends `.html`
/// when missing.
///
/// # Examples
///
/// ```
/// use rowsite_site::normalize_filename;
///
/// assert_eq!(normalize_filename("menu"), "menu.html");
/// assert_eq!(normalize_filename("menu.html"), "menu.html");
/// assert_eq!(normalize_filename(" "), "index.html");
/// ```
#[must_use]
pub fn normalize_filename(page: &str) -> String {
    let page = page.trim();
    if page.is_empty() {
        "index.html".to_owned()
    } else if page.ends_with(".html") {
        page.to_owned()
    } else {
        format!("{page}.html")
    }
}
