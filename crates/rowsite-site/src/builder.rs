//! Static page generation.

use std::fs;
use std::path::{Component, Path, PathBuf};

use rowsite_content::SectionStore;
use rowsite_renderer::PageLayout;

use crate::error::SiteError;

/// Writes one HTML document per page into an output directory.
pub struct StaticSiteBuilder {
    layout: PageLayout,
}

impl StaticSiteBuilder {
    /// Create a builder rendering with `layout`.
    #[must_use]
    pub fn new(layout: PageLayout) -> Self {
        Self { layout }
    }

    /// Layout used for every page.
    #[must_use]
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Render every page of `store` into `output_dir`.
    ///
    /// Returns the paths written, in filename order. Filenames that would
    /// escape `output_dir` (absolute paths, `..`) are skipped with a warning.
    pub fn build(&self, store: &SectionStore, output_dir: &Path) -> Result<Vec<PathBuf>, SiteError> {
        fs::create_dir_all(output_dir).map_err(|e| SiteError::write(output_dir, e))?;

        let mut written = Vec::with_capacity(store.len());
        for page in store.pages() {
            if !is_contained(&page.filename) {
                tracing::warn!(filename = %page.filename, "Skipping page with unsafe filename");
                continue;
            }

            let path = output_dir.join(&page.filename);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| SiteError::write(parent, e))?;
            }
            let html = self.layout.render(page);
            fs::write(&path, html).map_err(|e| SiteError::write(&path, e))?;

            tracing::info!(path = %path.display(), sections = page.sections.len(), "Wrote page");
            written.push(path);
        }

        Ok(written)
    }
}

/// True if `filename` stays inside the output directory when joined to it.
fn is_contained(filename: &str) -> bool {
    let path = Path::new(filename);
    path.components().next().is_some()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
