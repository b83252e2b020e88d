//! JSON content export.
//!
//! Output shape:
//!
//! ```json
//! {
//!   "index.html": [
//!     {"page": "index", "section": "hero", "title": "Welcome", ...}
//!   ]
//! }
//! ```
//!
//! Keys are filenames in ascending order and sections keep the page sort
//! order, so the same source always exports byte-identical JSON.

use std::fs;
use std::io::Write;
use std::path::Path;

use rowsite_content::SectionStore;
use tempfile::NamedTempFile;

use crate::error::SiteError;

/// Serialize the filename → sections mapping as pretty-printed JSON.
pub fn to_json(store: &SectionStore) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&store.sections_by_file())
}

/// Write the JSON export to `path`, creating parent directories as needed.
///
/// The document is written to a temporary file in the destination directory
/// and renamed into place, so other processes never see a partial file.
pub fn export_json(store: &SectionStore, path: &Path) -> Result<(), SiteError> {
    let json = to_json(store)?;

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| SiteError::write(parent, e))?;

    let mut staged = staging_file(parent).map_err(|e| SiteError::write(path, e))?;
    staged
        .write_all(json.as_bytes())
        .map_err(|e| SiteError::write(path, e))?;
    // Overwriting keeps the previous file's mode, as an in-place write would.
    if let Ok(existing) = fs::metadata(path) {
        staged
            .as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| SiteError::write(path, e))?;
    }
    staged
        .persist(path)
        .map_err(|e| SiteError::write(path, e.error))?;

    tracing::info!(
        path = %path.display(),
        pages = store.len(),
        sections = store.section_count(),
        "Exported content JSON"
    );
    Ok(())
}

/// Create the staging file in `dir` with the same mode a plain `fs::write` would get.
///
/// On Unix the file is opened with `0o666` and the process umask applies.
fn staging_file(dir: &Path) -> std::io::Result<NamedTempFile> {
    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}
