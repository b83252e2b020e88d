//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod export;
pub(crate) mod serve;

use std::path::Path;

use rowsite_content::{SectionStore, load_store};

pub(crate) use build::BuildArgs;
pub(crate) use export::ExportArgs;
pub(crate) use serve::ServeArgs;

use crate::error::CliError;

/// Load and filter the content source, rejecting a source with nothing to publish.
fn load_content(csv: &Path, business: Option<&str>) -> Result<SectionStore, CliError> {
    let store = load_store(csv, business)?;
    if store.is_empty() {
        return Err(CliError::Validation(
            "No visible rows found in the CSV. Nothing to generate.".to_owned(),
        ));
    }
    Ok(store)
}
