//! `rowsite export` command implementation.

use std::path::PathBuf;

use clap::Args;
use rowsite_config::{CliSettings, Config};
use rowsite_site::export_json;

use super::load_content;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    /// Content CSV file (overrides config).
    csv: Option<PathBuf>,

    /// Path for aggregated JSON output (overrides config).
    #[arg(long)]
    json: Option<PathBuf>,

    /// Keep only rows for this business identifier (plus `default` rows).
    #[arg(short, long, env = "ROWSITE_BUSINESS")]
    business: Option<String>,

    /// Path to configuration file (default: auto-discover rowsite.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ExportArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            csv: self.csv,
            business: self.business,
            json: self.json,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let store = load_content(
            &config.source_resolved.csv,
            config.source_resolved.business.as_deref(),
        )?;
        export_json(&store, &config.output_resolved.json)?;

        output.success(&format!(
            "Exported {} section(s) across {} page(s) to {}",
            store.section_count(),
            store.len(),
            config.output_resolved.json.display()
        ));
        Ok(())
    }
}
