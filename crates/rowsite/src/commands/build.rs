//! `rowsite build` command implementation.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use clap::Args;
use rowsite_config::{CliSettings, Config};
use rowsite_site::{StaticSiteBuilder, export_json, page_layout};

use super::load_content;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Content CSV file (overrides config).
    csv: Option<PathBuf>,

    /// Directory for generated HTML files (overrides config).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path for aggregated JSON output (overrides config).
    #[arg(long)]
    json: Option<PathBuf>,

    /// Keep only rows for this business identifier (plus `default` rows).
    #[arg(short, long, env = "ROWSITE_BUSINESS")]
    business: Option<String>,

    /// Skip HTML generation and export JSON only.
    #[arg(long)]
    no_html: bool,

    /// Remove the output directory and JSON file before building.
    #[arg(long)]
    clean: bool,

    /// Path to configuration file (default: auto-discover rowsite.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            csv: self.csv,
            business: self.business,
            html_dir: self.output,
            json: self.json,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let html_dir = &config.output_resolved.html_dir;
        let json_path = &config.output_resolved.json;

        if self.clean {
            clean_outputs(html_dir, json_path)?;
        }

        output.info(&format!(
            "Source: {}",
            config.source_resolved.csv.display()
        ));
        let store = load_content(
            &config.source_resolved.csv,
            config.source_resolved.business.as_deref(),
        )?;

        export_json(&store, json_path)?;
        output.info(&format!("JSON: {}", json_path.display()));

        if self.no_html {
            output.success(&format!(
                "Exported {} page(s) to {}",
                store.len(),
                json_path.display()
            ));
            return Ok(());
        }

        let builder = StaticSiteBuilder::new(page_layout(&config.site));
        let written = builder.build(&store, html_dir)?;

        let skipped = store.len() - written.len();
        if skipped > 0 {
            output.warning(&format!(
                "Skipped {skipped} page(s) with filenames outside the output directory"
            ));
        }
        output.success(&format!(
            "Generated {} page(s) in {}",
            written.len(),
            html_dir.display()
        ));
        Ok(())
    }
}

/// Remove previous build outputs. Missing outputs are not an error.
fn clean_outputs(html_dir: &Path, json_path: &Path) -> Result<(), CliError> {
    match std::fs::remove_dir_all(html_dir) {
        Err(e) if e.kind() != ErrorKind::NotFound => return Err(e.into()),
        _ => {}
    }
    match std::fs::remove_file(json_path) {
        Err(e) if e.kind() != ErrorKind::NotFound => return Err(e.into()),
        _ => {}
    }
    tracing::info!(
        html_dir = %html_dir.display(),
        json = %json_path.display(),
        "Removed previous build outputs"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_clean_outputs_removes_previous_build() {
        let temp_dir = tempfile::tempdir().unwrap();
        let html_dir = temp_dir.path().join("generated-pages");
        let json_path = temp_dir.path().join("build/content.json");
        fs::create_dir_all(&html_dir).unwrap();
        fs::write(html_dir.join("old.html"), "stale").unwrap();
        fs::create_dir_all(json_path.parent().unwrap()).unwrap();
        fs::write(&json_path, "{}").unwrap();

        clean_outputs(&html_dir, &json_path).unwrap();

        assert!(!html_dir.exists());
        assert!(!json_path.exists());
        assert!(temp_dir.path().join("build").exists());
    }

    #[test]
    fn test_clean_outputs_missing_is_ok() {
        let temp_dir = tempfile::tempdir().unwrap();

        clean_outputs(
            &temp_dir.path().join("nope"),
            &temp_dir.path().join("nope.json"),
        )
        .unwrap();
    }

    #[test]
    fn test_execute_writes_json_and_pages() {
        let temp_dir = tempfile::tempdir().unwrap();
        let csv = temp_dir.path().join("content.csv");
        fs::write(
            &csv,
            "page,section,title,content_type,order\n\
             index,hero,Welcome,hero,1\n\
             menu,mains,Mains,card,1\n",
        )
        .unwrap();
        let config_path = temp_dir.path().join("rowsite.toml");
        fs::write(&config_path, "").unwrap();

        let args = BuildArgs {
            csv: Some(csv),
            output: Some(temp_dir.path().join("site")),
            json: Some(temp_dir.path().join("content.json")),
            business: None,
            no_html: false,
            clean: false,
            config: Some(config_path),
            verbose: false,
        };
        args.execute().unwrap();

        assert!(temp_dir.path().join("site/index.html").exists());
        assert!(temp_dir.path().join("site/menu.html").exists());
        let json = fs::read_to_string(temp_dir.path().join("content.json")).unwrap();
        assert!(json.contains("\"index.html\""));
    }

    #[test]
    fn test_execute_no_html() {
        let temp_dir = tempfile::tempdir().unwrap();
        let csv = temp_dir.path().join("content.csv");
        fs::write(&csv, "page,section\nindex,hero\n").unwrap();
        let config_path = temp_dir.path().join("rowsite.toml");
        fs::write(&config_path, "").unwrap();

        let args = BuildArgs {
            csv: Some(csv),
            output: Some(temp_dir.path().join("site")),
            json: Some(temp_dir.path().join("content.json")),
            business: None,
            no_html: true,
            clean: false,
            config: Some(config_path),
            verbose: false,
        };
        args.execute().unwrap();

        assert!(temp_dir.path().join("content.json").exists());
        assert!(!temp_dir.path().join("site").exists());
    }
}
