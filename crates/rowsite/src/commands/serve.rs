//! `rowsite serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use rowsite_config::{CliSettings, Config};
use rowsite_server::{run_server, server_config_from_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover rowsite.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content CSV file (overrides config).
    #[arg(short, long, env = "ROWSITE_CSV")]
    source: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Keep only rows for this business identifier (plus `default` rows).
    #[arg(short, long, env = "ROWSITE_BUSINESS")]
    business: Option<String>,

    /// Enable verbose output (request and reload logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            csv: self.source,
            business: self.business,
            host: self.host,
            port: self.port,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "Content source: {}",
            config.source_resolved.csv.display()
        ));
        match &config.source_resolved.business {
            Some(business) => output.info(&format!("Business filter: {business}")),
            None => output.info("Business filter: none"),
        }
        if !config.source_resolved.csv.exists() {
            output.warning("Content source does not exist yet; content requests will fail until it does");
        }

        let server_config = server_config_from_config(&config, version.to_owned());
        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
