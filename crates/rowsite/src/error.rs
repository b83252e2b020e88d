//! CLI error types.

use rowsite_config::ConfigError;
use rowsite_content::SourceError;
use rowsite_site::SiteError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Source(#[from] SourceError),

    #[error("{0}")]
    Site(#[from] SiteError),

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Validation(String),
}
