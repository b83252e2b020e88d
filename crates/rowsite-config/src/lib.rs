//! Configuration management for rowsite.
//!
//! Parses `rowsite.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `source.csv`
//! - `source.business`

mod expand;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override CSV source path.
    pub csv: Option<PathBuf>,
    /// Override business filter.
    pub business: Option<String>,
    /// Override HTML output directory.
    pub html_dir: Option<PathBuf>,
    /// Override JSON export path.
    pub json: Option<PathBuf>,
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "rowsite.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Content source configuration (paths are relative strings from TOML).
    source: SourceConfigRaw,
    /// Output configuration (paths are relative strings from TOML).
    output: OutputConfigRaw,
    /// Page branding.
    pub site: SiteConfig,

    /// Resolved source configuration (set after loading).
    #[serde(skip)]
    pub source_resolved: SourceConfig,
    /// Resolved output configuration (set after loading).
    #[serde(skip)]
    pub output_resolved: OutputConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8000,
        }
    }
}

/// Raw source configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SourceConfigRaw {
    csv: Option<String>,
    business: Option<String>,
}

/// Resolved content source configuration.
#[derive(Debug, Default)]
pub struct SourceConfig {
    /// CSV content source.
    pub csv: PathBuf,
    /// Business filter (`None` keeps every business).
    pub business: Option<String>,
}

/// Raw output configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    html_dir: Option<String>,
    json: Option<String>,
}

/// Resolved output configuration with absolute paths.
#[derive(Debug, Default)]
pub struct OutputConfig {
    /// Directory for generated HTML pages.
    pub html_dir: PathBuf,
    /// JSON export path.
    pub json: PathBuf,
}

/// Page branding configuration.
///
/// Every field is optional; unset fields keep the built-in defaults.
/// An empty string disables `stylesheet`, `logo` and `footer`.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    /// Business display name used in generated titles.
    pub name: Option<String>,
    /// Stylesheet URL.
    pub stylesheet: Option<String>,
    /// Logo image URL.
    pub logo: Option<String>,
    /// Footer text.
    pub footer: Option<String>,
    /// Module script URLs.
    pub scripts: Option<Vec<String>>,
    /// Fixed page titles keyed by filename.
    pub titles: Option<BTreeMap<String, String>>,
    /// Header navigation links.
    pub nav: Option<Vec<NavLinkConfig>>,
}

/// Navigation link entry.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct NavLinkConfig {
    /// Link target.
    pub href: String,
    /// Link text.
    pub label: String,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`source.csv`").
        field: String,
        /// Error message (e.g., "${`CONTENT_CSV`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `rowsite.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(csv) = &settings.csv {
            self.source_resolved.csv.clone_from(csv);
        }
        if let Some(business) = &settings.business {
            self.source_resolved.business = non_blank(business);
        }
        if let Some(html_dir) = &settings.html_dir {
            self.output_resolved.html_dir.clone_from(html_dir);
        }
        if let Some(json) = &settings.json {
            self.output_resolved.json.clone_from(json);
        }
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        let mut config = Self {
            server: ServerConfig::default(),
            source: SourceConfigRaw::default(),
            output: OutputConfigRaw::default(),
            site: SiteConfig::default(),
            source_resolved: SourceConfig::default(),
            output_resolved: OutputConfig::default(),
            config_path: None,
        };
        config.resolve_paths(base);
        config
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading and resolution
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        if let Some(csv) = &self.source.csv {
            require_non_empty(csv, "source.csv")?;
        }

        for (i, link) in self.site.nav.iter().flatten().enumerate() {
            require_non_empty(&link.href, &format!("site.nav[{i}].href"))?;
            require_non_empty(&link.label, &format!("site.nav[{i}].label"))?;
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;

        if let Some(csv) = &self.source.csv {
            self.source.csv = Some(expand::expand_env(csv, "source.csv")?);
        }
        if let Some(business) = &self.source.business {
            self.source.business = Some(expand::expand_env(business, "source.business")?);
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.source_resolved = SourceConfig {
            csv: resolve(self.source.csv.as_deref(), "content/content-template.csv"),
            business: self.source.business.as_deref().and_then(non_blank),
        };

        self.output_resolved = OutputConfig {
            html_dir: resolve(self.output.html_dir.as_deref(), "generated-pages"),
            json: resolve(self.output.json.as_deref(), "build/content.json"),
        };
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}
