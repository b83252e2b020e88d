//! HTTP server for rowsite.
//!
//! This crate provides an axum server over the live content cache, serving:
//! - `GET /healthz` liveness probe
//! - `GET /api/pages[/{page}[/sections/{section}]]` content as JSON
//! - `GET /` and `GET /{page}` pages rendered to HTML on request
//!
//! Every request re-checks the content source modification time, so edits to
//! the CSV are visible on the next request without a restart.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use rowsite_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         source_path: PathBuf::from("content/content-template.csv"),
//!         business: Some("kabalian".to_string()),
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use rowsite_renderer::PageLayout;
use rowsite_site::{ContentCache, page_layout};
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// CSV content source.
    pub source_path: PathBuf,
    /// Business filter (`None` serves every business).
    pub business: Option<String>,
    /// Page chrome for rendered documents.
    pub layout: PageLayout,
    /// Application version (part of every `ETag`).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8000,
            source_path: PathBuf::from("content/content-template.csv"),
            business: None,
            layout: PageLayout::default(),
            version: String::new(),
        }
    }
}

/// Run the server.
///
/// # Errors
///
/// Returns an error if the address is invalid or the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;

    let cache = ContentCache::with_business(config.source_path, config.business);
    // Warm the cache so a missing source is reported at startup.
    if let Err(e) = cache.snapshot() {
        tracing::warn!(error = %e, "Content source not loaded yet");
    }

    let state = Arc::new(AppState {
        cache,
        layout: config.layout,
        version: config.version,
    });
    let app = app::create_router(state);

    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from rowsite config.
///
/// # Arguments
///
/// * `config` - rowsite configuration
/// * `version` - Application version
#[must_use]
pub fn server_config_from_config(config: &rowsite_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        source_path: config.source_resolved.csv.clone(),
        business: config.source_resolved.business.clone(),
        layout: page_layout(&config.site),
        version,
    }
}
