//! Content serving and generation for rowsite.
//!
//! This crate provides:
//! - [`ContentCache`]: modification-time gated snapshot of the content source
//!   for concurrent readers
//! - [`export_json`]: the filename → sections JSON document
//! - [`StaticSiteBuilder`]: one HTML file per page
//! - [`page_layout`]: page chrome from the `[site]` configuration table
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::PathBuf;
//! use rowsite_site::ContentCache;
//!
//! let cache = ContentCache::new(PathBuf::from("content/content-template.csv"));
//!
//! let site_map = cache.site_map()?;
//! let page = cache.page("index.html")?;
//! # Ok(())
//! # }
//! ```

mod builder;
mod cache;
mod error;
mod export;
mod layout;

pub use builder::StaticSiteBuilder;
pub use cache::{ContentCache, ContentSnapshot, normalize_filename};
pub use error::SiteError;
pub use export::{export_json, to_json};
pub use layout::page_layout;
