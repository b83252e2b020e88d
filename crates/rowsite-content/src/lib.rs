//! Section model and content-source parsing for rowsite.
//!
//! This crate turns a spreadsheet-authored CSV file into typed page content:
//! - [`RawRow`] / [`parse_row`]: one CSV row to an optional [`Section`]
//! - [`SectionStore`]: sections grouped by target file and sorted
//! - [`load_store`]: read a CSV file straight into a [`SectionStore`]
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::Path;
//! use rowsite_content::load_store;
//!
//! let store = load_store(Path::new("content/content-template.csv"), Some("kabalian"))?;
//! for page in store.pages() {
//!     println!("{}: {} sections", page.filename, page.sections.len());
//! }
//! # Ok(())
//! # }
//! ```

mod row;
mod section;
mod source;
mod store;

pub use row::{DISPLAY_TRUE, RawRow, parse_row};
pub use section::{ContentType, PageContent, Section, SiteMap};
pub use source::{SourceError, load_sections, load_store, read_rows, read_rows_from, source_modified};
pub use store::{DEFAULT_BUSINESS, SectionStore};
