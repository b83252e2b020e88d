//! HTML rendering for rowsite pages.
//!
//! Every [`Section`](rowsite_content::Section) renders to a fixed HTML
//! fragment selected by its [`ContentType`](rowsite_content::ContentType);
//! [`PageLayout`] wraps the fragments of one page in a complete document.
//! All text taken from the content source is HTML-escaped.
//!
//! # Example
//!
//! ```
//! use rowsite_content::{RawRow, SectionStore, parse_row};
//! use rowsite_renderer::PageLayout;
//!
//! let row: RawRow = [("page", "index"), ("section", "hero"), ("content_type", "hero")]
//!     .into_iter()
//!     .collect();
//! let store = SectionStore::build(parse_row(&row), None);
//! let page = store.page("index.html").unwrap();
//!
//! let html = PageLayout::default().render(page);
//! assert!(html.contains("<section class=\"hero\">"));
//! ```

mod escape;
mod fragment;
mod layout;
mod text;

pub use escape::escape_html;
pub use fragment::{render_section, render_sections};
pub use layout::{NavLink, PageLayout};
pub use text::{humanize_stem, title_case};
