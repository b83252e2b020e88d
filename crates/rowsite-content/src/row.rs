//! Row parsing.
//!
//! [`parse_row`] is a total function from one CSV row to an optional
//! [`Section`]. Rules, applied in order:
//!
//! 1. `display`: an empty or absent cell means displayed; otherwise the
//!    trimmed, lowercased value must be in [`DISPLAY_TRUE`] or the row is dropped.
//! 2. `order`: integer, `0` when absent or unparsable.
//! 3. `content_type`: see [`ContentType::parse`].
//! 4. `filename`: the cell if non-empty, else `{page}.html`, else `index.html`.
//! 5. `section`: trimmed; an empty key drops the row.
//! 6. `title`, `subtitle`, `content`, `image`: trimmed, empty means absent.

use std::collections::HashMap;

use crate::section::{ContentType, Section};
use crate::store::DEFAULT_BUSINESS;

/// Cell values that mark a row as displayed.
pub const DISPLAY_TRUE: [&str; 4] = ["1", "true", "yes", "y"];

/// Order used when the `order` cell is missing or not an integer.
const DEFAULT_ORDER: i64 = 0;

/// Filename used when neither `filename` nor `page` is set.
const DEFAULT_FILENAME: &str = "index.html";

/// One raw source row: column name to cell value.
///
/// Columns missing from the source behave as empty cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRow {
    cells: HashMap<String, String>,
}

impl RawRow {
    /// Create an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a cell value, replacing any previous value.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(column.into(), value.into());
    }

    /// Get a cell value, `None` if the column is absent.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// Get a trimmed cell value, empty when the column is absent.
    fn trimmed(&self, column: &str) -> &str {
        self.get(column).map_or("", str::trim)
    }

    /// Get a trimmed cell value, `None` when absent or blank.
    fn text(&self, column: &str) -> Option<String> {
        let value = self.trimmed(column);
        (!value.is_empty()).then(|| value.to_owned())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Parse one row into a [`Section`].
///
/// Returns `None` when the row is hidden (`display` outside [`DISPLAY_TRUE`])
/// or has no section key. Malformed field values never reject a row; they
/// fall back to their defaults instead.
///
/// # Examples
///
/// ```
/// use rowsite_content::{ContentType, RawRow, parse_row};
///
/// let row: RawRow = [("page", "menu"), ("section", "mains"), ("order", "x")]
///     .into_iter()
///     .collect();
/// let section = parse_row(&row).unwrap();
///
/// assert_eq!(section.filename, "menu.html");
/// assert_eq!(section.order, 0);
/// assert_eq!(section.content_type, ContentType::Text);
/// ```
#[must_use]
pub fn parse_row(row: &RawRow) -> Option<Section> {
    if !is_displayed(row.trimmed("display")) {
        return None;
    }

    let order = row.trimmed("order").parse().unwrap_or(DEFAULT_ORDER);
    let content_type = ContentType::parse(row.trimmed("content_type"));
    let filename = derive_filename(row.trimmed("filename"), row.trimmed("page"));

    let key = row.trimmed("section");
    if key.is_empty() {
        return None;
    }

    let page = match row.trimmed("page") {
        "" => page_from_filename(&filename),
        page => page.to_owned(),
    };
    let business = match row.trimmed("business") {
        "" => DEFAULT_BUSINESS.to_owned(),
        business => business.to_owned(),
    };

    Some(Section {
        page,
        key: key.to_owned(),
        title: row.text("title"),
        subtitle: row.text("subtitle"),
        content: row.text("content"),
        image: row.text("image"),
        display: true,
        order,
        content_type,
        filename,
        business,
    })
}

/// Decide whether a trimmed `display` cell keeps the row.
fn is_displayed(raw: &str) -> bool {
    if raw.is_empty() {
        return true;
    }
    let value = raw.to_lowercase();
    DISPLAY_TRUE.contains(&value.as_str())
}

fn derive_filename(filename: &str, page: &str) -> String {
    if !filename.is_empty() {
        filename.to_owned()
    } else if !page.is_empty() {
        format!("{page}.html")
    } else {
        DEFAULT_FILENAME.to_owned()
    }
}

/// Recover a page identifier from a target filename ("menu.html" -> "menu").
fn page_from_filename(filename: &str) -> String {
    filename
        .strip_suffix(".html")
        .unwrap_or(filename)
        .to_owned()
}
