//! Section data model.
//!
//! [`Section`] and [`PageContent`] are immutable value objects: they are
//! rebuilt wholesale from the source on every parse and never mutated in place.

use std::fmt;

use serde::Serialize;

/// Rendering hint selecting which HTML fragment a section uses.
///
/// The set is closed. Values outside it parse as [`ContentType::Text`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    /// Full-bleed banner with heading.
    Hero,
    /// Call-to-action block without image.
    Callout,
    /// Image card with heading.
    Card,
    /// Captioned image figure.
    GalleryItem,
    /// Plain heading and body copy.
    #[default]
    Text,
}

impl ContentType {
    /// Parse a raw `content_type` cell.
    ///
    /// The value is trimmed and lowercased; anything unrecognized (including
    /// an empty cell) falls back to [`ContentType::Text`].
    ///
    /// # Examples
    ///
    /// ```
    /// use rowsite_content::ContentType;
    ///
    /// assert_eq!(ContentType::parse(" Hero "), ContentType::Hero);
    /// assert_eq!(ContentType::parse("gallery-item"), ContentType::GalleryItem);
    /// assert_eq!(ContentType::parse("carousel"), ContentType::Text);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "hero" => Self::Hero,
            "callout" => Self::Callout,
            "card" => Self::Card,
            "gallery-item" => Self::GalleryItem,
            _ => Self::Text,
        }
    }

    /// Wire name used in the CSV source and JSON export.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Callout => "callout",
            Self::Card => "card",
            Self::GalleryItem => "gallery-item",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One renderable unit of content.
///
/// Serializes to the plain-data export shape
/// `{ page, section, title, subtitle, content, image, display, order, content_type, filename }`.
/// The business tag is used for filtering only and is not exported.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Logical page identifier (e.g., "index", "menu").
    pub page: String,
    /// Section key, unique within a page and never empty.
    #[serde(rename = "section")]
    pub key: String,
    /// Heading text.
    pub title: Option<String>,
    /// Secondary heading text.
    pub subtitle: Option<String>,
    /// Body copy.
    pub content: Option<String>,
    /// Relative asset path.
    pub image: Option<String>,
    /// Always `true` for stored sections: hidden rows are dropped while parsing.
    pub display: bool,
    /// Sort order within the page.
    pub order: i64,
    /// Rendering hint.
    pub content_type: ContentType,
    /// Target document name (e.g., "index.html").
    pub filename: String,
    /// Business tag, `"default"` when the row has none.
    #[serde(skip)]
    pub business: String,
}

impl Section {
    /// Sort key giving the total order of sections within a page.
    #[must_use]
    pub fn sort_key(&self) -> (i64, &str) {
        (self.order, self.key.as_str())
    }
}

/// The ordered sections composing one output document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageContent {
    /// HTML file name (e.g., "index.html").
    pub filename: String,
    /// Sections sorted by `(order, key)`.
    pub sections: Vec<Section>,
}

impl PageContent {
    /// Find a section by key.
    #[must_use]
    pub fn section(&self, key: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.key == key)
    }
}

/// Every page of the site, ordered by filename.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SiteMap {
    /// Pages sorted by filename.
    pub pages: Vec<PageContent>,
}
