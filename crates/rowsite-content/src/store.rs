//! Section grouping and ordering.

use std::collections::BTreeMap;

use crate::section::{PageContent, Section, SiteMap};

/// Business tag shared by every tenant.
pub const DEFAULT_BUSINESS: &str = "default";

/// Sections grouped by target filename.
///
/// Built once per parse and never mutated afterwards. Guarantees:
/// - pages are keyed and iterated by filename ascending
/// - sections within a page are sorted by `(order, key)`
/// - no page is empty
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionStore {
    pages: BTreeMap<String, PageContent>,
}

impl SectionStore {
    /// Group and sort sections, optionally keeping only one business.
    ///
    /// With `business` set, a section is kept when its tag equals the filter
    /// (case-insensitive) or is [`DEFAULT_BUSINESS`]. An empty filter keeps
    /// everything.
    #[must_use]
    pub fn build(sections: impl IntoIterator<Item = Section>, business: Option<&str>) -> Self {
        let business = business
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .map(str::to_lowercase);

        let mut grouped: BTreeMap<String, Vec<Section>> = BTreeMap::new();
        for section in sections {
            if let Some(filter) = &business
                && !matches_business(&section.business, filter)
            {
                continue;
            }
            grouped
                .entry(section.filename.clone())
                .or_default()
                .push(section);
        }

        let pages = grouped
            .into_iter()
            .map(|(filename, mut sections)| {
                sections.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
                let page = PageContent {
                    filename: filename.clone(),
                    sections,
                };
                (filename, page)
            })
            .collect();

        Self { pages }
    }

    /// Get a page by filename.
    #[must_use]
    pub fn page(&self, filename: &str) -> Option<&PageContent> {
        self.pages.get(filename)
    }

    /// Iterate pages in filename order.
    pub fn pages(&self) -> impl Iterator<Item = &PageContent> {
        self.pages.values()
    }

    /// Build the site map (all pages, filename ascending).
    #[must_use]
    pub fn site_map(&self) -> SiteMap {
        SiteMap {
            pages: self.pages.values().cloned().collect(),
        }
    }

    /// Filename to ordered sections, the shape of the JSON export.
    #[must_use]
    pub fn sections_by_file(&self) -> BTreeMap<&str, &[Section]> {
        self.pages
            .iter()
            .map(|(filename, page)| (filename.as_str(), page.sections.as_slice()))
            .collect()
    }

    /// Number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// True when no section survived parsing and filtering.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Total number of sections across all pages.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.pages.values().map(|p| p.sections.len()).sum()
    }
}

fn matches_business(tag: &str, filter: &str) -> bool {
    let tag = tag.to_lowercase();
    tag == filter || tag == DEFAULT_BUSINESS
}
