//! Page document layout.
//!
//! Wraps the fragments of one [`PageContent`] in a complete HTML document:
//! head with title and stylesheet, header with logo and navigation, the
//! section fragments, footer and module scripts.

use std::collections::BTreeMap;
use std::fmt::Write;

use rowsite_content::PageContent;

use crate::escape::escape_html;
use crate::fragment::render_sections;
use crate::text::humanize_stem;

/// A navigation link in the page header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    /// Link target (e.g., "menu.html").
    pub href: String,
    /// Link text.
    pub label: String,
}

impl NavLink {
    /// Create a navigation link.
    #[must_use]
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }
}

/// Site-wide page chrome shared by every generated document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLayout {
    /// Business display name used in generated titles.
    pub site_name: String,
    /// Fixed titles keyed by lowercase filename.
    pub titles: BTreeMap<String, String>,
    /// Header navigation links.
    pub nav: Vec<NavLink>,
    /// Stylesheet URL.
    pub stylesheet: Option<String>,
    /// Logo image URL.
    pub logo: Option<String>,
    /// Footer text.
    pub footer: Option<String>,
    /// Module script URLs appended to the body.
    pub scripts: Vec<String>,
}

impl Default for PageLayout {
    fn default() -> Self {
        let titles = [
            ("index.html", "Kabalen Toronto – Home"),
            ("menu.html", "Kabalen – Menu"),
            ("specials.html", "Kabalen – Daily Specials"),
            ("gallery.html", "Kabalen – Gallery"),
            ("about.html", "Kabalen – Our Story"),
            ("contact.html", "Kabalen – Contact"),
        ]
        .into_iter()
        .map(|(file, title)| (file.to_owned(), title.to_owned()))
        .collect();

        let nav = [
            ("index.html", "Home"),
            ("menu.html", "Menu"),
            ("specials.html", "Specials"),
            ("gallery.html", "Gallery"),
            ("about.html", "About"),
            ("contact.html", "Contact"),
        ]
        .into_iter()
        .map(|(href, label)| NavLink::new(href, label))
        .collect();

        Self {
            site_name: "Kabalen".to_owned(),
            titles,
            nav,
            stylesheet: Some("assets/css/style.css".to_owned()),
            logo: Some("assets/images/kabalen-logo.png".to_owned()),
            footer: Some("© 2025 Kabalen Toronto. All rights reserved.".to_owned()),
            scripts: vec!["assets/js/firebase-init.js".to_owned()],
        }
    }
}

impl PageLayout {
    /// Document title for a filename.
    ///
    /// Looks the lowercased filename up in [`titles`](Self::titles), falling
    /// back to `"<site name> – <Humanized stem>"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rowsite_renderer::PageLayout;
    ///
    /// let layout = PageLayout::default();
    /// assert_eq!(layout.page_title("MENU.html"), "Kabalen – Menu");
    /// assert_eq!(layout.page_title("private-events.html"), "Kabalen – Private Events");
    /// ```
    #[must_use]
    pub fn page_title(&self, filename: &str) -> String {
        let key = filename.to_lowercase();
        match self.titles.get(&key) {
            Some(title) => title.clone(),
            None => format!("{} – {}", self.site_name, humanize_stem(&key)),
        }
    }

    /// Render a complete HTML document for a page.
    #[must_use]
    pub fn render(&self, page: &PageContent) -> String {
        let mut html = String::with_capacity(4096);

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        let _ = writeln!(
            html,
            "<title>{}</title>",
            escape_html(&self.page_title(&page.filename))
        );
        if let Some(stylesheet) = &self.stylesheet {
            let _ = writeln!(
                html,
                "<link rel=\"stylesheet\" href=\"{}\">",
                escape_html(stylesheet)
            );
        }
        html.push_str("</head>\n<body>\n");

        self.render_header(&mut html, &page.filename);

        html.push_str("<main>\n");
        html.push_str(&render_sections(&page.sections));
        html.push_str("</main>\n");

        if let Some(footer) = &self.footer {
            let _ = writeln!(html, "<footer>\n<p>{}</p>\n</footer>", escape_html(footer));
        }
        for script in &self.scripts {
            let _ = writeln!(
                html,
                "<script type=\"module\" src=\"{}\"></script>",
                escape_html(script)
            );
        }

        html.push_str("</body>\n</html>\n");
        html
    }

    /// Render the header with logo and navigation, marking the current page.
    fn render_header(&self, html: &mut String, current: &str) {
        if self.logo.is_none() && self.nav.is_empty() {
            return;
        }
        html.push_str("<header>\n");
        if let Some(logo) = &self.logo {
            let _ = writeln!(
                html,
                "<img src=\"{}\" alt=\"{} Logo\" class=\"logo\">",
                escape_html(logo),
                escape_html(&self.site_name)
            );
        }
        if !self.nav.is_empty() {
            html.push_str("<nav>");
            for (i, link) in self.nav.iter().enumerate() {
                if i > 0 {
                    html.push(' ');
                }
                let active = if link.href.eq_ignore_ascii_case(current) {
                    " class=\"active\" aria-current=\"page\""
                } else {
                    ""
                };
                let _ = write!(
                    html,
                    "<a href=\"{}\"{}>{}</a>",
                    escape_html(&link.href),
                    active,
                    escape_html(&link.label)
                );
            }
            html.push_str("</nav>\n");
        }
        html.push_str("</header>\n");
    }
}
