//! Page layout from `[site]` configuration.

use rowsite_config::SiteConfig;
use rowsite_renderer::{NavLink, PageLayout};

/// Build the page layout for a `[site]` table.
///
/// Unset fields keep the [`PageLayout::default`] branding. An empty
/// `stylesheet`, `logo` or `footer` removes that element from the page.
#[must_use]
pub fn page_layout(site: &SiteConfig) -> PageLayout {
    let mut layout = PageLayout::default();

    if let Some(name) = &site.name {
        layout.site_name.clone_from(name);
    }
    if let Some(stylesheet) = &site.stylesheet {
        layout.stylesheet = non_empty(stylesheet);
    }
    if let Some(logo) = &site.logo {
        layout.logo = non_empty(logo);
    }
    if let Some(footer) = &site.footer {
        layout.footer = non_empty(footer);
    }
    if let Some(scripts) = &site.scripts {
        layout.scripts.clone_from(scripts);
    }
    if let Some(titles) = &site.titles {
        layout.titles = titles
            .iter()
            .map(|(file, title)| (file.to_lowercase(), title.clone()))
            .collect();
    }
    if let Some(nav) = &site.nav {
        layout.nav = nav
            .iter()
            .map(|link| NavLink::new(link.href.clone(), link.label.clone()))
            .collect();
    }

    layout
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}
