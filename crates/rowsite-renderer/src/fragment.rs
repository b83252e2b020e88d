//! Per-section HTML fragments.
//!
//! One renderer per [`ContentType`] variant; the match in [`render_section`]
//! is exhaustive, so a new content type cannot ship without a fragment.
//! Missing optional fields omit their element rather than failing.

use std::fmt::Write;

use rowsite_content::{ContentType, Section};

use crate::escape::escape_html;
use crate::text::title_case;

const HERO_DEFAULT_TITLE: &str = "Welcome";
const CALLOUT_DEFAULT_TITLE: &str = "Learn More";
const GALLERY_DEFAULT_TITLE: &str = "Gallery Highlight";

/// Render one section to its HTML fragment.
#[must_use]
pub fn render_section(section: &Section) -> String {
    let mut html = String::with_capacity(256);
    match section.content_type {
        ContentType::Hero => render_hero(section, &mut html),
        ContentType::Callout => render_callout(section, &mut html),
        ContentType::Card => render_card(section, &mut html),
        ContentType::GalleryItem => render_gallery_item(section, &mut html),
        ContentType::Text => render_text(section, &mut html),
    }
    html
}

/// Render sections in order, one fragment per line block.
#[must_use]
pub fn render_sections(sections: &[Section]) -> String {
    sections
        .iter()
        .map(render_section)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_hero(section: &Section, html: &mut String) {
    html.push_str("<section class=\"hero\">\n");
    push_image(html, section.image.as_deref(), alt_or_key(section));
    html.push_str("<div class=\"hero-text\">\n");
    push_element(
        html,
        "h1",
        section.title.as_deref().unwrap_or(HERO_DEFAULT_TITLE),
    );
    push_optional(html, "p", section.subtitle.as_deref());
    push_optional(html, "p", section.content.as_deref());
    html.push_str("</div>\n</section>\n");
}

fn render_callout(section: &Section, html: &mut String) {
    html.push_str("<section class=\"cta\">\n");
    push_element(
        html,
        "h2",
        section.title.as_deref().unwrap_or(CALLOUT_DEFAULT_TITLE),
    );
    push_optional(html, "p", section.content.as_deref());
    html.push_str("</section>\n");
}

fn render_card(section: &Section, html: &mut String) {
    html.push_str("<section class=\"card\">\n");
    push_image(
        html,
        section.image.as_deref(),
        section.title.as_deref().unwrap_or_default(),
    );
    push_optional(html, "h3", section.title.as_deref());
    push_optional(html, "p", section.subtitle.as_deref());
    push_optional(html, "p", section.content.as_deref());
    html.push_str("</section>\n");
}

fn render_gallery_item(section: &Section, html: &mut String) {
    html.push_str("<section class=\"gallery-item\">\n<figure>\n");
    push_image(html, section.image.as_deref(), alt_or_key(section));
    html.push_str("<figcaption>\n");
    push_element(
        html,
        "h3",
        section.title.as_deref().unwrap_or(GALLERY_DEFAULT_TITLE),
    );
    push_optional(
        html,
        "p",
        section.content.as_deref().or(section.subtitle.as_deref()),
    );
    html.push_str("</figcaption>\n</figure>\n</section>\n");
}

fn render_text(section: &Section, html: &mut String) {
    html.push_str("<section class=\"text-block\">\n");
    match section.title.as_deref() {
        Some(title) => push_element(html, "h2", title),
        None => push_element(html, "h2", &title_case(&section.key)),
    }
    push_optional(html, "h3", section.subtitle.as_deref());
    push_optional(html, "p", section.content.as_deref());
    html.push_str("</section>\n");
}

/// Alt text: the title, else the section key.
fn alt_or_key(section: &Section) -> &str {
    section.title.as_deref().unwrap_or(&section.key)
}

fn push_image(html: &mut String, src: Option<&str>, alt: &str) {
    if let Some(src) = src {
        let _ = writeln!(
            html,
            "<img src=\"{}\" alt=\"{}\">",
            escape_html(src),
            escape_html(alt)
        );
    }
}

fn push_element(html: &mut String, tag: &str, text: &str) {
    let _ = writeln!(html, "<{tag}>{}</{tag}>", escape_html(text));
}

fn push_optional(html: &mut String, tag: &str, text: Option<&str>) {
    if let Some(text) = text {
        push_element(html, tag, text);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn section(content_type: ContentType) -> Section {
        Section {
            page: "index".to_owned(),
            key: "opening-hours".to_owned(),
            title: None,
            subtitle: None,
            content: None,
            image: None,
            display: true,
            order: 0,
            content_type,
            filename: "index.html".to_owned(),
            business: "default".to_owned(),
        }
    }

    #[test]
    fn test_hero_full() {
        let mut s = section(ContentType::Hero);
        s.title = Some("Mabuhay".to_owned());
        s.subtitle = Some("Filipino comfort food".to_owned());
        s.content = Some("Open daily".to_owned());
        s.image = Some("assets/images/hero.jpg".to_owned());

        assert_eq!(
            render_section(&s),
            "<section class=\"hero\">\n\
             <img src=\"assets/images/hero.jpg\" alt=\"Mabuhay\">\n\
             <div class=\"hero-text\">\n\
             <h1>Mabuhay</h1>\n\
             <p>Filipino comfort food</p>\n\
             <p>Open daily</p>\n\
             </div>\n\
             </section>\n"
        );
    }

    #[test]
    fn test_hero_defaults() {
        let html = render_section(&section(ContentType::Hero));

        assert!(html.contains("<h1>Welcome</h1>"));
        assert!(!html.contains("<img"));
        assert!(!html.contains("<p>"));
    }

    #[test]
    fn test_callout_has_no_image() {
        let mut s = section(ContentType::Callout);
        s.image = Some("assets/images/cta.jpg".to_owned());
        s.content = Some("Book a table".to_owned());

        let html = render_section(&s);

        assert!(html.starts_with("<section class=\"cta\">"));
        assert!(html.contains("<h2>Learn More</h2>"));
        assert!(html.contains("<p>Book a table</p>"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_card() {
        let mut s = section(ContentType::Card);
        s.title = Some("Sisig".to_owned());
        s.image = Some("sisig.jpg".to_owned());
        s.subtitle = Some("$16".to_owned());

        let html = render_section(&s);

        assert!(html.contains("<img src=\"sisig.jpg\" alt=\"Sisig\">"));
        assert!(html.contains("<h3>Sisig</h3>"));
        assert!(html.contains("<p>$16</p>"));
    }

    #[test]
    fn test_card_without_title_omits_heading() {
        let html = render_section(&section(ContentType::Card));

        assert!(!html.contains("<h3>"));
    }

    #[test]
    fn test_gallery_caption_prefers_content() {
        let mut s = section(ContentType::GalleryItem);
        s.image = Some("g1.jpg".to_owned());
        s.subtitle = Some("subtitle".to_owned());
        s.content = Some("content".to_owned());

        let html = render_section(&s);

        assert!(html.contains("<figure>"));
        assert!(html.contains("alt=\"opening-hours\""));
        assert!(html.contains("<h3>Gallery Highlight</h3>"));
        assert!(html.contains("<p>content</p>"));
        assert!(!html.contains("<p>subtitle</p>"));
    }

    #[test]
    fn test_gallery_caption_falls_back_to_subtitle() {
        let mut s = section(ContentType::GalleryItem);
        s.subtitle = Some("Lechon night".to_owned());

        assert!(render_section(&s).contains("<p>Lechon night</p>"));
    }

    #[test]
    fn test_text_default_title_is_capitalized_key() {
        let html = render_section(&section(ContentType::Text));

        assert!(html.starts_with("<section class=\"text-block\">"));
        assert!(html.contains("<h2>Opening-Hours</h2>"));
    }

    #[test]
    fn test_text_subtitle_is_heading() {
        let mut s = section(ContentType::Text);
        s.title = Some("Hours".to_owned());
        s.subtitle = Some("Every day".to_owned());

        let html = render_section(&s);

        assert!(html.contains("<h2>Hours</h2>"));
        assert!(html.contains("<h3>Every day</h3>"));
    }

    #[test]
    fn test_unrecognized_content_type_renders_as_text() {
        let row: rowsite_content::RawRow = [("section", "promo"), ("content_type", "carousel")]
            .into_iter()
            .collect();
        let s = rowsite_content::parse_row(&row).unwrap();

        assert_eq!(render_section(&s), render_text_only(&s));
    }

    fn render_text_only(s: &Section) -> String {
        let mut html = String::new();
        render_text(s, &mut html);
        html
    }

    #[test]
    fn test_untrusted_text_is_escaped() {
        for content_type in [
            ContentType::Hero,
            ContentType::Callout,
            ContentType::Card,
            ContentType::GalleryItem,
            ContentType::Text,
        ] {
            let mut s = section(content_type);
            s.title = Some("<script>alert(1)</script>".to_owned());
            s.content = Some("<img src=x onerror=alert(1)>".to_owned());
            s.image = Some("\"><script>".to_owned());

            let html = render_section(&s);

            assert!(!html.contains("<script>"), "{content_type}: {html}");
            assert!(!html.contains("<img src=x"), "{content_type}: {html}");
        }
    }

    #[test]
    fn test_render_sections_preserves_order() {
        let mut first = section(ContentType::Hero);
        first.title = Some("First".to_owned());
        let mut second = section(ContentType::Text);
        second.title = Some("Second".to_owned());

        let html = render_sections(&[first, second]);

        let first_pos = html.find("First").unwrap();
        let second_pos = html.find("Second").unwrap();
        assert!(first_pos < second_pos);
    }
}
