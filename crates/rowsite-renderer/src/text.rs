//! Heading text helpers.

/// Upper-case the first letter of every word and lower-case the rest.
///
/// A word starts at any letter not preceded by another letter, so
/// `"opening-hours"` becomes `"Opening-Hours"`.
///
/// # Examples
///
/// ```
/// use rowsite_renderer::title_case;
///
/// assert_eq!(title_case("opening hours"), "Opening Hours");
/// assert_eq!(title_case("FAQ"), "Faq");
/// ```
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            result.push(c);
            in_word = false;
        }
    }
    result
}

/// Turn a filename into a human-readable page name.
///
/// Takes the text before the first `.`, replaces `-` with spaces and
/// title-cases the result.
///
/// # Examples
///
/// ```
/// use rowsite_renderer::humanize_stem;
///
/// assert_eq!(humanize_stem("private-events.html"), "Private Events");
/// ```
#[must_use]
pub fn humanize_stem(filename: &str) -> String {
    let stem = filename.split('.').next().unwrap_or_default();
    title_case(&stem.replace('-', " "))
}
