//! HTML escaping.

/// Escape HTML special characters for text and attribute values.
///
/// # Examples
///
/// ```
/// use rowsite_renderer::escape_html;
///
/// assert_eq!(escape_html("<b>Fish & Chips</b>"), "&lt;b&gt;Fish &amp; Chips&lt;/b&gt;");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a&b"), "a&amp;b");
        assert_eq!(escape_html("\"hello\""), "&quot;hello&quot;");
        assert_eq!(escape_html("Kabalen's"), "Kabalen&#x27;s");
    }

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape_html("Pancit – ₱120"), "Pancit – ₱120");
        assert_eq!(escape_html(""), "");
    }
}
