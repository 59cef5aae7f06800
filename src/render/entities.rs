use std::borrow::Cow;

/// Decodes HTML entities (named HTML5 entities, decimal and hex references,
/// both quote styles) into UTF-8 text.
///
/// Borrows the input when it contains no `&`.
pub fn decode_entities(value: &str) -> Cow<'_, str> {
    if !value.contains('&') {
        return Cow::Borrowed(value);
    }
    html_escape::decode_html_entities(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_quotes_and_named_entities() {
        assert_eq!(
            decode_entities("&quot;a&quot; &#39;b&#39; &amp; &hellip; &eacute;"),
            "\"a\" 'b' & \u{2026} \u{e9}"
        );
    }

    #[test]
    fn test_decode_numeric_references() {
        assert_eq!(decode_entities("&#8220;x&#x201D;"), "\u{201c}x\u{201d}");
    }

    #[test]
    fn test_plain_text_is_borrowed() {
        assert!(matches!(decode_entities("plain text"), Cow::Borrowed("plain text")));
    }
}
