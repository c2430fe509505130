use std::borrow::Cow;

/// Escape text for use as element content or as a double-quoted attribute
/// value.
///
/// All five predefined entities are produced. Each `&` in the input becomes
/// `&amp;` before any other entity is emitted, so entities are never
/// escaped twice. If nothing needs escaping the input is returned as is.
///
/// Other characters pass through unchanged. Characters that XML 1.0 does
/// not allow at all, such as U+0000 or U+001B, cannot be escaped either.
pub fn escape(content: &str) -> Cow<'_, str> {
    if !content.contains(['&', '"', '\'', '<', '>']) {
        return Cow::Borrowed(content);
    }
    let mut result = String::with_capacity(content.len() + 8);
    for c in content.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&apos;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}
