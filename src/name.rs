use std::borrow::Cow;

use crate::render::Attributes;

/// The element name used when a key cannot be repaired into a valid name.
pub const PLACEHOLDER_NAME: &str = "key";

fn is_name_start_char(c: char) -> bool {
    matches!(c,
        'A'..='Z'
        | '_'
        | 'a'..='z'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c,
            '-'
            | '.'
            | '0'..='9'
            | '\u{B7}'
            | '\u{300}'..='\u{36F}'
            | '\u{203F}'..='\u{2040}')
}

/// Check whether `name` can be used as an element name.
///
/// This is the XML `Name` production without colons: names are never
/// namespace-qualified.
///
/// ```rust
/// use dictxml::is_valid_name;
///
/// assert!(is_valid_name("item"));
/// assert!(!is_valid_name("123"));
/// assert!(!is_valid_name("a b"));
/// ```
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_name_start_char(first) => chars.all(is_name_char),
        _ => false,
    }
}

/// Turn a mapping key into a valid element name.
///
/// A valid key is returned as is. A key of only digits gets an `n` prefix.
/// If replacing spaces with underscores makes the key valid, that is used.
/// Otherwise the key is stored in a `name` attribute and the element is
/// named [`PLACEHOLDER_NAME`].
pub(crate) fn sanitize<'a>(key: &'a str, attributes: &mut Attributes) -> Cow<'a, str> {
    if is_valid_name(key) {
        return Cow::Borrowed(key);
    }
    tracing::trace!(key, "invalid element name");
    if !key.is_empty() && key.chars().all(|c| c.is_ascii_digit()) {
        return Cow::Owned(format!("n{}", key));
    }
    let underscored = key.replace(' ', "_");
    if is_valid_name(&underscored) {
        return Cow::Owned(underscored);
    }
    attributes.insert("name", key.to_string());
    Cow::Borrowed(PLACEHOLDER_NAME)
}
