//! Utility functions for string processing.

/// Normalize raw input for matching: lowercase, then trim.
///
/// Interior whitespace is kept as typed, so `"home  services"` (two spaces)
/// does not match `"Home Services"`. That's how the directory theme has
/// always behaved and the links users bookmark depend on it.
pub fn normalize(value: &str) -> String {
    value.to_lowercase().trim().to_string()
}

/// Case-insensitive substring test against an already-lowercased needle.
///
/// ASCII haystacks (the vast majority of listings) are compared in place;
/// anything else pays for a full `to_lowercase`.
pub fn contains_folded(haystack: &str, needle_lower: &str) -> bool {
    if needle_lower.is_empty() {
        return true;
    }
    if haystack.is_ascii() {
        let needle = needle_lower.as_bytes();
        return haystack
            .as_bytes()
            .windows(needle.len())
            .any(|window| window.eq_ignore_ascii_case(needle));
    }
    haystack.to_lowercase().contains(needle_lower)
}

/// Whitespace as the ECMAScript `\s` class defines it.
///
/// Slugs must match the ones the site generator emits, and that generator
/// uses JS regexes: U+FEFF counts as space there, U+0085 does not.
pub(crate) fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}
