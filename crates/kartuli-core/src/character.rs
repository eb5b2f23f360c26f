// Character classification for text validation

/// Check whether a character counts as whitespace for fragment validation.
///
/// Covers the ASCII control whitespace range, the Unicode space separators,
/// the line and paragraph separators, NEL, NO-BREAK SPACE and the
/// MONGOLIAN VOWEL SEPARATOR. Zero-width characters (U+200B, U+FEFF) are not
/// whitespace.
pub fn is_whitespace(c: char) -> bool {
    let cp = c as u32;
    (0x09..=0x0D).contains(&cp)
        || cp == 0x20
        || cp == 0x85
        || cp == 0xA0
        || cp == 0x1680
        || cp == 0x180E
        || (0x2000..=0x200A).contains(&cp)
        || cp == 0x2028
        || cp == 0x2029
        || cp == 0x202F
        || cp == 0x205F
        || cp == 0x3000
}

/// True when `s` is empty or made up entirely of whitespace.
pub fn is_blank(s: &str) -> bool {
    s.chars().all(is_whitespace)
}

/// True when `s` contains at least one whitespace character.
pub fn contains_whitespace(s: &str) -> bool {
    s.chars().any(is_whitespace)
}
