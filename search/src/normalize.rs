//! Text canonicalization for accent- and case-insensitive matching.

use nucleo::chars;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Strips diacritics and lower-cases.
///
/// Text is canonically decomposed and combining marks are dropped, so `"Café"`,
/// `"Cafe\u{301}"` and `"ά"` lose their accents. Latin letters without a
/// canonical decomposition are then folded by nucleo's character table.
pub fn normalize_text(s: &str) -> String {
    s.nfd()
        .filter(|&c| !is_combining_mark(c))
        .map(chars::normalize)
        .flat_map(char::to_lowercase)
        .collect()
}

/// [`normalize_text`] plus trimming of leading and trailing non-word characters.
pub fn normalize_term(s: &str) -> String {
    normalize_text(s)
        .trim_matches(|c: char| !is_word_char(c))
        .to_string()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
