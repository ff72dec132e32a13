use crate::errors::ParseError;
use crate::word_char::{ALPHABET_SIZE, WordChar};

fn letter_to_num(c: char, base_char_as_usize: usize) -> Option<usize> {
    (c as usize).checked_sub(base_char_as_usize).filter(|&diff| diff < ALPHABET_SIZE)
}

// 'a' -> 0, 'b' -> 1, ..., 'z' -> 25
pub(crate) fn lc_letter_to_num(c: char) -> Result<usize, Box<ParseError>> {
    letter_to_num(c, 'a' as usize).ok_or_else(|| Box::new(ParseError::InvalidLowercaseChar { invalid_char: c }))
}

/// Scrub raw user input down to a letter rack: lowercase, keep only a-z
/// (and `?` when `keep_wildcards` is set).
///
/// This is the normalization the host tools apply before calling into the
/// matcher; the parsers themselves reject anything outside the alphabet.
#[must_use]
pub fn sanitize_letters(raw: &str, keep_wildcards: bool) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_literal() || (keep_wildcards && c.is_wildcard()))
        .collect()
}

/// Lowercase and trim a single word or pattern.
#[must_use]
pub fn sanitize_word(raw: &str) -> String {
    raw.trim().to_lowercase()
}
