use std::ops::RangeInclusive;

// Character-set constants
pub(crate) const ALPHABET_SIZE: usize = 26;
pub(crate) const LOWERCASE_ALPHABET: RangeInclusive<char> = 'a'..='z';
pub(crate) const UPPERCASE_ALPHABET: RangeInclusive<char> = 'A'..='Z';

pub(crate) const LITERAL_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";

/// The placeholder used in letter racks and crossword patterns.
pub const WILDCARD: char = '?';

/// Character classes shared by the letter, pattern and grid parsers.
pub(crate) trait WordChar {
    fn is_wildcard(&self) -> bool;
    /// Lowercase a-z, the lexicon alphabet.
    fn is_literal(&self) -> bool;
    /// Uppercase A-Z, the grid alphabet.
    fn is_grid_cell(&self) -> bool;
}

impl WordChar for char {
    fn is_wildcard(&self) -> bool {
        *self == WILDCARD
    }
    fn is_literal(&self) -> bool {
        LOWERCASE_ALPHABET.contains(self)
    }
    fn is_grid_cell(&self) -> bool {
        UPPERCASE_ALPHABET.contains(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_wildcard() {
        assert!('?'.is_wildcard());
        assert!(!'.'.is_wildcard());
        assert!(!'*'.is_wildcard());
        assert!(!'a'.is_wildcard());
    }

    #[test]
    fn test_literal_and_grid_cell_are_disjoint() {
        for c in LOWERCASE_ALPHABET {
            assert!(c.is_literal());
            assert!(!c.is_grid_cell());
        }
        for c in UPPERCASE_ALPHABET {
            assert!(!c.is_literal());
            assert!(c.is_grid_cell());
        }
        assert!(!'1'.is_literal());
        assert!(!'1'.is_grid_cell());
        assert!(!'É'.is_grid_cell());
        assert!(!'é'.is_literal());
    }

    #[test]
    fn test_alphabet_constants() {
        assert_eq!(ALPHABET_SIZE, 26);
        assert_eq!(LITERAL_CHARS.len(), ALPHABET_SIZE);
        assert!(LITERAL_CHARS.chars().all(|c| c.is_literal()));
    }
}
