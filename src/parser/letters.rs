use super::pattern::{tokenize_slots, Slot};
use super::utils::lc_letter_to_num;
use crate::errors::ParseError;
use crate::word_char::{ALPHABET_SIZE, LOWERCASE_ALPHABET};
use std::fmt;
use std::str::FromStr;

/// The letters a player has to work with: a count per letter a-z plus a
/// separate budget of wildcard (`?`) tiles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterMultiset {
    counts: [u16; ALPHABET_SIZE],
    wildcards: usize,
    len: usize, // non-wildcard letters
}

impl LetterMultiset {
    /// Build a multiset from already-lowercase letters, without wildcards.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidLowercaseChar` for anything outside a-z.
    pub fn from_letters(letters: &str) -> Result<Self, Box<ParseError>> {
        let mut multiset = LetterMultiset::default();
        for c in letters.chars() {
            multiset.add(c)?;
        }
        Ok(multiset)
    }

    fn add(&mut self, c: char) -> Result<(), Box<ParseError>> {
        let idx = lc_letter_to_num(c)?;
        self.counts[idx] = self.counts[idx].saturating_add(1);
        self.len += 1;
        Ok(())
    }

    /// Return a copy with the wildcard budget replaced by `wildcards`.
    #[must_use]
    pub fn with_wildcards(mut self, wildcards: usize) -> Self {
        self.wildcards = wildcards;
        self
    }

    /// How many copies of `c` are available (0 for anything outside a-z).
    #[must_use]
    pub fn count(&self, c: char) -> usize {
        lc_letter_to_num(c).map_or(0, |idx| usize::from(self.counts[idx]))
    }

    #[must_use]
    pub fn wildcards(&self) -> usize {
        self.wildcards
    }

    /// Number of non-wildcard letters.
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.len
    }

    /// Letters plus wildcards: the longest word that could possibly match.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.len + self.wildcards
    }

    /// Number of distinct letters present.
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.counts.iter().filter(|&&n| n > 0).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.capacity() == 0
    }

    /// `(letter, count)` pairs in alphabetical order, skipping absent letters.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        LOWERCASE_ALPHABET
            .zip(self.counts.iter())
            .filter(|(_, n)| **n > 0)
            .map(|(c, n)| (c, usize::from(*n)))
    }
}

/// Alphagram form: letters sorted, followed by one `?` per wildcard.
impl fmt::Display for LetterMultiset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (c, n) in self.iter() {
            for _ in 0..n {
                write!(f, "{c}")?;
            }
        }
        for _ in 0..self.wildcards {
            write!(f, "?")?;
        }
        Ok(())
    }
}

impl FromStr for LetterMultiset {
    type Err = Box<ParseError>;

    /// Parse a letter rack such as `"tac"` or `"ret?st"`.
    ///
    /// Input is trimmed and lowercased; each `?` adds one wildcard. Any other
    /// character is an `InvalidLetter` error. Tools that don't allow
    /// wildcards check `wildcards()` afterwards.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_lowercase();
        let slots = tokenize_slots(&normalized, |invalid_char| ParseError::InvalidLetter {
            input: normalized.clone(),
            invalid_char,
        })?;

        let mut multiset = LetterMultiset::default();
        for slot in slots {
            match slot {
                Slot::Letter(c) => multiset.add(c)?,
                Slot::Wildcard => multiset.wildcards += 1,
            }
        }
        Ok(multiset)
    }
}
