use super::prefilter::{get_regex, slots_to_regex_str};
use crate::errors::ParseError;
use crate::word_char::{LITERAL_CHARS, WILDCARD};
use fancy_regex::Regex;
use nom::{
    branch::alt,
    character::complete::{char, one_of},
    combinator::map,
    IResult,
    Parser,
};
use once_cell::sync::OnceCell;
use std::fmt;
use std::str::FromStr;

/// Parser result type for the slot tokenizer. nom's own error type is
/// enough here: any failure is reported as the offending character.
type PResult<'a, O> = IResult<&'a str, O>;

/// One position of a pattern (or one tile of a letter rack).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Letter(char), // 'a'..='z': this exact letter
    Wildcard,     // '?': any single letter
}

impl Slot {
    /// Does this slot accept `c`?
    #[must_use]
    pub fn accepts(self, c: char) -> bool {
        match self {
            Slot::Letter(l) => l == c,
            Slot::Wildcard => true,
        }
    }
}

// === Token parsers ===

fn wildcard(input: &'_ str) -> PResult<'_, Slot> {
    map(char(WILDCARD), |_| Slot::Wildcard).parse(input)
}

fn letter(input: &'_ str) -> PResult<'_, Slot> {
    map(one_of(LITERAL_CHARS), Slot::Letter).parse(input)
}

fn slot(input: &'_ str) -> PResult<'_, Slot> {
    alt((wildcard, letter)).parse(input)
}

/// Walk `normalized` one slot at a time.
///
/// On the first character that isn't a slot, `on_invalid` builds the error
/// to report (so letters and patterns can each name their own input).
pub(crate) fn tokenize_slots(
    normalized: &str,
    on_invalid: impl Fn(char) -> ParseError,
) -> Result<Vec<Slot>, Box<ParseError>> {
    let mut rest = normalized;
    let mut slots = Vec::with_capacity(normalized.len());

    while !rest.is_empty() {
        match slot(rest) {
            Ok((next, s)) => {
                slots.push(s);
                rest = next;
            }
            Err(_) => {
                let bad = rest.chars().next().unwrap_or(WILDCARD);
                return Err(Box::new(on_invalid(bad)));
            }
        }
    }

    Ok(slots)
}

/// A fixed-length template of letters and `?` wildcards, e.g. `c?t`.
///
/// Parsing lowercases the input first; anything else outside a-z and `?`
/// is rejected. The equivalent anchored regex is compiled on first use.
#[derive(Debug, Clone)]
pub struct Pattern {
    raw: String,
    slots: Vec<Slot>,
    regex: OnceCell<Regex>,
}

impl Pattern {
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// The normalized (lowercased) source text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The anchored, case-insensitive regex equivalent to this pattern.
    ///
    /// # Errors
    /// Returns `ParseError::RegexError` if the regex fails to compile
    /// (which would indicate a bug, since slots are restricted to a-z and `?`).
    pub fn regex(&self) -> Result<&Regex, Box<ParseError>> {
        self.regex.get_or_try_init(|| {
            get_regex(&slots_to_regex_str(&self.slots)).map_err(Box::<ParseError>::from)
        })
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.slots == other.slots
    }
}

impl Eq for Pattern {}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl FromStr for Pattern {
    type Err = Box<ParseError>;

    /// Parse a pattern string such as `c?t` or `??ING`.
    ///
    /// Surrounding whitespace is trimmed; an empty string yields an empty
    /// pattern (which matches nothing in a lexicon).
    fn from_str(raw_pattern: &str) -> Result<Self, Self::Err> {
        let normalized = raw_pattern.trim().to_lowercase();
        let slots = tokenize_slots(&normalized, |invalid_char| ParseError::InvalidPatternChar {
            pattern: normalized.clone(),
            invalid_char,
        })?;

        Ok(Pattern { raw: normalized, slots, regex: OnceCell::new() })
    }
}
