//! Rhyming dictionary: ending-based rhyme lookup and a syllable estimate.
//!
//! Both are spelling heuristics, not phonetics. Two words "rhyme" when the
//! candidate ends with the query word's rhyme ending (or its last two
//! letters).

use crate::errors::ParseError;
use crate::word_list::Lexicon;
use fancy_regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Known rhyme endings. Order matters for endings of equal length.
const RHYME_ENDINGS: &[&str] = &[
    "at", "ate", "ight", "ite", "ound", "ound", "ay", "ey", "ee", "ea",
    "ow", "ew", "ue", "oo", "tion", "sion", "ing", "ang", "ung", "ong",
    "ack", "eck", "ick", "ock", "uck", "all", "ell", "ill", "oll", "ull",
    "am", "em", "im", "om", "um", "an", "en", "in", "on", "un",
    "ap", "ep", "ip", "op", "up", "ar", "er", "ir", "or", "ur",
    "ast", "est", "ist", "ost", "ust", "ake", "ike", "oke", "uke", "ame",
    "ime", "ome", "ume", "ane", "ine", "one", "une", "ear", "eer", "air",
    "are", "ore", "ure", "ire", "oy", "oil", "oin", "oise",
];

/// Endings longest first (stable, so equal lengths keep list order).
static ENDINGS_BY_LENGTH: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut endings = RHYME_ENDINGS.to_vec();
    endings.sort_by(|a, b| b.len().cmp(&a.len()));
    endings
});

/// Silent endings dropped before counting vowel groups.
///
/// NB: This regex is validated at WASM startup in `wasm::validate_internal_regexes()`.
pub(crate) static SILENT_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$")
        .unwrap_or_else(|e| panic!("BUG: Failed to compile SILENT_SUFFIX_RE: {e}"))
});

/// A leading `y` acts as a consonant.
///
/// NB: This regex is validated at WASM startup in `wasm::validate_internal_regexes()`.
pub(crate) static LEADING_Y_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^y").unwrap_or_else(|e| panic!("BUG: Failed to compile LEADING_Y_RE: {e}"))
});

/// One or two adjacent vowels make one syllable.
///
/// NB: This regex is validated at WASM startup in `wasm::validate_internal_regexes()`.
pub(crate) static VOWEL_GROUP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[aeiouy]{1,2}").unwrap_or_else(|e| panic!("BUG: Failed to compile VOWEL_GROUP_RE: {e}"))
});

/// Last `n` characters of `word` (the whole word if it is shorter).
fn tail(word: &str, n: usize) -> &str {
    let skip = word.chars().count().saturating_sub(n);
    word.char_indices().nth(skip).map_or("", |(idx, _)| &word[idx..])
}

/// The ending used to find rhymes for `word`.
#[must_use]
pub fn rhyme_ending(word: &str) -> &str {
    if let Some(ending) = ENDINGS_BY_LENGTH.iter().find(|e| word.ends_with(**e)) {
        return *ending;
    }
    if word.chars().count() >= 3 { tail(word, 3) } else { tail(word, 2) }
}

/// Estimated syllable count; always at least 1.
#[must_use]
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    if word.chars().count() <= 3 {
        return 1;
    }
    let trimmed = SILENT_SUFFIX_RE.replace(&word, "");
    let trimmed = LEADING_Y_RE.replace(&trimmed, "");
    let groups = VOWEL_GROUP_RE.find_iter(&trimmed).filter_map(Result::ok).count();
    groups.max(1)
}

/// Syllable-count filter for rhyme results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyllableFilter {
    #[default]
    All,
    One,
    Two,
    ThreeOrMore,
}

impl SyllableFilter {
    #[must_use]
    pub fn accepts(self, syllables: usize) -> bool {
        match self {
            SyllableFilter::All => true,
            SyllableFilter::One => syllables == 1,
            SyllableFilter::Two => syllables == 2,
            SyllableFilter::ThreeOrMore => syllables >= 3,
        }
    }
}

impl FromStr for SyllableFilter {
    type Err = Box<ParseError>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "" => Ok(SyllableFilter::All),
            "1" => Ok(SyllableFilter::One),
            "2" => Ok(SyllableFilter::Two),
            "3" | "3+" => Ok(SyllableFilter::ThreeOrMore),
            _ => Err(Box::new(ParseError::InvalidSyllableFilter { input: s.to_string() })),
        }
    }
}

impl fmt::Display for SyllableFilter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            SyllableFilter::All => "all",
            SyllableFilter::One => "1",
            SyllableFilter::Two => "2",
            SyllableFilter::ThreeOrMore => "3",
        };
        write!(f, "{s}")
    }
}

/// Words in `lexicon` rhyming with `word`, alphabetically.
///
/// The word itself is never returned. A blank word yields nothing.
#[must_use]
pub fn find_rhymes(word: &str, lexicon: &Lexicon, filter: SyllableFilter) -> Vec<String> {
    let word = word.trim().to_lowercase();
    if word.is_empty() {
        return Vec::new();
    }
    let ending = rhyme_ending(&word);
    let last_two = tail(&word, 2);

    let mut rhymes: Vec<String> = lexicon
        .iter()
        .filter(|w| **w != word)
        .filter(|w| w.ends_with(ending) || w.ends_with(last_two))
        .filter(|w| filter.accepts(count_syllables(w)))
        .cloned()
        .collect();
    rhymes.sort();
    log::debug!("rhymes for '{word}' (ending '{ending}', {filter}): {}", rhymes.len());
    rhymes
}
