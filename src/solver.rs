//! Tool-level queries: each one filters a lexicon with the `matcher`
//! predicates and orders the survivors.
//!
//! # Error Handling
//!
//! Queries return [`SolverError`]:
//!
//! - S001: `ParseFailure` (Input parsing failed (wraps [`ParseError`]))
//! - S002: `WildcardNotAllowed` (A `?` was given to a tool without blank tiles)
//!
//! Empty input and "nothing matched" are *not* errors: both come back as
//! `Ok` with an empty list.
//!
//! # Examples
//!
//! ```
//! use wordplay::common_words::CommonWordSet;
//! use wordplay::solver::{self, AnagramQuery};
//! use wordplay::word_list::{Lexicon, LexiconOptions};
//!
//! let lexicon = Lexicon::from_words(["cat", "act", "dog"], LexiconOptions::default());
//! let found = solver::solve_anagram(&AnagramQuery::new("tac"), &lexicon, CommonWordSet::builtin())?;
//! assert_eq!(found, vec!["act", "cat"]);
//! # Ok::<(), wordplay::solver::SolverError>(())
//! ```

use crate::common_words::CommonWordSet;
use crate::errors::ParseError;
use crate::matcher::{
    contains_required, filter_by_length, filter_by_prefix, match_by_letters, match_by_pattern,
    match_by_regex_equivalent, match_by_subsequence_consumption,
};
use crate::parser::{LetterMultiset, Pattern};
use crate::sorting::{sort_results, SortKey};
use crate::word_list::Lexicon;
use instant::Instant;
use log::debug;

/// Words that satisfied a query, in the query's sort order.
pub type MatchResult = Vec<String>;

/// Unified error type for the query pipeline.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// The letters or pattern could not be parsed.
    #[error("parse failure: {0}")]
    ParseFailure(#[from] Box<ParseError>),

    /// The tool only works with real letters.
    #[error("the {tool} tool does not accept '?' wildcards")]
    WildcardNotAllowed { tool: &'static str },
}

impl SolverError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::ParseFailure(_) => "S001",
            SolverError::WildcardNotAllowed { .. } => "S002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SolverError::ParseFailure(_) => "Input parsing failed",
            SolverError::WildcardNotAllowed { .. } => "Wildcards not supported by this tool",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            SolverError::ParseFailure(_) => "The letters or pattern could not be parsed. This wraps an underlying ParseError (see Parse Errors section for specific error codes).",
            SolverError::WildcardNotAllowed { .. } => "The unscramble and jumble tools only rearrange the letters given; blank tiles are supported by the anagram tool.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SolverError::WildcardNotAllowed { .. } => Some("Remove the '?' characters, or use the anagram tool for blank tiles"),
            SolverError::ParseFailure(_) => None, // ParseError has its own help
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            SolverError::ParseFailure(pe) => {
                format!("{}\n  caused by: {}", self.code(), pe.display_detailed())
            }
            SolverError::WildcardNotAllowed { .. } => {
                crate::errors::format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
            }
        }
    }
}

fn check_bounds(min: usize, max: usize) -> Result<(), SolverError> {
    if min > max {
        return Err(SolverError::ParseFailure(Box::new(ParseError::ContradictoryBounds { min, max })));
    }
    Ok(())
}

fn parse_plain_letters(raw: &str, tool: &'static str) -> Result<LetterMultiset, SolverError> {
    let letters = raw.parse::<LetterMultiset>()?;
    if letters.wildcards() > 0 {
        return Err(SolverError::WildcardNotAllowed { tool });
    }
    Ok(letters)
}

/// Anagram tool: words spellable from the letters (with `?` blanks).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnagramQuery {
    pub letters: String,
    pub min_len: usize,
    pub max_len: usize,
    /// Optional positional pattern such as `??t`; blank means none.
    pub pattern: Option<String>,
    pub sort: SortKey,
}

impl AnagramQuery {
    #[must_use]
    pub fn new(letters: &str) -> Self {
        Self {
            letters: letters.to_string(),
            min_len: 2,
            max_len: 15,
            pattern: None,
            sort: SortKey::Length,
        }
    }
}

/// Run the anagram tool.
///
/// # Errors
/// `ParseFailure` for malformed letters/pattern or `min_len > max_len`.
pub fn solve_anagram(
    query: &AnagramQuery,
    lexicon: &Lexicon,
    common: &CommonWordSet,
) -> Result<MatchResult, SolverError> {
    check_bounds(query.min_len, query.max_len)?;
    let letters = query.letters.parse::<LetterMultiset>()?;
    let pattern = query.pattern.as_deref().map(str::parse::<Pattern>).transpose()?;
    let pattern = pattern.filter(|p| !p.is_empty());

    if letters.is_empty() {
        return Ok(Vec::new());
    }

    let t_start = Instant::now();
    let matches: Vec<String> = lexicon
        .iter()
        .filter(|w| filter_by_length(w, query.min_len, query.max_len))
        .filter(|w| pattern.as_ref().is_none_or(|p| match_by_pattern(p, w)))
        .filter(|w| match_by_letters(&letters, w))
        .cloned()
        .collect();

    debug!(
        "anagram '{letters}': {} of {} words matched in {:.3}ms",
        matches.len(),
        lexicon.len(),
        t_start.elapsed().as_secs_f64() * 1000.0
    );

    Ok(sort_results(matches, query.sort, common))
}

/// Unscramble tool: words using only the given letters, optionally
/// required to contain some letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnscrambleQuery {
    pub letters: String,
    pub min_len: usize,
    /// Letters every result must contain (with multiplicity).
    pub contains: String,
}

impl UnscrambleQuery {
    #[must_use]
    pub fn new(letters: &str) -> Self {
        Self { letters: letters.to_string(), min_len: 2, contains: String::new() }
    }
}

/// Run the unscramble tool. Longest results first.
///
/// # Errors
/// `ParseFailure` for malformed letters, `WildcardNotAllowed` if `?` is used.
pub fn solve_unscramble(query: &UnscrambleQuery, lexicon: &Lexicon) -> Result<MatchResult, SolverError> {
    let letters = parse_plain_letters(&query.letters, "unscramble")?;
    let required = parse_plain_letters(&query.contains, "unscramble")?;

    if letters.is_empty() {
        return Ok(Vec::new());
    }

    let max_len = letters.letter_count();
    let matches: Vec<String> = lexicon
        .iter()
        .filter(|w| w.len() >= query.min_len && w.len() <= max_len)
        .filter(|w| contains_required(&required, w))
        .filter(|w| match_by_letters(&letters, w))
        .cloned()
        .collect();

    debug!("unscramble '{letters}': {} matches", matches.len());
    Ok(sort_results(matches, SortKey::Length, &CommonWordSet::default()))
}

/// Jumble tool: words formed by consuming the scrambled letters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JumbleQuery {
    pub letters: String,
    /// Only keep words of exactly this length (`None` or `Some(0)`: any).
    pub exact_len: Option<usize>,
}

impl JumbleQuery {
    #[must_use]
    pub fn new(letters: &str) -> Self {
        Self { letters: letters.to_string(), exact_len: None }
    }
}

/// Run the jumble tool. Longest results first.
///
/// # Errors
/// `ParseFailure` for malformed letters, `WildcardNotAllowed` if `?` is used.
pub fn solve_jumble(query: &JumbleQuery, lexicon: &Lexicon) -> Result<MatchResult, SolverError> {
    let letters = parse_plain_letters(&query.letters, "jumble")?;
    if letters.is_empty() {
        return Ok(Vec::new());
    }

    let rack = letters.to_string();
    let exact_len = query.exact_len.filter(|&n| n > 0);
    let matches: Vec<String> = lexicon
        .iter()
        .filter(|w| w.len() <= rack.len())
        .filter(|w| exact_len.is_none_or(|n| w.len() == n))
        .filter(|w| match_by_subsequence_consumption(&rack, w))
        .cloned()
        .collect();

    debug!("jumble '{rack}': {} matches", matches.len());
    Ok(sort_results(matches, SortKey::Length, &CommonWordSet::default()))
}

/// Crossword tool: words fitting a `?` pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrosswordQuery {
    pub pattern: String,
    pub length: Option<usize>,
    pub starts_with: Option<String>,
}

impl CrosswordQuery {
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        Self { pattern: pattern.to_string(), length: None, starts_with: None }
    }
}

/// Run the crossword tool. Longest results first (all results share the
/// pattern's length, so in practice this is alphabetical).
///
/// # Errors
/// `ParseFailure` for a malformed pattern.
pub fn solve_crossword(query: &CrosswordQuery, lexicon: &Lexicon) -> Result<MatchResult, SolverError> {
    let pattern = query.pattern.parse::<Pattern>()?;
    if pattern.is_empty() {
        return Ok(Vec::new());
    }
    // fail fast on the regex rather than once per word
    pattern.regex()?;

    let prefix = query.starts_with.as_deref().map(str::trim).unwrap_or_default();
    let matches: Vec<String> = lexicon
        .iter()
        .filter(|w| match_by_regex_equivalent(&pattern, w))
        .filter(|w| query.length.is_none_or(|n| w.len() == n))
        .filter(|w| filter_by_prefix(w, prefix))
        .cloned()
        .collect();

    debug!("crossword '{pattern}': {} matches", matches.len());
    Ok(sort_results(matches, SortKey::Length, &CommonWordSet::default()))
}

/// Distinct lengths present in `results`, longest first.
#[must_use]
pub fn available_lengths<S: AsRef<str>>(results: &[S]) -> Vec<usize> {
    let mut lengths: Vec<usize> = results.iter().map(|w| w.as_ref().len()).collect();
    lengths.sort_unstable_by(|a, b| b.cmp(a));
    lengths.dedup();
    lengths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word_list::LexiconOptions;

    fn lexicon(words: &[&str]) -> Lexicon {
        Lexicon::from_words(words.iter().copied(), LexiconOptions { min_len: 1, max_len: 15 })
    }

    #[test]
    fn test_solve_anagram_scenario() {
        let lex = lexicon(&["cat", "act", "dog"]);
        let found = solve_anagram(&AnagramQuery::new("tac"), &lex, &CommonWordSet::default()).unwrap();
        assert_eq!(found, vec!["act", "cat"]);
    }

    #[test]
    fn test_solve_anagram_wildcards_and_bounds() {
        let lex = lexicon(&["cat", "cart", "carts", "at", "a"]);
        let mut query = AnagramQuery::new("tac?");
        let found = solve_anagram(&query, &lex, &CommonWordSet::default()).unwrap();
        assert_eq!(found, vec!["cart", "cat", "at"]); // "a" below min_len 2

        query.max_len = 3;
        let found = solve_anagram(&query, &lex, &CommonWordSet::default()).unwrap();
        assert_eq!(found, vec!["cat", "at"]);
    }

    #[test]
    fn test_solve_anagram_pattern_is_strict() {
        let lex = lexicon(&["cat", "act", "at", "tact"]);
        let mut query = AnagramQuery::new("tact");
        query.pattern = Some("?a?".to_string());
        let found = solve_anagram(&query, &lex, &CommonWordSet::default()).unwrap();
        assert_eq!(found, vec!["cat"]);

        // blank pattern means no pattern
        query.pattern = Some("  ".to_string());
        let found = solve_anagram(&query, &lex, &CommonWordSet::default()).unwrap();
        assert_eq!(found, vec!["tact", "act", "cat", "at"]);
    }

    #[test]
    fn test_solve_anagram_common_first() {
        let lex = lexicon(&["tea", "ate", "at", "eat"]);
        let mut query = AnagramQuery::new("eat");
        query.sort = SortKey::CommonFirst;
        let common = CommonWordSet::from_words(["at"]);
        let found = solve_anagram(&query, &lex, &common).unwrap();
        assert_eq!(found, vec!["at", "ate", "eat", "tea"]);
    }

    #[test]
    fn test_solve_anagram_empty_letters() {
        let lex = lexicon(&["cat"]);
        let found = solve_anagram(&AnagramQuery::new(""), &lex, &CommonWordSet::default()).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_solve_anagram_contradictory_bounds() {
        let lex = lexicon(&["cat"]);
        let mut query = AnagramQuery::new("cat");
        query.min_len = 5;
        query.max_len = 3;
        let err = solve_anagram(&query, &lex, &CommonWordSet::default()).unwrap_err();
        assert_eq!(err.code(), "S001");
        assert!(err.display_detailed().contains("E006"));
    }

    #[test]
    fn test_solve_unscramble_required_letters() {
        let lex = lexicon(&["rat", "tar", "art", "tear", "rate", "at", "eat"]);
        let mut query = UnscrambleQuery::new("rate");
        query.contains = "e".to_string();
        let found = solve_unscramble(&query, &lex).unwrap();
        assert_eq!(found, vec!["rate", "tear", "eat"]);
    }

    #[test]
    fn test_solve_unscramble_rejects_wildcards() {
        let lex = lexicon(&["rat"]);
        let err = solve_unscramble(&UnscrambleQuery::new("ra?"), &lex).unwrap_err();
        assert!(matches!(err, SolverError::WildcardNotAllowed { tool: "unscramble" }));
        assert_eq!(err.code(), "S002");
        assert!(err.display_detailed().contains("anagram tool"));
    }

    #[test]
    fn test_solve_jumble() {
        let lex = lexicon(&["stop", "tops", "pots", "top", "post", "spots", "to"]);
        let found = solve_jumble(&JumbleQuery::new("tspo"), &lex).unwrap();
        assert_eq!(found, vec!["post", "pots", "stop", "tops", "top", "to"]);

        let query = JumbleQuery { letters: "tspo".to_string(), exact_len: Some(3) };
        assert_eq!(solve_jumble(&query, &lex).unwrap(), vec!["top"]);

        let query = JumbleQuery { letters: "tspo".to_string(), exact_len: Some(0) };
        assert_eq!(solve_jumble(&query, &lex).unwrap().len(), 6);
    }

    #[test]
    fn test_solve_crossword_scenario() {
        let lex = lexicon(&["cat", "cot", "cut"]);
        let found = solve_crossword(&CrosswordQuery::new("c?t"), &lex).unwrap();
        assert_eq!(found, vec!["cat", "cot", "cut"]);
    }

    #[test]
    fn test_solve_crossword_filters() {
        let lex = lexicon(&["word", "work", "worm", "worn", "ward", "world"]);
        let mut query = CrosswordQuery::new("w?r?");
        assert_eq!(solve_crossword(&query, &lex).unwrap(), vec!["ward", "word", "work", "worm", "worn"]);

        query.starts_with = Some("WO".to_string());
        assert_eq!(solve_crossword(&query, &lex).unwrap(), vec!["word", "work", "worm", "worn"]);

        query.length = Some(5);
        assert!(solve_crossword(&query, &lex).unwrap().is_empty());
    }

    #[test]
    fn test_solve_crossword_bad_pattern() {
        let lex = lexicon(&["cat"]);
        let err = solve_crossword(&CrosswordQuery::new("c*t"), &lex).unwrap_err();
        match err {
            SolverError::ParseFailure(pe) => assert_eq!(pe.code(), "E003"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_available_lengths() {
        assert_eq!(available_lengths(&["abc", "a", "xyz", "abcd"]), vec![4, 3, 1]);
        assert!(available_lengths::<&str>(&[]).is_empty());
    }
}
