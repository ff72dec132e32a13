//! Per-word predicates used by the lexicon tools.
//!
//! Every function here decides whether a single lexicon word satisfies one
//! constraint; the `solver` module strings them together over a whole
//! lexicon. Words are expected in the lexicon's normal form (lowercase a-z),
//! and lengths are byte lengths of that form.

use crate::parser::{LetterMultiset, Pattern};
use crate::parser::utils::lc_letter_to_num;
use crate::word_char::ALPHABET_SIZE;

/// Per-letter counts of `word`, plus how many characters fell outside a-z.
fn letter_counts(word: &str) -> ([u16; ALPHABET_SIZE], usize) {
    let mut counts = [0u16; ALPHABET_SIZE];
    let mut other = 0;
    for c in word.chars() {
        match lc_letter_to_num(c) {
            Ok(idx) => counts[idx] = counts[idx].saturating_add(1),
            Err(_) => other += 1,
        }
    }
    (counts, other)
}

/// Can `word` be spelled from `available`, using wildcards to cover shortfalls?
///
/// Distinct letters are visited in alphabetical order; each shortfall is
/// charged against one shared wildcard budget, and the check fails as soon
/// as the cumulative charge exceeds it. Characters outside a-z can only be
/// covered by wildcards.
#[must_use]
pub fn match_by_letters(available: &LetterMultiset, word: &str) -> bool {
    if word.chars().count() > available.capacity() {
        return false;
    }

    let (counts, other) = letter_counts(word);
    let budget = available.wildcards();
    let mut used_wildcards = other;
    if used_wildcards > budget {
        return false;
    }

    for (c, &required) in ('a'..='z').zip(counts.iter()) {
        let required = usize::from(required);
        let have = available.count(c);
        if required > have {
            used_wildcards += required - have;
            if used_wildcards > budget {
                return false;
            }
        }
    }
    true
}

/// Can `word` be spelled by consuming tiles from `letters`, one occurrence
/// per character of `word`, in order?
///
/// Same answers as [`match_by_letters`] with no wildcards; this is the jumble
/// tool's formulation (first matching tile is removed each step).
#[must_use]
pub fn match_by_subsequence_consumption(letters: &str, word: &str) -> bool {
    let mut remaining: Vec<char> = letters.chars().collect();
    for c in word.chars() {
        match remaining.iter().position(|&tile| tile == c) {
            Some(idx) => {
                remaining.remove(idx);
            }
            None => return false,
        }
    }
    true
}

/// Positional match: same length, and every non-wildcard slot equals the
/// word's (lowercased) character at that position.
#[must_use]
pub fn match_by_pattern(pattern: &Pattern, word: &str) -> bool {
    let word = word.to_lowercase();
    word.chars().count() == pattern.len()
        && pattern.slots().iter().zip(word.chars()).all(|(slot, c)| slot.accepts(c))
}

/// Full-word match against the pattern's anchored regex (`?` → `.`).
///
/// Agrees with [`match_by_pattern`]; kept as the crossword tool's own
/// formulation.
#[must_use]
pub fn match_by_regex_equivalent(pattern: &Pattern, word: &str) -> bool {
    match pattern.regex() {
        Ok(re) => re.is_match(word).unwrap_or(false),
        Err(e) => {
            log::warn!("could not build regex for pattern '{pattern}': {e}");
            false
        }
    }
}

/// Inclusive length bounds check.
#[must_use]
pub fn filter_by_length(word: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&word.len())
}

/// Case-insensitive literal prefix test. An empty prefix always matches.
#[must_use]
pub fn filter_by_prefix(word: &str, prefix: &str) -> bool {
    word.to_lowercase().starts_with(&prefix.to_lowercase())
}

/// Case-insensitive literal suffix test. An empty suffix always matches.
#[must_use]
pub fn filter_by_suffix(word: &str, suffix: &str) -> bool {
    word.to_lowercase().ends_with(&suffix.to_lowercase())
}

/// Does `word` contain every letter of `required`, at least as many times?
///
/// This is the unscrambler's "must contain" filter; wildcards in `required`
/// are ignored.
#[must_use]
pub fn contains_required(required: &LetterMultiset, word: &str) -> bool {
    let (counts, _) = letter_counts(word);
    required.iter().all(|(c, needed)| {
        lc_letter_to_num(c).is_ok_and(|idx| usize::from(counts[idx]) >= needed)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(s: &str) -> LetterMultiset {
        s.parse().unwrap()
    }

    fn pattern(s: &str) -> Pattern {
        s.parse().unwrap()
    }

    #[test]
    fn test_match_by_letters_exact_anagram() {
        let tac = letters("tac");
        assert!(match_by_letters(&tac, "cat"));
        assert!(match_by_letters(&tac, "act"));
        assert!(match_by_letters(&tac, "at"));
        assert!(!match_by_letters(&tac, "dog"));
    }

    #[test]
    fn test_match_by_letters_respects_multiplicity() {
        let m = letters("lo");
        assert!(match_by_letters(&m, "lo"));
        assert!(!match_by_letters(&m, "loo"));
        assert!(match_by_letters(&letters("loo"), "loo"));
    }

    #[test]
    fn test_match_by_letters_wildcards_cover_shortfall() {
        let m = letters("ca?");
        assert!(match_by_letters(&m, "cat"));
        assert!(match_by_letters(&m, "car"));
        assert!(!match_by_letters(&m, "cart")); // too long
        // 'z' and 'q' both missing, only one wildcard
        assert!(!match_by_letters(&letters("a?"), "zq"));
        assert!(match_by_letters(&letters("??"), "zq"));
    }

    #[test]
    fn test_match_by_letters_counts_characters_not_bytes() {
        // 'é' is two bytes but one tile, covered by the wildcard
        assert!(match_by_letters(&letters("n?"), "né"));
        assert!(!match_by_letters(&letters("n"), "né"));
    }

    #[test]
    fn test_match_by_letters_cumulative_budget() {
        // "bee" needs one b (have 0) and two e (have 1): total shortfall 2
        assert!(!match_by_letters(&letters("e?"), "bee"));
        assert!(match_by_letters(&letters("e??"), "bee"));
    }

    #[test]
    fn test_match_by_letters_empty_available() {
        let empty = letters("");
        assert!(!match_by_letters(&empty, "a"));
    }

    #[test]
    fn test_wildcard_monotonicity() {
        let words = ["cat", "tact", "attack", "zebra", "a", "tacit"];
        for base in ["tac", "tca?", "attk", ""] {
            let m = letters(base);
            for word in words {
                if match_by_letters(&m, word) {
                    for extra in 1..4 {
                        let more = m.clone().with_wildcards(m.wildcards() + extra);
                        assert!(match_by_letters(&more, word), "{word} should still match {more}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_consumption_agrees_with_frequency() {
        let words = ["cat", "act", "tact", "at", "dog", "", "aa"];
        for rack in ["tac", "taca", "xyz", ""] {
            let m = letters(rack);
            for word in words {
                assert_eq!(
                    match_by_subsequence_consumption(rack, word),
                    match_by_letters(&m, word),
                    "rack={rack}, word={word}"
                );
            }
        }
    }

    #[test]
    fn test_match_by_pattern() {
        let p = pattern("c?t");
        assert!(match_by_pattern(&p, "cat"));
        assert!(match_by_pattern(&p, "cot"));
        assert!(match_by_pattern(&p, "CUT"));
        assert!(!match_by_pattern(&p, "cab"));
    }

    #[test]
    fn test_match_by_pattern_is_length_strict() {
        let p = pattern("???");
        assert!(!match_by_pattern(&p, "ca"));
        assert!(!match_by_pattern(&p, "cats"));
        assert!(!match_by_pattern(&pattern(""), "a"));
    }

    #[test]
    fn test_regex_equivalent_agrees_with_pattern() {
        let words = ["cat", "cot", "cut", "cart", "ct", "act", "CAT"];
        for p in ["c?t", "???", "c??", "?", ""] {
            let p = pattern(p);
            for word in words {
                assert_eq!(
                    match_by_regex_equivalent(&p, word),
                    match_by_pattern(&p, word),
                    "pattern={p}, word={word}"
                );
            }
        }
    }

    #[test]
    fn test_filter_by_length_inclusive() {
        assert!(filter_by_length("cat", 3, 3));
        assert!(filter_by_length("cat", 2, 5));
        assert!(!filter_by_length("cat", 4, 6));
        assert!(!filter_by_length("cat", 1, 2));
    }

    #[test]
    fn test_prefix_suffix_case_insensitive() {
        assert!(filter_by_prefix("worm", "WO"));
        assert!(filter_by_prefix("worm", ""));
        assert!(!filter_by_prefix("worm", "or"));
        assert!(filter_by_suffix("station", "TION"));
        assert!(!filter_by_suffix("station", "ing"));
    }

    #[test]
    fn test_contains_required() {
        let req = letters("ee");
        assert!(contains_required(&req, "bee"));
        assert!(!contains_required(&req, "bed"));
        assert!(contains_required(&letters(""), "anything"));
    }
}
