//! Integration tests for the wordplay engines.
//!
//! These run whole queries against a realistic fixture word list, from raw
//! user input through parsing, matching and ordering.

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use wordplay::common_words::CommonWordSet;
use wordplay::errors::ParseError;
use wordplay::solver::{self, AnagramQuery, CrosswordQuery, JumbleQuery, SolverError, UnscrambleQuery};
use wordplay::sorting::{ResultStats, SortKey};
use wordplay::word_list::{Lexicon, LexiconOptions};

const FIXTURE: &str = "tests/fixtures/test_word_list.txt";

/// Load the fixture word list with the default bounds
fn load_test_lexicon() -> Lexicon {
    Lexicon::load_from_path(FIXTURE, LexiconOptions::default()).expect("Failed to read test word list")
}

fn as_set(words: &[String]) -> HashSet<&str> {
    words.iter().map(String::as_str).collect()
}

#[cfg(test)]
mod loading {
    use super::*;

    #[test]
    fn test_fixture_is_normalized_and_filtered() {
        let lexicon = load_test_lexicon();
        assert_eq!(lexicon.len(), 41);
        assert!(lexicon.contains(&"tea".to_string()));
        assert!(lexicon.contains(&"eat".to_string()));
        assert!(!lexicon.iter().any(|w| w == "a" || w.contains('\'') || w.contains('-')));
        assert!(lexicon.iter().all(|w| w.len() <= 15));
    }

    #[test]
    fn test_tighter_bounds() {
        let lexicon = Lexicon::load_from_path(FIXTURE, LexiconOptions { min_len: 6, max_len: 6 }).unwrap();
        assert!(lexicon.iter().all(|w| w.len() == 6));
        assert!(lexicon.contains(&"listen".to_string()));
    }
}

#[cfg(test)]
mod anagram {
    use super::*;

    #[test]
    fn test_full_anagrams() {
        let lexicon = load_test_lexicon();
        let results = solver::solve_anagram(&AnagramQuery::new("listen"), &lexicon, CommonWordSet::builtin()).unwrap();
        assert_eq!(results, vec!["enlist", "inlets", "listen", "silent", "tinsel"]);
    }

    #[test]
    fn test_blank_tile() {
        let lexicon = load_test_lexicon();
        let results = solver::solve_anagram(&AnagramQuery::new("TAC?"), &lexicon, CommonWordSet::builtin()).unwrap();
        assert_eq!(results, vec!["act", "cat", "eat", "tac", "tea", "at", "to"]);

        let stats = ResultStats::compute(&results, CommonWordSet::builtin());
        assert_eq!(stats.total, 7);
        assert_eq!(stats.common_words, 2);
        assert_eq!(stats.top_lengths, vec![(3, 5), (2, 2)]);
        assert_eq!(stats.longest.as_deref(), Some("tea"));
    }

    #[test]
    fn test_common_first() {
        let lexicon = load_test_lexicon();
        let mut query = AnagramQuery::new("tac?");
        query.sort = SortKey::CommonFirst;
        let results = solver::solve_anagram(&query, &lexicon, CommonWordSet::builtin()).unwrap();
        assert_eq!(results, vec!["at", "to", "act", "cat", "eat", "tac", "tea"]);
    }

    #[test]
    fn test_pattern_and_letters_together() {
        let lexicon = load_test_lexicon();
        let mut query = AnagramQuery::new("tac?");
        query.pattern = Some("?a?".to_string());
        let results = solver::solve_anagram(&query, &lexicon, CommonWordSet::builtin()).unwrap();
        assert_eq!(as_set(&results), HashSet::from(["cat", "eat", "tac"]));
    }

    #[test]
    fn test_malformed_letters_are_rejected() {
        let lexicon = load_test_lexicon();
        let err = solver::solve_anagram(&AnagramQuery::new("ca7"), &lexicon, CommonWordSet::builtin()).unwrap_err();
        match err {
            SolverError::ParseFailure(ref pe) => {
                assert!(matches!(**pe, ParseError::InvalidLetter { invalid_char: '7', .. }));
            }
            ref other => panic!("unexpected error {other:?}"),
        }
        assert!(err.display_detailed().starts_with("S001"));
    }
}

#[cfg(test)]
mod unscramble_and_jumble {
    use super::*;

    #[test]
    fn test_unscramble_with_required_letter() {
        let lexicon = load_test_lexicon();
        let mut query = UnscrambleQuery::new("stop");
        query.contains = "p".to_string();
        let results = solver::solve_unscramble(&query, &lexicon).unwrap();
        assert_eq!(results, vec!["opts", "post", "pots", "spot", "stop", "tops", "pot", "top"]);
    }

    #[test]
    fn test_jumble_agrees_with_unscramble() {
        let lexicon = load_test_lexicon();
        for letters in ["tspo", "tac", "nelsit", "zzz"] {
            let jumble = solver::solve_jumble(&JumbleQuery::new(letters), &lexicon).unwrap();
            let unscramble = solver::solve_unscramble(&UnscrambleQuery::new(letters), &lexicon).unwrap();
            assert_eq!(jumble, unscramble, "letters={letters}");
        }
    }

    #[test]
    fn test_jumble_exact_length() {
        let lexicon = load_test_lexicon();
        let query = JumbleQuery { letters: "tspo".to_string(), exact_len: Some(3) };
        assert_eq!(solver::solve_jumble(&query, &lexicon).unwrap(), vec!["pot", "top"]);
    }

    #[test]
    fn test_wildcards_rejected() {
        let lexicon = load_test_lexicon();
        let err = solver::solve_jumble(&JumbleQuery::new("ts?o"), &lexicon).unwrap_err();
        assert_eq!(err.code(), "S002");
    }
}

#[cfg(test)]
mod crossword {
    use super::*;

    #[test]
    fn test_pattern() {
        let lexicon = load_test_lexicon();
        let results = solver::solve_crossword(&CrosswordQuery::new("?IGHT"), &lexicon).unwrap();
        assert_eq!(results, vec!["fight", "light", "night"]);
        assert_eq!(solver::available_lengths(&results), vec![5]);
    }

    #[test]
    fn test_starts_with() {
        let lexicon = load_test_lexicon();
        let mut query = CrosswordQuery::new("?ight");
        query.starts_with = Some("l".to_string());
        assert_eq!(solver::solve_crossword(&query, &lexicon).unwrap(), vec!["light"]);
    }

    #[test]
    fn test_empty_pattern_finds_nothing() {
        let lexicon = load_test_lexicon();
        assert!(solver::solve_crossword(&CrosswordQuery::new("   "), &lexicon).unwrap().is_empty());
    }
}

#[cfg(test)]
mod word_search {
    use wordplay::grid::{self, Direction, Grid};

    const PUZZLE: &str = "
        L I S T E N
        O X D O G C
        W E M H A R
        K P Y T U B
        ";

    #[test]
    fn test_find_words_end_to_end() {
        let grid: Grid = PUZZLE.parse().unwrap();
        assert_eq!((grid.rows(), grid.cols()), (4, 6));

        let outcomes = grid::find_words(&grid, &["listen", "dog", "cat", "but", "zebra"]);
        let found = grid::found_placements(&outcomes);
        let summary: Vec<String> = found.iter().map(ToString::to_string).collect();
        assert_eq!(
            summary,
            vec![
                "LISTEN: Row 1, Col 1 → Right",
                "DOG: Row 2, Col 3 → Right",
                "CAT: Row 2, Col 6 → Down-Left",
                "BUT: Row 4, Col 6 → Left",
            ]
        );
        assert!(outcomes[4].placement.is_none());
    }

    #[test]
    fn test_vertical_and_diagonal() {
        let grid: Grid = PUZZLE.parse().unwrap();
        let low = grid::find_word(&grid, "LOW").unwrap();
        assert_eq!((low.start_row, low.start_col, low.direction), (1, 1, Direction::Down));
        assert_eq!((low.end_row, low.end_col), (3, 1));

        let diag = grid::find_word(&grid, "LXMT").unwrap();
        assert_eq!(diag.direction, Direction::DownRight);
        assert_eq!((diag.end_row, diag.end_col), (4, 4));
    }

    #[test]
    fn test_ragged_grid_rejected() {
        let err = "ABC\nDE\n".parse::<Grid>().unwrap_err();
        assert_eq!(err.code(), "E005");
    }
}

#[cfg(test)]
mod rhymes {
    use super::*;
    use wordplay::rhyme::{self, SyllableFilter};

    #[test]
    fn test_rhymes_by_syllable() {
        let lexicon = load_test_lexicon();
        assert_eq!(
            rhyme::find_rhymes("night", &lexicon, SyllableFilter::All),
            vec!["bright", "delight", "fight", "flight", "light"]
        );
        assert_eq!(
            rhyme::find_rhymes("night", &lexicon, SyllableFilter::One),
            vec!["bright", "fight", "flight", "light"]
        );
        assert_eq!(rhyme::find_rhymes("night", &lexicon, SyllableFilter::Two), vec!["delight"]);
    }

    #[test]
    fn test_tion_rhymes() {
        let lexicon = load_test_lexicon();
        assert_eq!(rhyme::find_rhymes("nation", &lexicon, SyllableFilter::All), vec!["creation", "station"]);
    }
}

#[cfg(test)]
mod games_and_lookup {
    use super::*;
    use wordplay::hangman::{self, Difficulty, GameStatus, GuessOutcome, HangmanGame};
    use wordplay::thesaurus::Thesaurus;

    #[test]
    fn test_hangman_round() {
        let lexicon = load_test_lexicon();
        let mut rng = StdRng::seed_from_u64(2024);
        let word = hangman::choose_word(&lexicon, Difficulty::Hard, &mut rng).unwrap();
        assert_eq!(word, "crocodile");

        let mut game = HangmanGame::new(word);
        for c in "crodile".chars() {
            assert_eq!(game.guess(c), GuessOutcome::Correct);
        }
        assert_eq!(game.masked(), "crocodile");
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.remaining_letters(), 19);
    }

    #[test]
    fn test_thesaurus_lookup() {
        let entry = Thesaurus::builtin().lookup("FAST").unwrap();
        assert!(entry.synonyms.contains(&"quick".to_string()));
        assert_eq!(entry.antonyms, vec!["slow", "sluggish", "leisurely"]);
        assert!(Thesaurus::builtin().lookup("xylophone").is_none());
    }
}
