//! Hangman: word selection by difficulty and the game state machine.
//!
//! All randomness comes from a caller-supplied [`rand::Rng`], so games can be
//! replayed with a seeded generator.

use crate::errors::ParseError;
use crate::word_char::{ALPHABET_SIZE, WordChar};
use crate::word_list::Lexicon;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::BTreeSet;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

pub const DEFAULT_MAX_WRONG: usize = 6;
pub const DEFAULT_MAX_HINTS: usize = 2;

/// Secret words are drawn from this length band at every difficulty.
pub const WORD_LENGTHS: RangeInclusive<usize> = 3..=12;

/// Word-length bands for choosing a secret word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Difficulty {
    #[default]
    All,
    /// 3 to 5 letters
    Easy,
    /// 6 to 8 letters
    Medium,
    /// 9 to 12 letters
    Hard,
}

impl Difficulty {
    #[must_use]
    pub fn accepts(self, word: &str) -> bool {
        let len = word.len();
        if !WORD_LENGTHS.contains(&len) {
            return false;
        }
        match self {
            Difficulty::All => true,
            Difficulty::Easy => (3..=5).contains(&len),
            Difficulty::Medium => (6..=8).contains(&len),
            Difficulty::Hard => len >= 9,
        }
    }

    /// Lexicon words in this band, in lexicon order.
    #[must_use]
    pub fn filter(self, lexicon: &Lexicon) -> Vec<&str> {
        lexicon.iter().map(String::as_str).filter(|w| self.accepts(w)).collect()
    }
}

impl FromStr for Difficulty {
    type Err = Box<ParseError>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Difficulty::All),
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(Box::new(ParseError::InvalidDifficulty { input: s.to_string() })),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Difficulty::All => "all",
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{s}")
    }
}

/// Pick a secret word. Falls back to the whole lexicon when no word fits
/// `difficulty`; `None` only for an empty lexicon.
pub fn choose_word<'a, R: Rng + ?Sized>(
    lexicon: &'a Lexicon,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<&'a str> {
    let candidates = difficulty.filter(lexicon);
    if let Some(word) = candidates.choose(rng) {
        return Some(*word);
    }
    log::debug!("no {difficulty} words in lexicon; choosing from all words");
    lexicon.choose(rng).map(String::as_str)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Wrong,
    AlreadyGuessed,
    /// The game had already ended; nothing changed.
    GameOver,
    /// Not a letter a-z.
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

#[derive(Debug, Clone)]
pub struct HangmanGame {
    word: String,
    guessed: BTreeSet<char>,
    wrong_guesses: usize,
    max_wrong: usize,
    hints_used: usize,
    max_hints: usize,
}

impl HangmanGame {
    #[must_use]
    pub fn new(word: &str) -> Self {
        HangmanGame {
            word: word.trim().to_lowercase(),
            guessed: BTreeSet::new(),
            wrong_guesses: 0,
            max_wrong: DEFAULT_MAX_WRONG,
            hints_used: 0,
            max_hints: DEFAULT_MAX_HINTS,
        }
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.wrong_guesses >= self.max_wrong {
            GameStatus::Lost
        } else if self.word.chars().all(|c| self.guessed.contains(&c)) {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        let letter = letter.to_ascii_lowercase();
        if !letter.is_literal() {
            return GuessOutcome::Invalid;
        }
        if self.status() != GameStatus::InProgress {
            return GuessOutcome::GameOver;
        }
        if !self.guessed.insert(letter) {
            return GuessOutcome::AlreadyGuessed;
        }
        if self.word.contains(letter) {
            GuessOutcome::Correct
        } else {
            self.wrong_guesses += 1;
            GuessOutcome::Wrong
        }
    }

    /// Reveal a random unguessed letter of the word (weighted by how often
    /// it occurs). The reveal counts as a guess and uses up a hint.
    pub fn hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<char> {
        if self.status() != GameStatus::InProgress || self.hints_remaining() == 0 {
            return None;
        }
        let unguessed: Vec<char> = self.word.chars().filter(|c| !self.guessed.contains(c)).collect();
        let &letter = unguessed.choose(rng)?;
        self.guess(letter);
        self.hints_used += 1;
        Some(letter)
    }

    /// The word with unguessed letters as `_`; fully revealed once lost.
    #[must_use]
    pub fn masked(&self) -> String {
        let reveal_all = self.status() == GameStatus::Lost;
        self.word
            .chars()
            .map(|c| if reveal_all || self.guessed.contains(&c) { c } else { '_' })
            .collect()
    }

    #[must_use]
    pub fn wrong_guesses(&self) -> usize {
        self.wrong_guesses
    }

    #[must_use]
    pub fn max_wrong(&self) -> usize {
        self.max_wrong
    }

    /// Letters of the alphabet not yet tried.
    #[must_use]
    pub fn remaining_letters(&self) -> usize {
        ALPHABET_SIZE - self.guessed.len()
    }

    #[must_use]
    pub fn hints_remaining(&self) -> usize {
        self.max_hints.saturating_sub(self.hints_used)
    }

    /// Letters tried so far, in alphabetical order.
    pub fn guessed_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.guessed.iter().copied()
    }
}

/// Running totals across games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub played: usize,
    pub solved: usize,
}

impl SessionStats {
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won => {
                self.played += 1;
                self.solved += 1;
            }
            GameStatus::Lost => self.played += 1,
            GameStatus::InProgress => {}
        }
    }
}
