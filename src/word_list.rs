//! `word_list`: loading and normalizing the lexicon the tools search.
//!
//! A lexicon is read from newline-delimited text (a file on native builds,
//! or a string the browser fetched for wasm builds). Each line is trimmed
//! and lowercased; lines that aren't purely a-z, or whose length falls
//! outside [`LexiconOptions`], are skipped. Order is preserved and
//! duplicates are kept, since the lexicon is an ordered sequence.
//!
//! If nothing usable survives, the built-in fallback list is used instead,
//! so the tools always have something to search.

use crate::word_char::WordChar;
use log::{debug, warn};
use std::ops::Deref;

/// Words the tools fall back on when the real list can't be loaded.
const FALLBACK_WORDS: &[&str] = &[
    "cat", "act", "car", "arc", "rat", "tar", "art",
    "dog", "god", "ate", "eat", "tea", "eta",
    "tap", "pat", "apt", "top", "pot", "opt",
    "stop", "tops", "pots", "opts", "spot", "post",
    "listen", "silent", "enlist", "tinsel",
    "triangle", "integrals", "relating", "altering",
    "dictionary", "indicatory",
    "earth", "heart", "hater", "rathe", "hearts",
    "stone", "notes", "onset", "tones",
    "share", "shear", "hears", "rheas",
    "angel", "angle", "glean", "genal",
    "fried", "fired", "redif", "rider",
    "pears", "parse", "spare", "spear", "reaps",
    "leapt", "petal", "plate", "pleat", "tepal",
    "cares", "races", "scare", "acres", "carse",
];

/// Length bounds applied while loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexiconOptions {
    pub min_len: usize,
    pub max_len: usize,
}

impl Default for LexiconOptions {
    fn default() -> Self {
        Self { min_len: 2, max_len: 15 }
    }
}

impl LexiconOptions {
    fn accepts(&self, word: &str) -> bool {
        (self.min_len..=self.max_len).contains(&word.len()) && word.chars().all(|c| c.is_literal())
    }
}

/// An ordered, immutable sequence of lowercase words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: Vec<String>,
}

impl Lexicon {
    /// Build a lexicon from arbitrary strings, normalizing each one and
    /// dropping the ones `options` rejects. No fallback is applied.
    pub fn from_words<I, S>(words: I, options: LexiconOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| options.accepts(w))
            .collect();
        Lexicon { words }
    }

    /// Parse newline-delimited text.
    ///
    /// Falls back to [`Lexicon::fallback`] when no line survives.
    #[must_use]
    pub fn parse_from_str(contents: &str, options: LexiconOptions) -> Lexicon {
        let lexicon = Self::from_words(contents.lines(), options);
        if lexicon.is_empty() {
            warn!("word list contained no usable words; using the built-in list");
            return Self::fallback();
        }
        debug!("parsed {} words from word list", lexicon.len());
        lexicon
    }

    /// The built-in word list.
    #[must_use]
    pub fn fallback() -> Lexicon {
        Lexicon { words: FALLBACK_WORDS.iter().map(|w| (*w).to_string()).collect() }
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(
        path: P,
        options: LexiconOptions,
    ) -> std::io::Result<Lexicon> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e),
            )
        })?;
        Ok(Self::parse_from_str(&data, options))
    }

    /// Like [`Lexicon::load_from_path`], but a missing or unreadable file
    /// also falls back to the built-in list (as the web tools do).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_fallback<P: AsRef<std::path::Path>>(path: P, options: LexiconOptions) -> Lexicon {
        Self::load_from_path(path, options).unwrap_or_else(|e| {
            warn!("{e}; using the built-in list");
            Self::fallback()
        })
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl Deref for Lexicon {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}

impl<'a> IntoIterator for &'a Lexicon {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;
    fn into_iter(self) -> Self::IntoIter { self.words.iter() }
}
