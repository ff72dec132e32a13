//! Ordering, grouping and summary statistics for match results.

use crate::common_words::CommonWordSet;
use crate::errors::ParseError;
use crate::parser::LetterMultiset;
use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

/// How a result list is ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Longest first, ties alphabetical.
    #[default]
    Length,
    /// Plain alphabetical.
    Alphabetical,
    /// Common words first; within each partition, as `Length`.
    CommonFirst,
}

impl FromStr for SortKey {
    type Err = Box<ParseError>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "length" => Ok(SortKey::Length),
            "alphabetical" | "alpha" => Ok(SortKey::Alphabetical),
            "common" | "commonfirst" | "common-first" => Ok(SortKey::CommonFirst),
            _ => Err(Box::new(ParseError::InvalidSortKey { input: s.to_string() })),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            SortKey::Length => "length",
            SortKey::Alphabetical => "alphabetical",
            SortKey::CommonFirst => "common",
        };
        write!(f, "{s}")
    }
}

fn by_length_then_alpha(a: &str, b: &str) -> Ordering {
    b.len().cmp(&a.len()).then_with(|| a.cmp(b))
}

/// Order `words` by `key`. `common` is only consulted for `CommonFirst`.
#[must_use]
pub fn sort_results(mut words: Vec<String>, key: SortKey, common: &CommonWordSet) -> Vec<String> {
    match key {
        SortKey::Length => words.sort_by(|a, b| by_length_then_alpha(a, b)),
        SortKey::Alphabetical => words.sort(),
        SortKey::CommonFirst => words.sort_by(|a, b| {
            // `true` sorts after `false`, so compare "is not common"
            (!common.contains(a))
                .cmp(&!common.contains(b))
                .then_with(|| by_length_then_alpha(a, b))
        }),
    }
    words
}

/// Words bucketed by length, iterated longest group first.
///
/// Within a group, words keep the order they arrived in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LengthGroups {
    groups: BTreeMap<Reverse<usize>, Vec<String>>,
}

impl LengthGroups {
    /// `(length, words)` pairs in descending length order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.groups.iter().map(|(Reverse(len), words)| (*len, words.as_slice()))
    }

    #[must_use]
    pub fn get(&self, len: usize) -> Option<&[String]> {
        self.groups.get(&Reverse(len)).map(Vec::as_slice)
    }

    /// Number of distinct lengths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Group `words` by length (see [`LengthGroups`]).
#[must_use]
pub fn group_by_length<S: AsRef<str>>(words: &[S]) -> LengthGroups {
    let mut groups: BTreeMap<Reverse<usize>, Vec<String>> = BTreeMap::new();
    for word in words {
        let word = word.as_ref();
        groups.entry(Reverse(word.len())).or_default().push(word.to_string());
    }
    LengthGroups { groups }
}

/// Is a group of `group_len`-letter words a full anagram of `letters`
/// (uses every non-wildcard tile)?
#[must_use]
pub fn is_complete_anagram(group_len: usize, letters: &LetterMultiset) -> bool {
    group_len == letters.letter_count()
}

/// Summary numbers shown next to a result list.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultStats {
    pub total: usize,
    pub average_length: f64,
    pub common_words: usize,
    /// Up to three `(length, count)` pairs, most frequent first; equal
    /// counts keep the shorter length first.
    pub top_lengths: Vec<(usize, usize)>,
    pub longest: Option<String>,
}

impl ResultStats {
    const TOP_LENGTHS: usize = 3;

    #[must_use]
    pub fn compute<S: AsRef<str>>(words: &[S], common: &CommonWordSet) -> Self {
        let mut by_length: HashMap<usize, usize> = HashMap::new();
        let mut total_len = 0usize;
        let mut common_words = 0;
        let mut longest: Option<&str> = None;

        for word in words {
            let word = word.as_ref();
            *by_length.entry(word.len()).or_default() += 1;
            total_len += word.len();
            if common.contains(word) {
                common_words += 1;
            }
            // ties go to the later word
            if longest.is_none_or(|l| word.len() >= l.len()) {
                longest = Some(word);
            }
        }

        let mut top_lengths: Vec<(usize, usize)> = by_length.into_iter().collect();
        top_lengths.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        top_lengths.truncate(Self::TOP_LENGTHS);

        #[allow(clippy::cast_precision_loss)]
        let average_length = if words.is_empty() { 0.0 } else { total_len as f64 / words.len() as f64 };

        ResultStats {
            total: words.len(),
            average_length,
            common_words,
            top_lengths,
            longest: longest.map(str::to_string),
        }
    }
}
