use std::collections::HashSet;
use std::sync::LazyLock;

/// The hundred most frequent English words, used to float well-known
/// results to the top and to highlight them.
const DEFAULT_COMMON_WORDS: [&str; 100] = [
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i",
    "it", "for", "not", "on", "with", "he", "as", "you", "do", "at",
    "this", "but", "his", "by", "from", "they", "we", "say", "her", "she",
    "or", "an", "will", "my", "one", "all", "would", "there", "their", "what",
    "so", "up", "out", "if", "about", "who", "get", "which", "go", "me",
    "when", "make", "can", "like", "time", "no", "just", "him", "know", "take",
    "people", "into", "year", "your", "good", "some", "could", "them", "see", "other",
    "than", "then", "now", "look", "only", "come", "its", "over", "think", "also",
    "back", "after", "use", "two", "how", "our", "work", "first", "well", "way",
    "even", "new", "want", "because", "any", "these", "give", "day", "most", "us",
];

static DEFAULT_SET: LazyLock<CommonWordSet> =
    LazyLock::new(|| CommonWordSet::from_words(DEFAULT_COMMON_WORDS));

/// An immutable set of high-frequency words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonWordSet {
    words: HashSet<String>,
}

impl CommonWordSet {
    /// Build a set from any words; entries are trimmed and lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// The built-in reference set.
    #[must_use]
    pub fn builtin() -> &'static CommonWordSet {
        &DEFAULT_SET
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_set() {
        let set = CommonWordSet::builtin();
        assert_eq!(set.len(), 100);
        assert!(set.contains("the"));
        assert!(set.contains("because"));
        assert!(!set.contains("zebra"));
    }

    #[test]
    fn test_from_words_normalizes() {
        let set = CommonWordSet::from_words([" Cat ", "DOG", ""]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("cat"));
        assert!(set.contains("dog"));
    }
}
