//! Error types for input parsing, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E012) for documentation lookup:
//!
//! - E001: `RegexError` (Invalid regex pattern)
//! - E002: `InvalidLetter` (Letter rack contains a non a-z character)
//! - E003: `InvalidPatternChar` (Pattern contains something other than a-z or '?')
//! - E004: `InvalidGridChar` (Grid cell is not a letter)
//! - E005: `RaggedGrid` (Grid rows have different lengths)
//! - E006: `ContradictoryBounds` (Contradictory length bounds)
//! - E007: `InvalidSortKey` (Unknown sort key)
//! - E008: `InvalidDirection` (Unknown direction name)
//! - E009: `InvalidSyllableFilter` (Unknown syllable filter)
//! - E010: `InvalidDifficulty` (Unknown hangman difficulty)
//! - E011: `InvalidThesaurusLine` (Thesaurus line without a headword)
//! - E012: `InvalidLowercaseChar` (Non-lowercase character)
//!
//! # Examples
//!
//! ```
//! use wordplay::errors::ParseError;
//! use wordplay::parser::Pattern;
//!
//! match "c?t!".parse::<Pattern>() {
//!     Err(e) => {
//!         assert_eq!(e.code(), "E003");
//!         println!("{}", e.display_detailed());
//!     }
//!     Ok(_) => unreachable!(),
//! }
//! ```

use std::io;

/// Custom error type for parsing operations
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid regex pattern: {0}")]
    RegexError(#[from] fancy_regex::Error),

    #[error("Letters \"{input}\" contain invalid character '{invalid_char}'")]
    InvalidLetter { input: String, invalid_char: char },

    #[error("Pattern \"{pattern}\" contains invalid character '{invalid_char}'")]
    InvalidPatternChar { pattern: String, invalid_char: char },

    #[error("Invalid grid character '{invalid_char}' at row {row}, column {col}")]
    InvalidGridChar { row: usize, col: usize, invalid_char: char },

    #[error("Grid row {row} has {found} cells but row 1 has {expected}")]
    RaggedGrid { row: usize, expected: usize, found: usize },

    #[error("contradictory bounds: min={min}, max={max}")]
    ContradictoryBounds { min: usize, max: usize },

    #[error("Unknown sort key \"{input}\"")]
    InvalidSortKey { input: String },

    #[error("Unknown direction \"{input}\"")]
    InvalidDirection { input: String },

    #[error("Unknown syllable filter \"{input}\"")]
    InvalidSyllableFilter { input: String },

    #[error("Unknown difficulty \"{input}\"")]
    InvalidDifficulty { input: String },

    #[error("Thesaurus line {line_no} has no headword: \"{line}\"")]
    InvalidThesaurusLine { line_no: usize, line: String },

    #[error("Invalid character '{invalid_char}' (only lowercase a-z allowed)")]
    InvalidLowercaseChar { invalid_char: char },
}

impl From<ParseError> for io::Error {
    fn from(pe: ParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, pe.to_string())
    }
}

impl From<Box<fancy_regex::Error>> for Box<ParseError> {
    fn from(e: Box<fancy_regex::Error>) -> Self {
        Box::new(ParseError::RegexError(*e))
    }
}

impl ParseError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::RegexError(_) => "E001",
            ParseError::InvalidLetter { .. } => "E002",
            ParseError::InvalidPatternChar { .. } => "E003",
            ParseError::InvalidGridChar { .. } => "E004",
            ParseError::RaggedGrid { .. } => "E005",
            ParseError::ContradictoryBounds { .. } => "E006",
            ParseError::InvalidSortKey { .. } => "E007",
            ParseError::InvalidDirection { .. } => "E008",
            ParseError::InvalidSyllableFilter { .. } => "E009",
            ParseError::InvalidDifficulty { .. } => "E010",
            ParseError::InvalidThesaurusLine { .. } => "E011",
            ParseError::InvalidLowercaseChar { .. } => "E012",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ParseError::RegexError(_) => "Invalid regex pattern",
            ParseError::InvalidLetter { .. } => "Invalid character in letters",
            ParseError::InvalidPatternChar { .. } => "Invalid character in pattern",
            ParseError::InvalidGridChar { .. } => "Invalid grid character",
            ParseError::RaggedGrid { .. } => "Grid rows differ in length",
            ParseError::ContradictoryBounds { .. } => "Contradictory length bounds",
            ParseError::InvalidSortKey { .. } => "Unknown sort key",
            ParseError::InvalidDirection { .. } => "Unknown direction name",
            ParseError::InvalidSyllableFilter { .. } => "Unknown syllable filter",
            ParseError::InvalidDifficulty { .. } => "Unknown difficulty",
            ParseError::InvalidThesaurusLine { .. } => "Malformed thesaurus line",
            ParseError::InvalidLowercaseChar { .. } => "Non-lowercase character",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            ParseError::RegexError(_) => "A pattern was translated into a regular expression that failed to compile. This usually indicates a bug.",
            ParseError::InvalidLetter { .. } => "Letter racks may contain only the letters a-z, plus '?' as a wildcard where the tool allows it.",
            ParseError::InvalidPatternChar { .. } => "Patterns are written one slot per character: a letter a-z fixes that position, '?' matches any single letter.",
            ParseError::InvalidGridChar { .. } => "Every grid cell must be a single letter. Whitespace inside rows is ignored; digits and punctuation are not.",
            ParseError::RaggedGrid { .. } => "A word-search grid must be rectangular: every non-blank row needs the same number of letters as the first.",
            ParseError::ContradictoryBounds { .. } => "The minimum length is greater than the maximum length, so no word can match.",
            ParseError::InvalidSortKey { .. } => "Results can be ordered by 'length', 'alphabetical', or 'common'.",
            ParseError::InvalidDirection { .. } => "Directions are Right, Left, Down, Up, Down-Right, Down-Left, Up-Right, Up-Left.",
            ParseError::InvalidSyllableFilter { .. } => "Syllable filters are 'all', '1', '2', or '3' (three or more).",
            ParseError::InvalidDifficulty { .. } => "Hangman difficulties are 'all', 'easy', 'medium', or 'hard'.",
            ParseError::InvalidThesaurusLine { .. } => "Each thesaurus line must look like 'headword: synonym, synonym | antonym, antonym'.",
            ParseError::InvalidLowercaseChar { .. } => "A character outside a-z was found where only lowercase letters are allowed.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ParseError::InvalidLetter { .. } => Some("Use only letters a-z (and '?' for a blank tile), e.g. 'listen' or 'ret?st'"),
            ParseError::InvalidPatternChar { .. } => Some("Use letters for known positions and '?' for unknown ones, e.g. 'c?t' or '??ing'"),
            ParseError::InvalidGridChar { .. } => Some("Remove digits and punctuation from the grid; only letters are allowed"),
            ParseError::RaggedGrid { .. } => Some("Make every grid row the same width, or remove the stray row"),
            ParseError::ContradictoryBounds { .. } => Some("The minimum length cannot exceed the maximum length"),
            ParseError::InvalidSortKey { .. } => Some("Expected one of: length, alphabetical, common"),
            ParseError::InvalidDirection { .. } => Some("Expected a name such as 'Right' or 'Down-Left'"),
            ParseError::InvalidSyllableFilter { .. } => Some("Expected one of: all, 1, 2, 3"),
            ParseError::InvalidDifficulty { .. } => Some("Expected one of: all, easy, medium, hard"),
            ParseError::InvalidThesaurusLine { .. } => Some("Example: 'happy: joyful, glad | sad, unhappy'"),
            ParseError::InvalidLowercaseChar { .. } => Some("Only lowercase letters a-z are allowed"),
            ParseError::RegexError(_) => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_errors() -> Vec<ParseError> {
        vec![
            ParseError::RegexError(fancy_regex::Regex::new("(unclosed").unwrap_err()),
            ParseError::InvalidLetter { input: "ab1".to_string(), invalid_char: '1' },
            ParseError::InvalidPatternChar { pattern: "c*t".to_string(), invalid_char: '*' },
            ParseError::InvalidGridChar { row: 2, col: 3, invalid_char: '7' },
            ParseError::RaggedGrid { row: 3, expected: 4, found: 2 },
            ParseError::ContradictoryBounds { min: 5, max: 3 },
            ParseError::InvalidSortKey { input: "random".to_string() },
            ParseError::InvalidDirection { input: "North".to_string() },
            ParseError::InvalidSyllableFilter { input: "9".to_string() },
            ParseError::InvalidDifficulty { input: "insane".to_string() },
            ParseError::InvalidThesaurusLine { line_no: 1, line: "oops".to_string() },
            ParseError::InvalidLowercaseChar { invalid_char: 'X' },
        ]
    }

    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();
        for err in sample_errors() {
            let code = err.code();
            assert!(codes.insert(code), "Duplicate error code found: {}", code);
        }
        assert_eq!(codes.len(), 12);
    }

    #[test]
    fn test_error_code_format() {
        for err in sample_errors() {
            let code = err.code();
            assert_eq!(code.len(), 4, "Error code '{}' should be 4 characters (E0XX)", code);
            assert!(code.starts_with("E0"), "Error code '{}' should start with 'E0'", code);
            assert!(code[1..].parse::<u16>().is_ok(), "Error code '{}' should end with a number", code);
        }
    }

    #[test]
    fn test_help_text_adds_information() {
        for err in sample_errors() {
            if let Some(help_text) = err.help() {
                assert!(help_text.len() > 10, "Help text for {:?} should be substantial", err);
                assert_ne!(help_text, err.to_string());
            }
            assert!(!err.description().is_empty());
            assert!(!err.details().is_empty());
        }
    }

    #[test]
    fn test_display_detailed_includes_code_and_help() {
        let err = ParseError::RaggedGrid { row: 3, expected: 4, found: 2 };
        let detailed = err.display_detailed();

        assert!(detailed.contains("E005"));
        assert!(detailed.contains(&err.to_string()));
        assert!(detailed.contains("same width"));
        // the actual values should be visible
        assert!(detailed.contains('3') && detailed.contains('4') && detailed.contains('2'));
    }

    #[test]
    fn test_display_detailed_without_help() {
        let err = ParseError::RegexError(fancy_regex::Regex::new("(unclosed").unwrap_err());
        assert_eq!(err.display_detailed(), format!("{err} (E001)"));
    }

    #[test]
    fn test_into_io_error() {
        let io_err: io::Error = ParseError::InvalidSortKey { input: "x".to_string() }.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
        assert!(io_err.to_string().contains("Unknown sort key"));
    }
}
