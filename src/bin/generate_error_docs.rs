//! Generate error code documentation from the source of truth (error enums).
//!
//! Codes, descriptions, details, and help text come straight from the
//! `ParseError` and `SolverError` implementations.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use wordplay::errors::ParseError;
use wordplay::solver::SolverError;

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            println!("### {}: {}\n", error.code(), error.description());
            println!("**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                println!("**How to fix:**");
                println!("```");
                println!("{help_text}");
                println!("```\n");
            }

            println!("**Example error message:**");
            println!("```");
            println!("{error}");
            println!("```\n");

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

/// One example of every `ParseError` variant
fn all_parse_error_variants() -> Vec<ParseError> {
    vec![
        ParseError::RegexError(fancy_regex::Regex::new("(?P<invalid").unwrap_err()),
        ParseError::InvalidLetter { input: "ca7".to_string(), invalid_char: '7' },
        ParseError::InvalidPatternChar { pattern: "c*t".to_string(), invalid_char: '*' },
        ParseError::InvalidGridChar { row: 2, col: 3, invalid_char: '#' },
        ParseError::RaggedGrid { row: 3, expected: 5, found: 4 },
        ParseError::ContradictoryBounds { min: 6, max: 3 },
        ParseError::InvalidSortKey { input: "random".to_string() },
        ParseError::InvalidDirection { input: "North".to_string() },
        ParseError::InvalidSyllableFilter { input: "5".to_string() },
        ParseError::InvalidDifficulty { input: "insane".to_string() },
        ParseError::InvalidThesaurusLine { line_no: 4, line: "joyful glad".to_string() },
        ParseError::InvalidLowercaseChar { invalid_char: 'X' },
    ]
}

/// One example of every `SolverError` variant
fn all_solver_error_variants() -> Vec<SolverError> {
    vec![
        SolverError::ParseFailure(Box::new(ParseError::InvalidLetter {
            input: "ca7".to_string(),
            invalid_char: '7',
        })),
        SolverError::WildcardNotAllowed { tool: "jumble" },
    ]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Table of Contents\n");
    println!("- [Solver Errors (S001–S002)](#solver-errors)");
    println!("- [Parse Errors (E001–E012)](#parse-errors)");
    println!("- [How to Use Error Codes](#how-to-use-error-codes)\n");

    println!("## Solver Errors\n");
    println!("Errors returned by the word tools. These wrap lower-level parse errors or reject input a tool cannot use.\n");
    generate_error_docs!(all_solver_error_variants());

    println!("## Parse Errors\n");
    println!("Errors that occur when parsing letters, patterns, grids, or option values.\n");
    generate_error_docs!(all_parse_error_variants());

    println!("\n## How to Use Error Codes\n");
    println!("When you see an error like:\n");
    println!("```");
    println!("Error: Letters \"ca7\" contain invalid character '7' (E002)");
    println!("Use only letters a-z (and '?' for a blank tile), e.g. 'listen' or 'ret?st'");
    println!("```\n");
    println!("1. Note the error code (e.g., `E002`)");
    println!("2. Look it up in this document for a detailed explanation");
    println!("3. Follow the suggested fix\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_code_documented_once() {
        let parse_codes: Vec<&str> = all_parse_error_variants().iter().map(ParseError::code).collect();
        let solver_codes: Vec<&str> = all_solver_error_variants().iter().map(SolverError::code).collect();

        let expected_parse: Vec<String> = (1..=12).map(|n| format!("E{n:03}")).collect();
        assert_eq!(parse_codes, expected_parse);
        assert_eq!(solver_codes, vec!["S001", "S002"]);

        let unique: HashSet<&str> = parse_codes.iter().chain(solver_codes.iter()).copied().collect();
        assert_eq!(unique.len(), parse_codes.len() + solver_codes.len());
    }
}
