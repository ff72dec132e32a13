use crate::common_words::CommonWordSet;
use crate::errors::ParseError;
use crate::grid::{self, Grid};
use crate::log::init_logger;
use crate::rhyme::{self, SyllableFilter};
use crate::solver::{self, AnagramQuery, CrosswordQuery, JumbleQuery, SolverError, UnscrambleQuery};
use crate::thesaurus::Thesaurus;
use crate::word_list::{Lexicon, LexiconOptions};
use wasm_bindgen::prelude::*;

use serde::Serialize;
use serde_wasm_bindgen::to_value;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "E001", "S002")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<SolverError> for WasmError {
    fn from(e: SolverError) -> Self {
        match &e {
            SolverError::ParseFailure(pe) => WasmError::from(pe.as_ref()),
            SolverError::WildcardNotAllowed { .. } => WasmError {
                code: e.code().to_string(),
                message: e.to_string(),
                description: e.description().to_string(),
                details: e.details().to_string(),
                help: e.help().map(ToString::to_string),
            },
        }
    }
}

impl From<&ParseError> for WasmError {
    fn from(pe: &ParseError) -> Self {
        WasmError {
            code: pe.code().to_string(),
            message: pe.to_string(),
            description: pe.description().to_string(),
            details: pe.details().to_string(),
            help: pe.help().map(ToString::to_string),
        }
    }
}

impl From<Box<ParseError>> for WasmError {
    fn from(pe: Box<ParseError>) -> Self {
        WasmError::from(pe.as_ref())
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {help}"));
        }

        js_sys::Error::new(&msg).into()
    }
}

/// Validate all internal regex patterns compile successfully.
///
/// Forces LazyLock initialization of all static regexes so any compilation
/// errors occur at startup rather than on first user query.
///
/// ## IMPORTANT: Adding a new regex?
/// If you add a new `LazyLock<Regex>` anywhere in the codebase, you MUST add it here.
fn validate_internal_regexes() {
    let _ = &*crate::rhyme::SILENT_SUFFIX_RE;
    let _ = &*crate::rhyme::LEADING_Y_RE;
    let _ = &*crate::rhyme::VOWEL_GROUP_RE;
    log::debug!("Internal regex patterns validated successfully");
}

/// Initialize logging and validation with the specified debug setting.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    validate_internal_regexes();
    init_logger(debug_enabled);

    log::info!("WASM module initialized");
    if !debug_enabled {
        log::info!("Debug logging disabled");
    }
}

fn words_from_js(words: JsValue) -> Result<Lexicon, WasmError> {
    let words: Vec<String> = serde_wasm_bindgen::from_value(words).map_err(|e| WasmError {
        code: "WASM001".to_string(),
        message: format!("word list must be string[]: {e}"),
        description: "Invalid word-list format".to_string(),
        details: "The words parameter must be a JavaScript array of strings.".to_string(),
        help: Some("Pass the array returned by parse_word_list, e.g. ['cat', 'dog', 'fish']".to_string()),
    })?;
    Ok(Lexicon::from_words(words, LexiconOptions { min_len: 1, max_len: usize::MAX }))
}

fn serialize<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(|e| {
        WasmError {
            code: "WASM002".to_string(),
            message: format!("serialization failed: {e}"),
            description: "Failed to serialize result".to_string(),
            details: "The result could not be converted to JavaScript format.".to_string(),
            help: Some("This is an internal error. Please report this issue.".to_string()),
        }
        .into()
    })
}

/// JS entry: anagrams of `letters` (`?` = blank) among `words`.
/// `pattern` may be empty; `sort` is "length", "alphabetical" or "common".
#[wasm_bindgen]
pub fn solve_anagram_wasm(
    letters: &str,
    words: JsValue,
    min_len: usize,
    max_len: usize,
    pattern: &str,
    sort: &str,
) -> Result<JsValue, JsValue> {
    let lexicon = words_from_js(words)?;
    let query = AnagramQuery {
        letters: letters.to_string(),
        min_len,
        max_len,
        pattern: Some(pattern.to_string()),
        sort: sort.parse().map_err(WasmError::from)?,
    };
    let results = solver::solve_anagram(&query, &lexicon, CommonWordSet::builtin()).map_err(WasmError::from)?;
    serialize(&results)
}

/// JS entry: unscramble `letters`; results must contain `contains`.
#[wasm_bindgen]
pub fn solve_unscramble_wasm(letters: &str, words: JsValue, min_len: usize, contains: &str) -> Result<JsValue, JsValue> {
    let lexicon = words_from_js(words)?;
    let query = UnscrambleQuery { letters: letters.to_string(), min_len, contains: contains.to_string() };
    let results = solver::solve_unscramble(&query, &lexicon).map_err(WasmError::from)?;
    serialize(&results)
}

/// JS entry: jumble `letters`; `exact_len` of 0 means any length.
#[wasm_bindgen]
pub fn solve_jumble_wasm(letters: &str, words: JsValue, exact_len: usize) -> Result<JsValue, JsValue> {
    let lexicon = words_from_js(words)?;
    let query = JumbleQuery { letters: letters.to_string(), exact_len: Some(exact_len) };
    let results = solver::solve_jumble(&query, &lexicon).map_err(WasmError::from)?;
    serialize(&results)
}

#[derive(Serialize)]
struct WasmCrosswordResult {
    words: Vec<String>,
    lengths: Vec<usize>,
}

/// JS entry: words fitting `pattern`; `length` of 0 and an empty
/// `starts_with` mean no filter.
#[wasm_bindgen]
pub fn solve_crossword_wasm(pattern: &str, words: JsValue, length: usize, starts_with: &str) -> Result<JsValue, JsValue> {
    let lexicon = words_from_js(words)?;
    let query = CrosswordQuery {
        pattern: pattern.to_string(),
        length: (length > 0).then_some(length),
        starts_with: Some(starts_with.to_string()),
    };
    let results = solver::solve_crossword(&query, &lexicon).map_err(WasmError::from)?;
    let lengths = solver::available_lengths(&results);
    serialize(&WasmCrosswordResult { words: results, lengths })
}

/// JS entry: search `grid_text` for each word; returns only the words
/// that were found, each with its placement.
#[wasm_bindgen]
pub fn find_words_wasm(grid_text: &str, words: JsValue) -> Result<JsValue, JsValue> {
    let grid: Grid = grid_text.parse().map_err(WasmError::from)?;
    let targets: Vec<String> = serde_wasm_bindgen::from_value(words).map_err(|e| WasmError {
        code: "WASM001".to_string(),
        message: format!("words must be string[]: {e}"),
        description: "Invalid word-list format".to_string(),
        details: "The words parameter must be a JavaScript array of strings.".to_string(),
        help: Some("Pass one string per word to search for".to_string()),
    })?;
    let outcomes = grid::find_words(&grid, &targets);
    serialize(&grid::found_placements(&outcomes))
}

#[derive(Serialize)]
struct WasmRhyme {
    word: String,
    syllables: usize,
}

/// JS entry: rhymes for `word`; `syllables` is "all", "1", "2" or "3".
#[wasm_bindgen]
pub fn find_rhymes_wasm(word: &str, words: JsValue, syllables: &str) -> Result<JsValue, JsValue> {
    let lexicon = words_from_js(words)?;
    let filter: SyllableFilter = syllables.parse().map_err(WasmError::from)?;
    let rhymes: Vec<WasmRhyme> = rhyme::find_rhymes(word, &lexicon, filter)
        .into_iter()
        .map(|w| WasmRhyme { syllables: rhyme::count_syllables(&w), word: w })
        .collect();
    serialize(&rhymes)
}

/// JS entry: thesaurus entry for `word`, or `null`.
#[wasm_bindgen]
pub fn lookup_thesaurus_wasm(word: &str) -> Result<JsValue, JsValue> {
    match Thesaurus::builtin().lookup(word) {
        Some(entry) => serialize(entry),
        None => Ok(JsValue::NULL),
    }
}

/// Parse newline-separated word-list text into the normalized `string[]`
/// the other entry points take. Falls back to the built-in list if nothing
/// usable is found.
#[wasm_bindgen]
pub fn parse_word_list(text: &str, min_len: usize, max_len: usize) -> Result<JsValue, JsValue> {
    let lexicon = Lexicon::parse_from_str(text, LexiconOptions { min_len, max_len });
    serialize(&lexicon.words())
}

/// Generate a debug report users can paste into an issue.
#[wasm_bindgen]
pub fn get_debug_info(tool: &str, input: &str, error_message: &str, word_list_size: usize) -> String {
    use std::fmt::Write;
    let mut report = String::new();

    // NB: writing to a String never fails
    let _ = writeln!(&mut report, "=== WORDPLAY DEBUG REPORT ===");
    let _ = writeln!(&mut report, "Version: {} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_HASH"));
    let _ = writeln!(
        &mut report,
        "Generated: {}",
        js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_else(|| "unknown".to_string())
    );
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Error");
    let _ = writeln!(&mut report, "{error_message}");
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Input");
    let _ = writeln!(&mut report, "Tool: {tool}");
    let _ = writeln!(&mut report, "Input: {input}");
    let _ = writeln!(&mut report, "Word List Size: {word_list_size}");
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Environment");
    if let Some(window) = web_sys::window() {
        if let Ok(user_agent) = window.navigator().user_agent() {
            let _ = writeln!(&mut report, "User Agent: {user_agent}");
        }
        let _ = writeln!(&mut report, "Location: {}", window.location().href().unwrap_or_else(|_| "unknown".to_string()));
    }
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "=== END DEBUG REPORT ===");

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_debug_info_structure() {
        let report = get_debug_info("anagram", "ca?t", "parse failure", 1000);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "=== WORDPLAY DEBUG REPORT ===");
        assert!(lines[1].starts_with(&format!("Version: {}", env!("CARGO_PKG_VERSION"))));
        assert!(lines[2].starts_with("Generated: "));
        assert_eq!(lines[4], "## Error");
        assert_eq!(lines[5], "parse failure");
        let input_idx = lines.iter().position(|&l| l == "## Input").unwrap();
        assert_eq!(lines[input_idx + 1], "Tool: anagram");
        assert_eq!(lines[input_idx + 2], "Input: ca?t");
        assert_eq!(lines[input_idx + 3], "Word List Size: 1000");
        assert_eq!(lines.last(), Some(&"=== END DEBUG REPORT ==="));
    }

    #[test]
    fn test_all_regexes_validated() {
        // current regexes: rhyme::{SILENT_SUFFIX_RE, LEADING_Y_RE, VOWEL_GROUP_RE}
        validate_internal_regexes();
    }

    #[test]
    fn test_wasm_error_from_parse_failure_uses_inner_code() {
        let err = SolverError::ParseFailure(Box::new(ParseError::InvalidLetter {
            input: "ca1".to_string(),
            invalid_char: '1',
        }));
        let wasm_err = WasmError::from(err);
        assert_eq!(wasm_err.code, "E002");
        assert!(wasm_err.help.is_some());
    }
}
