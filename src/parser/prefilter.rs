use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use fancy_regex::Regex;

use super::pattern::Slot;

/// Global, lazily initialized cache of compiled regexes.
///
/// Hosts re-run the same crossword pattern on every keystroke that doesn't
/// change it (length filter, prefix filter), so compiled regexes are kept
/// around keyed by their source string.
///
/// Locking strategy:
/// - We hold the `Mutex` only while accessing the map (lookups/inserts).
/// - We compile outside the lock, with a double-check before insert.
/// - `Regex` clones are cheap (internally ref-counted).
///
/// A session typing patterns one keystroke at a time produces a stream of
/// distinct sources, so the map is cleared once it reaches
/// [`REGEX_CACHE_CAPACITY`] entries.
static REGEX_CACHE: OnceLock<Mutex<HashMap<String, Regex>>> = OnceLock::new();

pub(crate) const REGEX_CACHE_CAPACITY: usize = 256;

/// Return a compiled `Regex` for `pattern`, caching the result.
pub(crate) fn get_regex(pattern: &str) -> Result<Regex, Box<fancy_regex::Error>> {
    let cache = REGEX_CACHE.get_or_init(|| Mutex::new(HashMap::new()));

    // check cache first; if lock is poisoned, we just compile without caching
    if let Ok(guard) = cache.lock()
        && let Some(re) = guard.get(pattern).cloned()
    {
        return Ok(re);
    }

    let compiled = Regex::new(pattern)?;

    if let Ok(mut guard) = cache.lock() {
        if let Some(existing) = guard.get(pattern).cloned() {
            return Ok(existing);
        }
        if guard.len() >= REGEX_CACHE_CAPACITY {
            guard.clear();
        }
        guard.insert(pattern.to_string(), compiled.clone());
    }
    Ok(compiled)
}

/// Render pattern slots as an anchored, case-insensitive regex source.
///
/// A wildcard becomes `.` (exactly one character) and a letter is emitted
/// as-is; letters never need escaping since slots are restricted to a-z.
///
/// `c?t` → `(?i)^c.t$`
pub(crate) fn slots_to_regex_str(slots: &[Slot]) -> String {
    let body: String = slots
        .iter()
        .map(|slot| match slot {
            Slot::Letter(c) => *c,
            Slot::Wildcard => '.',
        })
        .collect();
    format!("(?i)^{body}$")
}
