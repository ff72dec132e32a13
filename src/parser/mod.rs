pub mod letters;
pub mod pattern;
pub(crate) mod prefilter;
pub mod utils;

// Re-export the public API so call sites can `use wordplay::parser::Pattern`.
pub use letters::LetterMultiset;
pub use pattern::{Pattern, Slot};
pub use utils::{sanitize_letters, sanitize_word};
