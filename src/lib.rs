// Reusable library API, visible to both CLI and WASM builds
pub mod common_words;
pub mod errors;
pub mod grid;
pub mod hangman;
pub mod log;
pub mod matcher;
pub mod parser;
pub mod rhyme;
pub mod solver;
pub mod sorting;
pub mod thesaurus;
mod word_char;
pub mod word_list;

pub use word_char::WILDCARD;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
