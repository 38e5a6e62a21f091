//! Word lists for the lexicon
//!
//! Provides the embedded default dictionary compiled into the binary, plus loaders
//! for external word-list files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
