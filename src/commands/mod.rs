//! Command implementations

pub mod query;
pub mod search;
pub mod shell;

pub use query::{LookupResult, PrefixResult, WordListing, list_words, lookup_prefix, lookup_word};
pub use search::{MatchResult, SuggestResult, match_words, suggest_words};
pub use shell::run_shell;
