//! Lexicon
//!
//! A word dictionary built as a prefix tree (trie), supporting membership and
//! prefix queries, alphabetical enumeration, a wildcard-pattern matcher, and a
//! bounded-mismatch fuzzy-suggestion search.
//!
//! # Quick Start
//!
//! ```rust
//! use lexicon::core::LexiconTrie;
//!
//! let mut trie = LexiconTrie::new();
//! trie.insert("cat");
//! trie.insert("cart");
//! trie.insert("dog");
//!
//! assert!(trie.contains_word("cat"));
//! assert!(trie.contains_prefix("ca"));
//!
//! // Wildcard search: `_` one char, `?` zero or one, `*` any run
//! let matches = trie.match_pattern("c*t");
//! assert!(matches.contains("cat"));
//! assert!(matches.contains("cart"));
//!
//! // Same-length fuzzy search (no insertions or deletions)
//! let close = trie.suggest("cag", 1);
//! assert!(close.contains("cat"));
//! ```

// Core trie data structure
pub mod core;

// Search algorithms over the trie
pub mod search;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
