//! Membership and listing commands
//!
//! Thin wrappers over the trie's query operations that package results for display.

use crate::core::LexiconTrie;

/// Result of a word-membership query
pub struct LookupResult {
    pub word: String,
    pub found: bool,
}

/// Result of a prefix-membership query
pub struct PrefixResult {
    pub prefix: String,
    pub found: bool,
    /// Whether the prefix is also a complete stored word
    pub is_word: bool,
}

/// Alphabetical listing of the whole dictionary
pub struct WordListing {
    pub words: Vec<String>,
    pub total: usize,
}

/// Check whether `word` is stored in the lexicon
#[must_use]
pub fn lookup_word(trie: &LexiconTrie, word: &str) -> LookupResult {
    LookupResult {
        word: word.to_string(),
        found: trie.contains_word(word),
    }
}

/// Check whether `prefix` begins any stored word
#[must_use]
pub fn lookup_prefix(trie: &LexiconTrie, prefix: &str) -> PrefixResult {
    PrefixResult {
        prefix: prefix.to_string(),
        found: trie.contains_prefix(prefix),
        is_word: trie.contains_word(prefix),
    }
}

/// List every stored word in alphabetical order
#[must_use]
pub fn list_words(trie: &LexiconTrie) -> WordListing {
    WordListing {
        words: trie.words().collect(),
        total: trie.word_count(),
    }
}
