//! Search algorithms over the lexicon trie
//!
//! Two recursive walks implemented as additional `impl` blocks on
//! [`LexiconTrie`](crate::core::LexiconTrie): the wildcard-pattern matcher and the
//! bounded-mismatch fuzzy-suggestion search. Both produce deduplicated sets of
//! stored words.

mod suggest;
mod wildcard;
