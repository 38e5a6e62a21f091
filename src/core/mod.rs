//! Core trie types
//!
//! The lexicon's data structure with zero external dependencies: the node tree and
//! the trie that owns it. The search algorithms that walk the tree live in
//! [`crate::search`].

mod node;
mod trie;

pub(crate) use node::fold_letter;
pub use node::Node;
pub use trie::{LexiconTrie, Words};
