//! The lexicon trie
//!
//! Owns the node tree behind a sentinel root and tracks the stored word count.
//! Insertion creates nodes on demand; removal clears the terminal word flag and
//! prunes nodes that end up childless and non-word, so the tree never carries dead
//! branches. All matching is case-insensitive while letters keep the case they were
//! first inserted with.

use super::node::Node;

/// Sentinel letter carried by the root; the root itself is never a word.
const ROOT_LETTER: char = ' ';

/// Word dictionary backed by a prefix tree
///
/// # Examples
/// ```
/// use lexicon::core::LexiconTrie;
///
/// let mut trie = LexiconTrie::new();
/// assert!(trie.insert("cat"));
/// assert!(trie.insert("car"));
/// assert!(!trie.insert("cat")); // already stored
///
/// assert!(trie.contains_word("cat"));
/// assert!(trie.contains_prefix("ca"));
/// assert_eq!(trie.word_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct LexiconTrie {
    root: Node,
    word_count: usize,
}

impl Default for LexiconTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconTrie {
    /// Create an empty lexicon
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: Node::new(ROOT_LETTER, false),
            word_count: 0,
        }
    }

    /// Number of words currently stored, in O(1)
    #[inline]
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    /// Whether the lexicon stores no words
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    pub(crate) const fn root(&self) -> &Node {
        &self.root
    }

    /// Add `word` to the lexicon
    ///
    /// Walks from the root creating a child per character wherever one is missing,
    /// then marks the terminal node as a word. Letters keep the case they are given
    /// here, but matching is case-insensitive, so `"Cat"` and `"cat"` occupy the
    /// same path.
    ///
    /// Returns `false` without modification when `word` is already stored (or is
    /// empty — the root is never a word).
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() || self.contains_word(word) {
            return false;
        }

        let mut current = &mut self.root;
        for c in word.chars() {
            current = current.child_or_insert(c);
        }
        current.set_word(true);
        self.word_count += 1;
        true
    }

    /// Remove `word` from the lexicon
    ///
    /// Clears the terminal word flag, then detaches every node on the path that is
    /// left childless and non-word, walking back toward the root. Returns `false`
    /// when `word` is not currently stored.
    pub fn remove(&mut self, word: &str) -> bool {
        if !self.contains_word(word) {
            return false;
        }

        let path: Vec<char> = word.chars().collect();
        Self::remove_below(&mut self.root, &path);
        self.word_count -= 1;
        true
    }

    /// Clear the word flag at the end of `path` and prune on the way back up.
    /// Containment has already been verified, so the path exists.
    fn remove_below(node: &mut Node, path: &[char]) {
        let Some((&first, rest)) = path.split_first() else {
            return;
        };

        let prune = match node.child_mut(first) {
            Some(child) => {
                if rest.is_empty() {
                    child.set_word(false);
                } else {
                    Self::remove_below(child, rest);
                }
                !child.has_children() && !child.is_word()
            }
            None => false,
        };

        if prune {
            node.remove_child(first);
        }
    }

    /// Whether `word` is stored as a complete word
    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        self.node_for(word).is_some_and(Node::is_word)
    }

    /// Whether `prefix` is a prefix of the stored content
    ///
    /// True whenever the path for `prefix` exists, including when that path is
    /// itself a complete word: every stored word is trivially a prefix of itself.
    #[must_use]
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.node_for(prefix).is_some()
    }

    /// Walk the path for `word`, returning its terminal node if the whole path
    /// exists. An empty `word` resolves to the root.
    fn node_for(&self, word: &str) -> Option<&Node> {
        let mut current = &self.root;
        for c in word.chars() {
            current = current.child(c)?;
        }
        Some(current)
    }

    /// Iterate over every stored word in ascending alphabetical order
    ///
    /// The iterator is lazy (a pre-order walk that descends as it is consumed) and
    /// restartable — calling `words()` again starts over. It stops as soon as
    /// [`LexiconTrie::word_count`] words have been produced.
    ///
    /// # Examples
    /// ```
    /// use lexicon::core::LexiconTrie;
    ///
    /// let mut trie = LexiconTrie::new();
    /// trie.insert("dog");
    /// trie.insert("cat");
    /// trie.insert("cart");
    ///
    /// let words: Vec<String> = trie.words().collect();
    /// assert_eq!(words, vec!["cart", "cat", "dog"]);
    /// ```
    #[must_use]
    pub fn words(&self) -> Words<'_> {
        Words {
            stack: vec![(&self.root, 0)],
            prefix: String::new(),
            remaining: self.word_count,
        }
    }
}

/// Lazy alphabetical iterator over the words of a [`LexiconTrie`]
///
/// Created by [`LexiconTrie::words`].
#[derive(Debug)]
pub struct Words<'a> {
    /// Depth-first walk state: each entry is a node plus the index of its next
    /// unvisited child.
    stack: Vec<(&'a Node, usize)>,
    /// Letters of the path currently on the stack (root excluded).
    prefix: String,
    /// Words left to produce; lets the walk stop early.
    remaining: usize,
}

impl<'a> Iterator for Words<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.remaining == 0 {
            return None;
        }

        loop {
            let (node, index) = self.stack.last_mut()?;
            // Copy the node reference out so the child outlives the stack borrow
            let node: &'a Node = *node;
            match node.children().get(*index) {
                Some(child) => {
                    *index += 1;
                    self.prefix.push(child.letter());
                    self.stack.push((child, 0));
                    if child.is_word() {
                        self.remaining -= 1;
                        return Some(self.prefix.clone());
                    }
                }
                None => {
                    self.stack.pop();
                    self.prefix.pop();
                }
            }
        }
    }
}
