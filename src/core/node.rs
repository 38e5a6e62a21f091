//! Trie node representation
//!
//! A node carries one letter, a flag marking whether the path from the root spells a
//! complete word, and its children kept sorted by case-folded letter. Each node owns
//! its children exclusively, so the tree has no sharing and no cycles.

/// Case-folding used for every letter comparison in the trie
///
/// Letters are stored with their original case but matched, ordered, and
/// deduplicated case-insensitively.
#[inline]
pub(crate) fn fold_letter(c: char) -> char {
    c.to_ascii_lowercase()
}

/// A single node of the lexicon trie
///
/// Children are kept in ascending case-folded letter order, and no two siblings may
/// share a folded letter. Both invariants are maintained by [`Node::add_child`] and
/// [`Node::child_or_insert`], which are the only ways to grow a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    letter: char,
    is_word: bool,
    children: Vec<Node>,
}

impl Node {
    /// Create a node with no children
    #[must_use]
    pub const fn new(letter: char, is_word: bool) -> Self {
        Self {
            letter,
            is_word,
            children: Vec::new(),
        }
    }

    /// The letter this node represents, with its original case
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> char {
        self.letter
    }

    /// Whether the path from the root through this node spells a stored word
    #[inline]
    #[must_use]
    pub const fn is_word(&self) -> bool {
        self.is_word
    }

    /// Set or clear the word flag
    #[inline]
    pub const fn set_word(&mut self, is_word: bool) {
        self.is_word = is_word;
    }

    /// Ordered view of the children (ascending by case-folded letter)
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Whether this node has any children
    #[inline]
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Position of the child matching `letter`, or the insertion point keeping the
    /// children sorted.
    fn position(&self, letter: char) -> Result<usize, usize> {
        self.children
            .binary_search_by_key(&fold_letter(letter), |child| fold_letter(child.letter))
    }

    /// Insert `node` at the position preserving case-folded order
    ///
    /// Returns `false` without modification when a child with the same folded letter
    /// is already present.
    pub fn add_child(&mut self, node: Node) -> bool {
        match self.position(node.letter) {
            Ok(_) => false,
            Err(index) => {
                self.children.insert(index, node);
                true
            }
        }
    }

    /// Remove the unique child matching `letter` case-insensitively; no-op if absent
    pub fn remove_child(&mut self, letter: char) {
        if let Ok(index) = self.position(letter) {
            self.children.remove(index);
        }
    }

    /// Look up the child matching `letter` case-insensitively
    #[must_use]
    pub fn child(&self, letter: char) -> Option<&Node> {
        self.position(letter).ok().map(|index| &self.children[index])
    }

    /// Mutable variant of [`Node::child`]
    pub fn child_mut(&mut self, letter: char) -> Option<&mut Node> {
        self.position(letter)
            .ok()
            .map(|index| &mut self.children[index])
    }

    /// Look up the child for `letter`, creating a non-word node for it if absent
    pub fn child_or_insert(&mut self, letter: char) -> &mut Node {
        let index = match self.position(letter) {
            Ok(index) => index,
            Err(index) => {
                self.children.insert(index, Node::new(letter, false));
                index
            }
        };
        &mut self.children[index]
    }
}
