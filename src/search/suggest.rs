//! Fuzzy-suggestion search
//!
//! Finds stored words within a bounded number of per-position mismatches of a
//! target — a Hamming-style distance restricted to words of the same length.
//! Insertions and deletions are deliberately not modeled; this is not Levenshtein
//! distance and must not grow into it.

use rustc_hash::FxHashSet;

use crate::core::{LexiconTrie, Node, fold_letter};

impl LexiconTrie {
    /// Every stored word of `target`'s length whose per-position mismatch count
    /// against `target` is at most `max_distance`
    ///
    /// Comparison is case-insensitive. Words of a different length are excluded
    /// entirely, whatever the budget. A negative `max_distance` yields an empty
    /// set, as does an empty `target` (the root is never a word).
    ///
    /// # Examples
    /// ```
    /// use lexicon::core::LexiconTrie;
    ///
    /// let mut trie = LexiconTrie::new();
    /// trie.insert("cat");
    /// trie.insert("cow");
    /// trie.insert("car");
    /// trie.insert("dog");
    ///
    /// let close = trie.suggest("caw", 1);
    /// assert!(close.contains("cat")); // one mismatch: t
    /// assert!(close.contains("cow")); // one mismatch: o
    /// assert!(close.contains("car")); // one mismatch: r
    /// assert!(!close.contains("dog")); // three mismatches
    /// ```
    #[must_use]
    pub fn suggest(&self, target: &str, max_distance: i32) -> FxHashSet<String> {
        let mut suggestions = FxHashSet::default();
        if max_distance < 0 {
            return suggestions;
        }

        let target: Vec<char> = target.chars().collect();
        if target.is_empty() {
            return suggestions;
        }

        collect_suggestions(
            self.root(),
            &target,
            max_distance,
            &mut String::new(),
            &mut suggestions,
        );
        suggestions
    }
}

/// Recursive descent over (node, remaining target, remaining budget). Matching
/// letters keep the budget; mismatches spend one from it. Branches whose budget
/// goes negative are pruned.
fn collect_suggestions(
    node: &Node,
    target: &[char],
    budget: i32,
    word: &mut String,
    suggestions: &mut FxHashSet<String>,
) {
    if budget < 0 {
        return;
    }

    let Some((&next, rest)) = target.split_first() else {
        if node.is_word() {
            suggestions.insert(word.clone());
        }
        return;
    };

    for child in node.children() {
        let remaining = if fold_letter(child.letter()) == fold_letter(next) {
            budget
        } else {
            budget - 1
        };
        word.push(child.letter());
        collect_suggestions(child, rest, remaining, word, suggestions);
        word.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie_of(words: &[&str]) -> LexiconTrie {
        let mut trie = LexiconTrie::new();
        for word in words {
            trie.insert(word);
        }
        trie
    }

    fn sorted(suggestions: &FxHashSet<String>) -> Vec<&str> {
        let mut result: Vec<&str> = suggestions.iter().map(String::as_str).collect();
        result.sort_unstable();
        result
    }

    #[test]
    fn zero_distance_finds_only_the_word_itself() {
        let trie = trie_of(&["cat", "cot"]);
        assert_eq!(sorted(&trie.suggest("cat", 0)), vec!["cat"]);
        assert!(trie.suggest("cut", 0).is_empty());
    }

    #[test]
    fn one_substitution_neighbors() {
        let trie = trie_of(&["cat", "cow", "car", "dog"]);
        assert_eq!(sorted(&trie.suggest("caw", 1)), vec!["car", "cat", "cow"]);
        // "car" and "cat" sit at distance 2 from "cow", so only the exact word
        // survives a budget of 1
        assert_eq!(sorted(&trie.suggest("cow", 1)), vec!["cow"]);
    }

    #[test]
    fn two_substitution_neighbors() {
        let trie = trie_of(&["cat", "cow", "car", "dim"]);
        assert_eq!(
            sorted(&trie.suggest("cow", 2)),
            vec!["car", "cat", "cow"]
        );
    }

    #[test]
    fn length_mismatch_excluded_regardless_of_budget() {
        let trie = trie_of(&["cat", "cart", "ca"]);
        assert_eq!(sorted(&trie.suggest("cat", 10)), vec!["cat"]);
    }

    #[test]
    fn budget_spends_per_mismatched_position() {
        let trie = trie_of(&["dog"]);
        assert!(trie.suggest("cat", 2).is_empty());
        assert_eq!(sorted(&trie.suggest("cat", 3)), vec!["dog"]);
    }

    #[test]
    fn comparison_is_case_insensitive() {
        let trie = trie_of(&["Cat"]);
        assert_eq!(sorted(&trie.suggest("CAT", 0)), vec!["Cat"]);
        assert_eq!(sorted(&trie.suggest("bAt", 1)), vec!["Cat"]);
    }

    #[test]
    fn negative_distance_yields_empty_set() {
        let trie = trie_of(&["cat"]);
        assert!(trie.suggest("cat", -1).is_empty());
    }

    #[test]
    fn empty_target_yields_empty_set() {
        let trie = trie_of(&["cat"]);
        assert!(trie.suggest("", 5).is_empty());
    }

    #[test]
    fn suggestions_against_empty_trie() {
        let trie = LexiconTrie::new();
        assert!(trie.suggest("cat", 3).is_empty());
    }
}
