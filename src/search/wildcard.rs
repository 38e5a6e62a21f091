//! Wildcard-pattern matching
//!
//! A small pattern language over the trie, distinct from real regular expressions:
//! - a literal character matches itself (case-insensitively, like all matching)
//! - `_` matches exactly one arbitrary character
//! - `?` matches zero or one arbitrary character
//! - `*` matches zero or more arbitrary characters
//!
//! The matcher explores every valid expansion by recursive descent over
//! (node, remaining pattern); a set deduplicates words reachable through more than
//! one expansion.

use rustc_hash::FxHashSet;

use crate::core::{LexiconTrie, Node};

impl LexiconTrie {
    /// Every stored word matching the wildcard `pattern`
    ///
    /// # Examples
    /// ```
    /// use lexicon::core::LexiconTrie;
    ///
    /// let mut trie = LexiconTrie::new();
    /// trie.insert("bat");
    /// trie.insert("bad");
    /// trie.insert("cat");
    ///
    /// let matches = trie.match_pattern("_at");
    /// assert!(matches.contains("bat"));
    /// assert!(matches.contains("cat"));
    /// assert_eq!(matches.len(), 2);
    /// ```
    #[must_use]
    pub fn match_pattern(&self, pattern: &str) -> FxHashSet<String> {
        let mut matches = FxHashSet::default();
        let pattern: Vec<char> = pattern.chars().collect();
        collect_matches(self.root(), &pattern, &mut String::new(), &mut matches);
        matches
    }
}

/// Recursive descent over (node, remaining pattern), accumulating the letters
/// walked so far in `word`. A branch accepts when the pattern is exhausted on a
/// word node.
fn collect_matches(
    node: &Node,
    pattern: &[char],
    word: &mut String,
    matches: &mut FxHashSet<String>,
) {
    let Some((&head, rest)) = pattern.split_first() else {
        if node.is_word() {
            matches.insert(word.clone());
        }
        return;
    };

    match head {
        '_' => {
            for child in node.children() {
                word.push(child.letter());
                collect_matches(child, rest, word, matches);
                word.pop();
            }
        }
        '*' => {
            for child in node.children() {
                word.push(child.letter());
                // The star consumes this character and stays pending
                collect_matches(child, pattern, word, matches);
                // The star consumes this character and is retired
                collect_matches(child, rest, word, matches);
                word.pop();
            }
            // The star consumes nothing; hoisted out of the loop so the
            // zero-length expansion is explored once per invocation
            collect_matches(node, rest, word, matches);
        }
        '?' => {
            for child in node.children() {
                word.push(child.letter());
                collect_matches(child, rest, word, matches);
                word.pop();
            }
            // The optional character is skipped; once per invocation
            collect_matches(node, rest, word, matches);
        }
        literal => {
            if let Some(child) = node.child(literal) {
                word.push(child.letter());
                collect_matches(child, rest, word, matches);
                word.pop();
            }
        }
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

    fn sorted(matches: &FxHashSet<String>) -> Vec<&str> {
        let mut result: Vec<&str> = matches.iter().map(String::as_str).collect();
        result.sort_unstable();
        result
    }

    #[test]
    fn literal_pattern_matches_exact_word() {
        let trie = trie_of(&["cat", "cart"]);
        assert_eq!(sorted(&trie.match_pattern("cat")), vec!["cat"]);
        assert!(trie.match_pattern("cow").is_empty());
    }

    #[test]
    fn literal_pattern_is_case_insensitive() {
        let trie = trie_of(&["cat"]);
        assert_eq!(sorted(&trie.match_pattern("CaT")), vec!["cat"]);
    }

    #[test]
    fn literal_prefix_alone_does_not_match() {
        // The pattern must be fully consumed on a word node
        let trie = trie_of(&["cart"]);
        assert!(trie.match_pattern("car").is_empty());
    }

    #[test]
    fn underscore_matches_exactly_one_character() {
        let trie = trie_of(&["bat", "bad", "cat", "at"]);
        assert_eq!(sorted(&trie.match_pattern("_at")), vec!["bat", "cat"]);
        assert!(trie.match_pattern("_").is_empty());
    }

    #[test]
    fn question_mark_matches_zero_or_one() {
        let trie = trie_of(&["bat", "bad", "ba"]);
        assert_eq!(sorted(&trie.match_pattern("ba?")), vec!["ba", "bad", "bat"]);
    }

    #[test]
    fn question_mark_without_short_word_stored() {
        let trie = trie_of(&["bat", "bad", "cat"]);
        assert_eq!(sorted(&trie.match_pattern("ba?")), vec!["bad", "bat"]);
    }

    #[test]
    fn star_alone_matches_everything() {
        let trie = trie_of(&["bat", "bad", "cat", "cart"]);
        let all: Vec<String> = trie.words().collect();
        let matched = trie.match_pattern("*");
        assert_eq!(sorted(&matched), all.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn star_matches_zero_characters() {
        let trie = trie_of(&["cat"]);
        assert_eq!(sorted(&trie.match_pattern("*cat")), vec!["cat"]);
        assert_eq!(sorted(&trie.match_pattern("cat*")), vec!["cat"]);
    }

    #[test]
    fn star_in_the_middle() {
        let trie = trie_of(&["cat", "cart", "count", "dog"]);
        assert_eq!(
            sorted(&trie.match_pattern("c*t")),
            vec!["cart", "cat", "count"]
        );
    }

    #[test]
    fn multiple_wildcards_deduplicate() {
        // "cat" is reachable through many expansions of "*a*"; the set keeps one
        let trie = trie_of(&["cat", "cart", "dog"]);
        assert_eq!(sorted(&trie.match_pattern("*a*")), vec!["cart", "cat"]);
    }

    #[test]
    fn empty_pattern_matches_nothing() {
        // The root is never a word
        let trie = trie_of(&["cat"]);
        assert!(trie.match_pattern("").is_empty());
    }

    #[test]
    fn empty_trie_matches_nothing() {
        let trie = LexiconTrie::new();
        assert!(trie.match_pattern("*").is_empty());
        assert!(trie.match_pattern("_").is_empty());
    }

    #[test]
    fn matches_preserve_stored_case() {
        let trie = trie_of(&["Cat"]);
        assert_eq!(sorted(&trie.match_pattern("c_t")), vec!["Cat"]);
    }
}
