//! Wildcard-match and fuzzy-suggestion commands
//!
//! Runs the trie's search algorithms and sorts their set results for display.

use crate::core::LexiconTrie;

/// Result of a wildcard-pattern search
pub struct MatchResult {
    pub pattern: String,
    /// Matches in ascending alphabetical order
    pub matches: Vec<String>,
}

/// Result of a fuzzy-suggestion search
pub struct SuggestResult {
    pub target: String,
    pub max_distance: i32,
    /// Suggestions in ascending alphabetical order
    pub suggestions: Vec<String>,
}

/// Find every stored word matching the wildcard `pattern`
#[must_use]
pub fn match_words(trie: &LexiconTrie, pattern: &str) -> MatchResult {
    let mut matches: Vec<String> = trie.match_pattern(pattern).into_iter().collect();
    matches.sort_unstable();

    MatchResult {
        pattern: pattern.to_string(),
        matches,
    }
}

/// Find every stored word within `max_distance` mismatches of `target`
#[must_use]
pub fn suggest_words(trie: &LexiconTrie, target: &str, max_distance: i32) -> SuggestResult {
    let mut suggestions: Vec<String> = trie.suggest(target, max_distance).into_iter().collect();
    suggestions.sort_unstable();

    SuggestResult {
        target: target.to_string(),
        max_distance,
        suggestions,
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

    #[test]
    fn match_words_sorts_results() {
        let trie = trie_of(&["cat", "bat", "bad"]);
        let result = match_words(&trie, "*");
        assert_eq!(result.matches, vec!["bad", "bat", "cat"]);
        assert_eq!(result.pattern, "*");
    }

    #[test]
    fn suggest_words_sorts_results() {
        let trie = trie_of(&["cat", "cow", "car"]);
        let result = suggest_words(&trie, "caw", 1);
        assert_eq!(result.suggestions, vec!["car", "cat", "cow"]);
        assert_eq!(result.max_distance, 1);
    }

    #[test]
    fn empty_results_are_empty_vectors() {
        let trie = LexiconTrie::new();
        assert!(match_words(&trie, "*").matches.is_empty());
        assert!(suggest_words(&trie, "cat", 3).suggestions.is_empty());
    }
}
