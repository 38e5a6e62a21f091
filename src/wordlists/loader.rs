//! Word list loading
//!
//! Thin line-by-line loaders that feed words into a [`LexiconTrie`]. Insertion is
//! idempotent, so duplicate lines are harmless. Case and whitespace handling stay
//! here: lines are trimmed, blank lines skipped, and words otherwise stored as
//! written.

use crate::core::LexiconTrie;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file into `trie`, one word per line
///
/// Returns the trie's word count after loading. The only failure is the I/O error
/// when the file cannot be opened or read; in that case the trie is left exactly as
/// it was.
///
/// # Examples
/// ```no_run
/// use lexicon::core::LexiconTrie;
/// use lexicon::wordlists::loader::load_into;
///
/// let mut trie = LexiconTrie::new();
/// let total = load_into(&mut trie, "data/words.txt").unwrap();
/// println!("Dictionary holds {total} words");
/// ```
pub fn load_into<P: AsRef<Path>>(trie: &mut LexiconTrie, path: P) -> io::Result<usize> {
    let content = fs::read_to_string(path)?;

    for line in content.lines() {
        let word = line.trim();
        if !word.is_empty() {
            trie.insert(word);
        }
    }

    Ok(trie.word_count())
}

/// Insert every entry of `words` into `trie`, returning the resulting word count
pub fn populate_from_slice(trie: &mut LexiconTrie, words: &[&str]) -> usize {
    for &word in words {
        trie.insert(word);
    }
    trie.word_count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn populate_from_slice_counts_distinct_words() {
        let mut trie = LexiconTrie::new();
        let total = populate_from_slice(&mut trie, &["cat", "dog", "cat"]);

        assert_eq!(total, 2);
        assert!(trie.contains_word("cat"));
        assert!(trie.contains_word("dog"));
    }

    #[test]
    fn populate_from_embedded_list() {
        use crate::wordlists::{WORDS, WORDS_COUNT};

        let mut trie = LexiconTrie::new();
        let total = populate_from_slice(&mut trie, WORDS);
        assert_eq!(total, WORDS_COUNT);
    }

    #[test]
    fn load_into_reads_trimmed_lines() {
        let dir = std::env::temp_dir();
        let path = dir.join("lexicon_loader_test.txt");
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "cat").unwrap();
            writeln!(file, "  dog  ").unwrap();
            writeln!(file).unwrap();
            writeln!(file, "cat").unwrap();
        }

        let mut trie = LexiconTrie::new();
        let total = load_into(&mut trie, &path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(total, 2);
        assert!(trie.contains_word("dog"));
    }

    #[test]
    fn load_into_missing_file_leaves_trie_untouched() {
        let mut trie = LexiconTrie::new();
        trie.insert("cat");

        let result = load_into(&mut trie, "definitely/not/a/file.txt");

        assert!(result.is_err());
        assert_eq!(trie.word_count(), 1);
        assert!(trie.contains_word("cat"));
    }
}
