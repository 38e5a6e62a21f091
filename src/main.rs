//! Lexicon - CLI
//!
//! Dictionary queries over a prefix tree: membership, prefixes, wildcard matching,
//! and fuzzy suggestions, against the embedded word list or a file.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lexicon::{
    commands::{list_words, lookup_prefix, lookup_word, match_words, run_shell, suggest_words},
    core::LexiconTrie,
    output::{
        print_match_result, print_prefix_result, print_suggest_result, print_word_listing,
        print_word_lookup,
    },
    wordlists::{WORDS, loader},
};

#[derive(Parser)]
#[command(
    name = "lexicon",
    about = "Word dictionary with wildcard and fuzzy-suggestion search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive shell (default)
    Shell,

    /// List every stored word alphabetically
    Words,

    /// Check whether a word is in the dictionary
    Lookup {
        /// The word to look up
        word: String,
    },

    /// Check whether a prefix begins any stored word
    Prefix {
        /// The prefix to look up
        prefix: String,
    },

    /// Find words matching a wildcard pattern (_ one char, ? zero or one, * any run)
    Match {
        /// The pattern to match
        pattern: String,
    },

    /// Find words within a bounded number of per-position mismatches
    Suggest {
        /// The target word (only same-length words are considered)
        target: String,

        /// Maximum number of mismatched positions
        #[arg(short = 'd', long, default_value = "1")]
        distance: i32,
    },
}

/// Build the dictionary selected by the -w flag
fn load_lexicon(wordlist_mode: &str) -> Result<LexiconTrie> {
    let mut trie = LexiconTrie::new();

    match wordlist_mode {
        "embedded" => {
            loader::populate_from_slice(&mut trie, WORDS);
        }
        path => {
            loader::load_into(&mut trie, path)
                .with_context(|| format!("Failed to load wordlist from '{path}'"))?;
        }
    }

    Ok(trie)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut trie = load_lexicon(&cli.wordlist)?;

    // Default to the shell if no command given
    let command = cli.command.unwrap_or(Commands::Shell);

    match command {
        Commands::Shell => run_shell(&mut trie).map_err(|e| anyhow::anyhow!(e))?,
        Commands::Words => print_word_listing(&list_words(&trie)),
        Commands::Lookup { word } => print_word_lookup(&lookup_word(&trie, &word)),
        Commands::Prefix { prefix } => print_prefix_result(&lookup_prefix(&trie, &prefix)),
        Commands::Match { pattern } => print_match_result(&match_words(&trie, &pattern)),
        Commands::Suggest { target, distance } => {
            print_suggest_result(&suggest_words(&trie, &target, distance));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_lexicon_loads() {
        let trie = load_lexicon("embedded").unwrap();
        assert_eq!(trie.word_count(), lexicon::wordlists::WORDS_COUNT);
        assert!(trie.contains_word("cat"));
    }

    #[test]
    fn missing_wordlist_file_is_an_error() {
        assert!(load_lexicon("no/such/wordlist.txt").is_err());
    }
}
