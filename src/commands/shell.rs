//! Interactive shell
//!
//! Line-based loop that drives the lexicon directly: add and remove words, run
//! membership, wildcard, and suggestion queries, and list the dictionary.

use crate::commands::{list_words, lookup_prefix, lookup_word, match_words, suggest_words};
use crate::core::LexiconTrie;
use crate::output::{
    print_match_result, print_prefix_result, print_suggest_result, print_word_listing,
    print_word_lookup,
};
use std::io::{self, Write};

const HELP: &str = "\
Commands:
  add <word>              add a word to the dictionary
  remove <word>           remove a word from the dictionary
  lookup <word>           is the word stored?
  prefix <prefix>         does any stored word start with the prefix?
  match <pattern>         wildcard search (_ one char, ? zero or one, * any run)
  suggest <word> [dist]   words within <dist> mismatches (default 1)
  words                   list the dictionary alphabetically
  count                   number of stored words
  help                    show this help
  quit                    exit the shell";

/// Run the interactive shell over `trie`
///
/// # Errors
///
/// Returns an error when reading user input fails.
pub fn run_shell(trie: &mut LexiconTrie) -> Result<(), String> {
    println!(
        "Lexicon shell: {} words loaded. Type 'help' for commands.",
        trie.word_count()
    );

    loop {
        let Some(line) = get_user_input("lexicon>")? else {
            // stdin closed
            println!();
            return Ok(());
        };
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let arg = parts.next();

        match (command, arg) {
            ("quit" | "exit" | "q", _) => {
                println!("Bye!");
                return Ok(());
            }
            ("help" | "?", _) => println!("{HELP}"),
            ("count", _) => println!("{} words", trie.word_count()),
            ("words", _) => print_word_listing(&list_words(trie)),
            ("add", Some(word)) => {
                if trie.insert(word) {
                    println!("Added '{word}' ({} words)", trie.word_count());
                } else {
                    println!("'{word}' is already stored");
                }
            }
            ("remove", Some(word)) => {
                if trie.remove(word) {
                    println!("Removed '{word}' ({} words)", trie.word_count());
                } else {
                    println!("'{word}' is not stored");
                }
            }
            ("lookup", Some(word)) => print_word_lookup(&lookup_word(trie, word)),
            ("prefix", Some(prefix)) => print_prefix_result(&lookup_prefix(trie, prefix)),
            ("match", Some(pattern)) => print_match_result(&match_words(trie, pattern)),
            ("suggest", Some(word)) => {
                let distance = parts.next().and_then(|d| d.parse().ok()).unwrap_or(1);
                print_suggest_result(&suggest_words(trie, word, distance));
            }
            ("add" | "remove" | "lookup" | "prefix" | "match" | "suggest", None) => {
                println!("'{command}' needs an argument — try 'help'");
            }
            _ => println!("Unknown command '{command}' — try 'help'"),
        }
    }
}

/// Get user input with a prompt; `None` once stdin is exhausted
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt} ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if bytes == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
