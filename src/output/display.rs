//! Display functions for command results

use super::formatters::{count_label, mismatch_markers};
use crate::commands::{LookupResult, MatchResult, PrefixResult, SuggestResult, WordListing};
use colored::Colorize;

/// Print the result of a word-membership query
pub fn print_word_lookup(result: &LookupResult) {
    if result.found {
        println!("'{}' {}", result.word.bright_yellow(), "is a word".green());
    } else {
        println!("'{}' {}", result.word.bright_yellow(), "is not a word".red());
    }
}

/// Print the result of a prefix-membership query
pub fn print_prefix_result(result: &PrefixResult) {
    if !result.found {
        println!(
            "'{}' {}",
            result.prefix.bright_yellow(),
            "begins no stored word".red()
        );
    } else if result.is_word {
        println!(
            "'{}' {}",
            result.prefix.bright_yellow(),
            "is a prefix (and a stored word itself)".green()
        );
    } else {
        println!("'{}' {}", result.prefix.bright_yellow(), "is a prefix".green());
    }
}

/// Print the whole dictionary alphabetically
pub fn print_word_listing(listing: &WordListing) {
    for word in &listing.words {
        println!("{word}");
    }
    println!("{}", count_label(listing.total, "word").bright_black());
}

/// Print wildcard matches
pub fn print_match_result(result: &MatchResult) {
    println!(
        "{} '{}':",
        "Matches for".bright_cyan(),
        result.pattern.bright_yellow()
    );
    if result.matches.is_empty() {
        println!("  {}", "(none)".bright_black());
        return;
    }
    for word in &result.matches {
        println!("  {word}");
    }
    println!("{}", count_label(result.matches.len(), "result").bright_black());
}

/// Print fuzzy suggestions with their mismatch positions marked
pub fn print_suggest_result(result: &SuggestResult) {
    println!(
        "{} '{}' (distance ≤ {}):",
        "Suggestions for".bright_cyan(),
        result.target.bright_yellow(),
        result.max_distance
    );
    if result.suggestions.is_empty() {
        println!("  {}", "(none)".bright_black());
        return;
    }
    for word in &result.suggestions {
        let markers = mismatch_markers(&result.target, word);
        if markers.trim().is_empty() {
            println!("  {word}");
        } else {
            println!("  {word}");
            println!("  {}", markers.bright_black());
        }
    }
}
