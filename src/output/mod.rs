//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_match_result, print_prefix_result, print_suggest_result, print_word_listing,
    print_word_lookup,
};
