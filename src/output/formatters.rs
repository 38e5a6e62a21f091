//! Formatting utilities for terminal output

/// Mark the mismatched positions of `candidate` against `target` with `^`
///
/// Comparison is per position and case-insensitive, matching the suggestion
/// search. Returns an empty string when the lengths differ, since positional
/// markers would be meaningless.
#[must_use]
pub fn mismatch_markers(target: &str, candidate: &str) -> String {
    let target: Vec<char> = target.chars().collect();
    let candidate: Vec<char> = candidate.chars().collect();
    if target.len() != candidate.len() {
        return String::new();
    }

    target
        .iter()
        .zip(&candidate)
        .map(|(t, c)| {
            if t.to_ascii_lowercase() == c.to_ascii_lowercase() {
                ' '
            } else {
                '^'
            }
        })
        .collect()
}

/// Format a count with a pluralized noun, e.g. "1 word" / "3 words"
#[must_use]
pub fn count_label(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_flag_mismatched_positions() {
        assert_eq!(mismatch_markers("cow", "car"), " ^^");
        assert_eq!(mismatch_markers("cow", "cow"), "   ");
        assert_eq!(mismatch_markers("cat", "dog"), "^^^");
    }

    #[test]
    fn markers_fold_case() {
        assert_eq!(mismatch_markers("Cat", "caT"), "   ");
    }

    #[test]
    fn markers_empty_on_length_mismatch() {
        assert_eq!(mismatch_markers("cat", "cart"), "");
    }

    #[test]
    fn count_label_pluralizes() {
        assert_eq!(count_label(0, "word"), "0 words");
        assert_eq!(count_label(1, "word"), "1 word");
        assert_eq!(count_label(2, "suggestion"), "2 suggestions");
    }
}
