//! Text tokenization shared by the readability and reading-time modules.
//!
//! Plain punctuation and whitespace rules. Scores are calibrated against
//! them, so changing a rule changes every grade.

/// Returns `true` for the characters that end a sentence (`.`, `!`, `?`).
pub const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Split text into words on runs of whitespace.
///
/// Punctuation stays attached to its word: `"Hello, world."` yields
/// `["Hello,", "world."]`.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Split text into sentence fragments on runs of `.`, `!` and `?`.
///
/// Fragments are trimmed; empty and whitespace-only fragments are dropped,
/// so the trailing space in `"Hello world. "` does not add a sentence.
/// Text without any terminator is a single fragment.
pub fn split_sentence_fragments(text: &str) -> Vec<&str> {
    text.split(is_sentence_terminator)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// Count every `.`, `!` and `?` in the text (runs count each character).
pub fn count_terminators(text: &str) -> usize {
    text.chars().filter(|&c| is_sentence_terminator(c)).count()
}
