//! Static word tables used by the readability scorer.
//!
//! Kept as data so the lists can change without touching the scoring code.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Everyday words that the syllable heuristic counts as three or more
/// syllables but that readers do not find difficult.
///
/// Words in this set are never counted as complex.
pub static COMMON_MULTISYLLABLE_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "about",
        "actually",
        "already",
        "another",
        "anything",
        "area",
        "audience",
        "average",
        "beautiful",
        "business",
        "camera",
        "company",
        "different",
        "easily",
        "energy",
        "especially",
        "every",
        "everybody",
        "everyone",
        "everything",
        "example",
        "family",
        "favorite",
        "general",
        "however",
        "important",
        "interest",
        "interesting",
        "media",
        "memory",
        "several",
        "something",
        "together",
        "tomorrow",
        "usually",
        "video",
        "yesterday",
    ]
    .into_iter()
    .collect()
});

/// Suffixes removed before counting syllables for the complexity test.
///
/// Ordered longest first; only the first match is removed.
pub const COMPLEXITY_SUFFIXES: &[&str] = &["ing", "ed", "ly", "es", "s"];

/// Prefixes removed before counting syllables for the complexity test.
///
/// Only the first match is removed.
pub const COMPLEXITY_PREFIXES: &[&str] = &["un", "in", "re"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_words_are_lowercase() {
        for word in COMMON_MULTISYLLABLE_WORDS.iter() {
            assert_eq!(*word, word.to_lowercase(), "{word} should be lowercase");
        }
    }

    #[test]
    fn named_exceptions_present() {
        for word in ["business", "important", "different"] {
            assert!(COMMON_MULTISYLLABLE_WORDS.contains(word), "missing {word}");
        }
    }

    #[test]
    fn suffixes_longest_first() {
        let lengths: Vec<usize> = COMPLEXITY_SUFFIXES.iter().map(|s| s.len()).collect();
        let mut sorted = lengths.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(lengths, sorted);
    }
}
