//! Reading time estimation.
//!
//! Baseline is 275 words per minute. Text denser than five characters per
//! word adds 30 ms per extra character, and each `.`, `!` or `?` adds a
//! 200 ms pause. The total is rounded to whole seconds.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::markdown;
use crate::text;

const WORDS_PER_MINUTE: f64 = 275.0;
const MS_PER_MINUTE: f64 = 60.0 * 1000.0;
const BASELINE_CHARS_PER_WORD: usize = 5;
const MS_PER_EXCESS_CHAR: f64 = 30.0;
const MS_PER_PUNCTUATION: f64 = 200.0;

/// Estimated reading duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReadingTimeResult {
    /// Whole minutes.
    pub minutes: u64,
    /// Remaining seconds, `0..=59`.
    pub seconds: u64,
    /// Display string: `"2m 5s"`, or `"45s"` under a minute.
    pub text: String,
}

impl ReadingTimeResult {
    /// Split a whole number of seconds into minutes and seconds.
    pub fn from_seconds(total_seconds: u64) -> Self {
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;
        let text = if minutes > 0 {
            format!("{minutes}m {seconds}s")
        } else {
            format!("{seconds}s")
        };
        Self {
            minutes,
            seconds,
            text,
        }
    }

    /// Duration in whole seconds.
    pub const fn total_seconds(&self) -> u64 {
        self.minutes * 60 + self.seconds
    }
}

impl std::fmt::Display for ReadingTimeResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Reading time together with the counts behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadingTimeReport {
    /// Whole minutes.
    pub minutes: u64,
    /// Remaining seconds, `0..=59`.
    pub seconds: u64,
    /// Display string.
    pub text: String,
    /// Words counted (at least 1, see [`ReadingTimeEstimator::report`]).
    pub words: usize,
    /// Characters in the untrimmed input.
    pub characters: usize,
    /// Sentence-ending punctuation marks.
    pub punctuation: usize,
    /// Unrounded estimate in milliseconds.
    pub total_ms: f64,
}

impl ReadingTimeReport {
    /// The duration without counts.
    pub fn result(&self) -> ReadingTimeResult {
        ReadingTimeResult {
            minutes: self.minutes,
            seconds: self.seconds,
            text: self.text.clone(),
        }
    }
}

/// Stateless reading time estimator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadingTimeEstimator;

impl ReadingTimeEstimator {
    /// Estimated reading time for `text`.
    pub fn estimate(&self, text: &str) -> ReadingTimeResult {
        self.report(text).result()
    }

    /// Estimated reading time plus the counts used to compute it.
    ///
    /// Empty or whitespace-only text counts as one word, matching how the
    /// editor has always split text. The extra word is worth about 218 ms,
    /// so empty input still rounds to `0s`.
    ///
    /// Characters are Unicode scalar values, not UTF-16 code units: an
    /// emoji outside the Basic Multilingual Plane counts once.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn report(&self, text: &str) -> ReadingTimeReport {
        let words = text::split_words(text).len().max(1);
        let characters = text.chars().count();
        let punctuation = text::count_terminators(text);

        let word_ms = words as f64 / WORDS_PER_MINUTE * MS_PER_MINUTE;
        let excess_chars = characters.saturating_sub(words * BASELINE_CHARS_PER_WORD);
        let char_adjustment_ms = excess_chars as f64 * MS_PER_EXCESS_CHAR;
        let punctuation_ms = punctuation as f64 * MS_PER_PUNCTUATION;
        let total_ms = word_ms + char_adjustment_ms + punctuation_ms;

        let total_seconds = (total_ms / 1000.0).round() as u64;
        let ReadingTimeResult {
            minutes,
            seconds,
            text: display,
        } = ReadingTimeResult::from_seconds(total_seconds);

        tracing::debug!(words, characters, punctuation, total_ms, "estimated reading time");

        ReadingTimeReport {
            minutes,
            seconds,
            text: display,
            words,
            characters,
            punctuation,
            total_ms,
        }
    }
}

/// Estimated reading time for `content`.
pub fn calculate_reading_time(content: &str) -> ReadingTimeResult {
    ReadingTimeEstimator.estimate(content)
}

/// Estimate reading time, optionally stripping markdown first.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn check_reading_time(text: &str, strip_md: bool) -> ReadingTimeReport {
    if strip_md {
        ReadingTimeEstimator.report(&markdown::strip_to_prose(text))
    } else {
        ReadingTimeEstimator.report(text)
    }
}
