//! Combined text metrics for editors that refresh everything per keystroke.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::markdown;
use crate::readability::{ReadabilityAnalyzer, ReadabilityReport, check_readability};
use crate::reading_time::{ReadingTimeEstimator, ReadingTimeReport};

/// Readability and reading time for the same text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TextMetrics {
    /// Grade level report.
    pub readability: ReadabilityReport,
    /// Reading time report.
    pub reading_time: ReadingTimeReport,
}

/// Run both metrics over `text`.
///
/// Markdown is stripped once and both metrics see the same prose.
#[tracing::instrument(skip(analyzer, text), fields(text_len = text.len()))]
pub fn analyze_text(
    analyzer: &ReadabilityAnalyzer,
    text: &str,
    strip_md: bool,
    max_grade: Option<u32>,
) -> TextMetrics {
    let stripped;
    let prose = if strip_md {
        stripped = markdown::strip_to_prose(text);
        stripped.as_str()
    } else {
        text
    };

    TextMetrics {
        readability: check_readability(analyzer, prose, false, max_grade),
        reading_time: ReadingTimeEstimator.report(prose),
    }
}
