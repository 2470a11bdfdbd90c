//! Core library for penmeter.
//!
//! Text metrics for creator content: a readability grade with a
//! qualitative level, and a reading-time estimate. Both are pure functions
//! over a string, cheap enough to call on every keystroke.
//!
//! # Modules
//!
//! - [`readability`] - Grade level and level label
//! - [`reading_time`] - Reading duration estimate
//! - [`metrics`] - Both metrics in one call
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use penmeter_core::{ReadabilityLevel, assess_readability, calculate_reading_time};
//!
//! let readability = assess_readability("The cat sat.");
//! assert_eq!(readability.grade, 1);
//! assert_eq!(readability.level, ReadabilityLevel::VeryEasy);
//!
//! let time = calculate_reading_time("Hello world.");
//! assert_eq!(time.text, "1s");
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod markdown;
pub mod metrics;
pub mod readability;
pub mod reading_time;
pub mod text;
pub mod word_lists;

pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use error::{ConfigError, ConfigResult};
pub use metrics::{TextMetrics, analyze_text};
pub use readability::{
    ReadabilityAnalyzer, ReadabilityLevel, ReadabilityReport, ReadabilityResult,
    assess_readability,
};
pub use reading_time::{
    ReadingTimeEstimator, ReadingTimeReport, ReadingTimeResult, calculate_reading_time,
};
