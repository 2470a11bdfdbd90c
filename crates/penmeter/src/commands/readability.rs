//! Readability command — grade level and reading level.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::{OwoColorize, Stream};
use tracing::{debug, instrument};

use penmeter_core::readability::{self, ReadabilityAnalyzer, ReadabilityLevel};

use super::{is_markdown, read_input};

/// Arguments for the `readability` subcommand.
#[derive(Args, Debug)]
pub struct ReadabilityArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Maximum acceptable grade level.
    #[arg(long)]
    pub max_grade: Option<u32>,
}

/// Score readability of a file.
#[instrument(name = "cmd_readability", skip_all, fields(file = %args.file))]
pub fn cmd_readability(
    args: ReadabilityArgs,
    global_json: bool,
    analyzer: &ReadabilityAnalyzer,
    config_max_grade: Option<u32>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, max_grade = ?args.max_grade, "executing readability command");

    let content = read_input(&args.file, max_input_bytes)?;
    let max_grade = args.max_grade.or(config_max_grade);

    let report =
        readability::check_readability(analyzer, &content, is_markdown(&args.file), max_grade);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.over_max {
        let max = report.max_grade.unwrap_or(0);
        bail!(
            "{} scores grade {} (max: {max}). Shorten sentences or use simpler words.",
            args.file,
            report.grade,
        );
    } else if let Some(max) = report.max_grade {
        println!(
            "{} {} scores grade {} (max: {max})",
            "PASS:".green(),
            args.file,
            report.grade,
        );
    } else {
        println!("Grade {} ({})", report.grade, paint_level(report.level));
    }

    Ok(())
}

/// Color a level label from green (easy) to red (complex).
pub fn paint_level(level: ReadabilityLevel) -> String {
    let label = level.as_str();
    match level {
        ReadabilityLevel::VeryEasy | ReadabilityLevel::Easy => {
            label.if_supports_color(Stream::Stdout, |t| t.green()).to_string()
        }
        ReadabilityLevel::Good => label.if_supports_color(Stream::Stdout, |t| t.cyan()).to_string(),
        ReadabilityLevel::Moderate => {
            label.if_supports_color(Stream::Stdout, |t| t.yellow()).to_string()
        }
        ReadabilityLevel::Complex => label.if_supports_color(Stream::Stdout, |t| t.red()).to_string(),
    }
}
