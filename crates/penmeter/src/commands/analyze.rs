//! Analyze command — readability and reading time together.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use penmeter_core::metrics;
use penmeter_core::readability::ReadabilityAnalyzer;

use super::readability::paint_level;
use super::{is_markdown, read_input};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Maximum acceptable grade level.
    #[arg(long)]
    pub max_grade: Option<u32>,
}

/// Report readability and reading time for a file.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    analyzer: &ReadabilityAnalyzer,
    config_max_grade: Option<u32>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, max_grade = ?args.max_grade, "executing analyze command");

    let content = read_input(&args.file, max_input_bytes)?;
    let max_grade = args.max_grade.or(config_max_grade);
    let report = metrics::analyze_text(analyzer, &content, is_markdown(&args.file), max_grade);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let r = &report.readability;
    let t = &report.reading_time;

    println!("{}", args.file.bold());
    println!(
        "\n  {} Grade {} ({}), {} sentences, {} words",
        "Readability:".cyan(),
        r.grade,
        paint_level(r.level),
        r.sentences,
        r.words,
    );
    println!(
        "    {} complex words ({:.1}%), {} long and {} very long sentences",
        r.complex_words, r.percent_complex_words, r.long_sentences, r.very_long_sentences,
    );
    println!("\n  {} {}", "Reading time:".cyan(), t.text);

    if r.over_max {
        bail!(
            "{} scores grade {} (max: {}). Shorten sentences or use simpler words.",
            args.file,
            r.grade,
            r.max_grade.unwrap_or(0),
        );
    }

    Ok(())
}
