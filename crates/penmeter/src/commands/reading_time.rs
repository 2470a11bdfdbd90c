//! Reading-time command.

use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use penmeter_core::reading_time;

use super::{is_markdown, read_input};

/// Arguments for the `reading-time` subcommand.
#[derive(Args, Debug)]
pub struct ReadingTimeArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,
}

/// Estimate how long a file takes to read.
#[instrument(name = "cmd_reading_time", skip_all, fields(file = %args.file))]
pub fn cmd_reading_time(
    args: ReadingTimeArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing reading-time command");

    let content = read_input(&args.file, max_input_bytes)?;
    let report = reading_time::check_reading_time(&content, is_markdown(&args.file));

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.text);
    }

    Ok(())
}
