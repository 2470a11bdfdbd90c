//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;

pub mod analyze;
pub mod info;
pub mod readability;
pub mod reading_time;
#[cfg(feature = "mcp")]
pub mod serve;

/// Path argument meaning "read from stdin".
pub const STDIN_PATH: &str = "-";

/// Read a file (or stdin for `-`) and validate its size against the limit.
pub fn read_input(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    if path.as_str() == STDIN_PATH {
        return read_stdin(max_bytes);
    }

    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    read_limited(std::io::stdin().lock(), max_bytes, "stdin")
}

/// Read at most one byte past `max_bytes`, then decode.
///
/// The size check runs on raw bytes so a limit that splits a multi-byte
/// character still reports the input as too large.
fn read_limited<R: Read>(
    mut reader: R,
    max_bytes: Option<usize>,
    name: &str,
) -> anyhow::Result<String> {
    let mut bytes = Vec::new();
    match max_bytes {
        Some(max) => {
            let cap = u64::try_from(max).unwrap_or(u64::MAX).saturating_add(1);
            reader
                .take(cap)
                .read_to_end(&mut bytes)
                .with_context(|| format!("failed to read {name}"))?;
            if bytes.len() > max {
                anyhow::bail!("input too large: {name} exceeds {max} bytes");
            }
        }
        None => {
            reader
                .read_to_end(&mut bytes)
                .with_context(|| format!("failed to read {name}"))?;
        }
    }
    String::from_utf8(bytes).with_context(|| format!("{name} is not valid UTF-8"))
}

/// Markdown inputs are reduced to prose before scoring.
pub fn is_markdown(path: &Utf8Path) -> bool {
    matches!(path.extension(), Some("md" | "markdown"))
}
