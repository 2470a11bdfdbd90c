//! Logging setup: human-readable events on stderr, JSONL events in a log file.
//!
//! Stdout is reserved for command output (and the MCP protocol under
//! `serve`), so nothing here writes to it.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_FILE_NAME: &str = "penmeter.jsonl";
const ENV_LOG_PATH: &str = "PENMETER_LOG_PATH";
const ENV_LOG_DIR: &str = "PENMETER_LOG_DIR";

/// Where file logs go.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Log file path, or `None` to log to stderr only.
    pub log_file: Option<PathBuf>,
    /// Rotate daily. Explicit file paths are never rotated.
    pub rotate: bool,
}

impl ObservabilityConfig {
    /// Resolve the log file from the environment, config and platform default.
    ///
    /// Precedence: `PENMETER_LOG_PATH` > `PENMETER_LOG_DIR` > `config_log_dir`
    /// > the user data directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(ENV_LOG_PATH).map(PathBuf::from),
            std::env::var_os(ENV_LOG_DIR).map(PathBuf::from),
            config_log_dir,
            default_log_dir(),
        )
    }

    fn resolve(
        env_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
        default_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = env_path {
            return Self {
                log_file: Some(path),
                rotate: false,
            };
        }
        let dir = env_dir.or(config_dir).or(default_dir);
        Self {
            log_file: dir.map(|d| d.join(LOG_FILE_NAME)),
            rotate: true,
        }
    }
}

fn default_log_dir() -> Option<PathBuf> {
    penmeter_core::config::user_data_dir().map(|dir| dir.join("logs").into_std_path_buf())
}

/// Build the event filter.
///
/// `RUST_LOG` wins when set; otherwise `-q`/`-v` adjust the configured level
/// for penmeter's own crates and dependencies stay at `warn`.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = filter_level(quiet, verbose, config_level);
    EnvFilter::new(format!("warn,penmeter={level},penmeter_core={level}"))
}

fn filter_level(quiet: bool, verbose: u8, config_level: &str) -> &str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => config_level,
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// Returns the file writer's guard; keep it alive until exit so buffered
/// events are flushed. File logging is skipped when the file cannot be
/// opened.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let (file_layer, guard) = match config
        .log_file
        .as_deref()
        .and_then(|path| file_appender(path, config.rotate))
    {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(fmt::layer().json().with_writer(writer)), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

fn file_appender(path: &Path, rotate: bool) -> Option<RollingFileAppender> {
    let dir = path.parent()?;
    let name = path.file_name()?.to_str()?;
    std::fs::create_dir_all(dir).ok()?;
    let rotation = if rotate {
        Rotation::DAILY
    } else {
        Rotation::NEVER
    };
    RollingFileAppender::builder()
        .rotation(rotation)
        .filename_prefix(name)
        .build(dir)
        .ok()
}
