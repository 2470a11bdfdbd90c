//! Info command implementation

use clap::Args;
use owo_colors::OwoColorize;
use penmeter_core::config::{Config, ConfigSources};
use penmeter_core::word_lists::COMMON_MULTISYLLABLE_WORDS;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_grade: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
    common_words: usize,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        let extra = config.common_words.as_ref().map_or(0, Vec::len);
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            max_grade: config.max_grade,
            max_input_bytes: config.input_limit(),
            common_words: COMMON_MULTISYLLABLE_WORDS.len() + extra,
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information and the effective configuration.
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    let package = &full_info.package;
    println!("{} {}", package.name.bold(), package.version.green());
    if !package.description.is_empty() {
        println!("{}", package.description);
    }
    if !package.license.is_empty() {
        println!("{}: {}", "License".dimmed(), package.license);
    }
    if !package.repository.is_empty() {
        println!("{}: {}", "Repository".dimmed(), package.repository.cyan());
    }

    let cfg = &full_info.config;
    println!();
    println!("{}", "Configuration".bold().underline());
    match cfg.config_file {
        Some(ref path) => println!("{}: {}", "Config file".dimmed(), path.cyan()),
        None => println!("{}: {}", "Config file".dimmed(), "none loaded".yellow()),
    }
    println!("{}: {}", "Log level".dimmed(), cfg.log_level);
    if let Some(ref dir) = cfg.log_dir {
        println!("{}: {}", "Log directory".dimmed(), dir);
    }

    println!();
    println!("{}", "Scoring".bold().underline());
    print_opt("Max grade", cfg.max_grade);
    print_opt("Input limit (bytes)", cfg.max_input_bytes);
    println!("{}: {}", "Common words".dimmed(), cfg.common_words);

    Ok(())
}

/// Print an optional value or "(not set)".
fn print_opt<T: std::fmt::Display>(label: &str, value: Option<T>) {
    match value {
        Some(v) => println!("{}: {}", label.dimmed(), v),
        None => println!("{}: {}", label.dimmed(), "(not set)".dimmed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmd_info_text_succeeds() {
        let result = cmd_info(
            InfoArgs::default(),
            false,
            &Config::default(),
            &ConfigSources::default(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_cmd_info_json_via_global() {
        let result = cmd_info(
            InfoArgs::default(),
            true,
            &Config::default(),
            &ConfigSources::default(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_config_info_no_file() {
        let info = ConfigInfo::from_config(&Config::default(), &ConfigSources::default());
        assert!(info.config_file.is_none());
        assert_eq!(info.log_level, "info");
        assert_eq!(info.common_words, COMMON_MULTISYLLABLE_WORDS.len());
        assert_eq!(
            info.max_input_bytes,
            Some(penmeter_core::DEFAULT_MAX_INPUT_BYTES)
        );
    }

    #[test]
    fn test_config_info_counts_extra_words() {
        let config = Config {
            common_words: Some(vec!["creator".to_string(), "algorithm".to_string()]),
            disable_input_limit: true,
            ..Config::default()
        };
        let info = ConfigInfo::from_config(&config, &ConfigSources::default());
        assert_eq!(info.common_words, COMMON_MULTISYLLABLE_WORDS.len() + 2);
        assert!(info.max_input_bytes.is_none());
    }
}
