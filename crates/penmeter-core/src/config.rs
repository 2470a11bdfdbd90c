//! Configuration loading and discovery.
//!
//! Sources are merged with figment, lowest precedence first:
//! 1. Built-in defaults
//! 2. User config: `~/.config/penmeter/config.<ext>`
//! 3. Project config: the closest directory (walking up from the search
//!    root, stopping at a `.git` boundary) containing `.penmeter.<ext>` or
//!    `penmeter.<ext>`
//! 4. Explicit files (`--config`)
//! 5. `PENMETER_*` environment variables
//!
//! Where `<ext>` is one of `toml`, `yaml`, `yml`, `json`. Within one
//! directory dotfiles merge before regular files.
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use penmeter_core::config::ConfigLoader;
//!
//! let cwd = Utf8PathBuf::try_from(std::env::current_dir().unwrap()).unwrap();
//! let (config, _sources) = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! let analyzer = config.analyzer();
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::readability::ReadabilityAnalyzer;

/// Default cap on input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

/// The configuration for penmeter.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for JSONL log files (falls back to platform defaults if unset).
    pub log_dir: Option<Utf8PathBuf>,
    /// Default maximum grade for the `readability` and `analyze` commands.
    pub max_grade: Option<u32>,
    /// Extra words never counted as complex (added to the built-in list).
    pub common_words: Option<Vec<String>>,
    /// Maximum input size in bytes (default: 5 MiB).
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely.
    ///
    /// When `true`, `max_input_bytes` is ignored.
    pub disable_input_limit: bool,
}

impl Config {
    /// Effective input size limit, or `None` when disabled.
    pub fn input_limit(&self) -> Option<usize> {
        if self.disable_input_limit {
            None
        } else {
            Some(self.max_input_bytes.unwrap_or(DEFAULT_MAX_INPUT_BYTES))
        }
    }

    /// Readability analyzer including any configured common words.
    pub fn analyzer(&self) -> ReadabilityAnalyzer {
        let analyzer = ReadabilityAnalyzer::new();
        match self.common_words {
            Some(ref words) => analyzer.with_common_words(words),
            None => analyzer,
        }
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Which configuration files were merged, returned by [`ConfigLoader::load`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files, ordered low→high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file from the XDG config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit config files (e.g., from `--config`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// The highest-precedence config file that was loaded.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }
}

const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

const APP_NAME: &str = "penmeter";

const ENV_PREFIX: &str = "PENMETER_";

/// Builder for loading configuration from multiple sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    project_search_root: Option<Utf8PathBuf>,
    include_user_config: bool,
    boundary_marker: Option<String>,
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a loader that reads user config and stops at `.git`.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Walk up from `path` looking for project config files.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set whether to include user config from `~/.config/penmeter/`.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Stop the upward walk at a directory containing `marker`.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary_marker = Some(marker.into());
        self
    }

    /// Search all the way to the filesystem root.
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Add an explicit config file. Later files take precedence.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all discovered sources.
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        if self.include_user_config
            && let Some(user_config) = find_user_config()
        {
            figment = merge_file(figment, &user_config);
            sources.user_file = Some(user_config);
        }

        if let Some(ref root) = self.project_search_root {
            let project_configs = self.find_project_configs(root);
            for pc in &project_configs {
                figment = merge_file(figment, pc);
            }
            sources.project_files = project_configs;
        }

        for file in &self.explicit_files {
            figment = merge_file(figment, file);
        }
        sources.explicit_files = self.explicit_files;

        // PENMETER_MAX_GRADE=8, PENMETER_LOG_LEVEL=debug, etc.
        figment = figment.merge(Env::prefixed(ENV_PREFIX).lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(
            log_level = config.log_level.as_str(),
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Like [`load`](Self::load), but fails when no config file exists.
    pub fn load_or_error(self) -> ConfigResult<(Config, ConfigSources)> {
        let has_user = self.include_user_config && find_user_config().is_some();
        let has_project = self
            .project_search_root
            .as_ref()
            .is_some_and(|root| !self.find_project_configs(root).is_empty());
        let has_explicit = !self.explicit_files.is_empty();

        if !has_user && !has_project && !has_explicit {
            return Err(ConfigError::NotFound);
        }

        self.load()
    }

    /// Config files from the closest directory that has any, low→high.
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            let dotfiles = CONFIG_EXTENSIONS
                .iter()
                .map(|ext| dir.join(format!(".{APP_NAME}.{ext}")));
            let regular = CONFIG_EXTENSIONS
                .iter()
                .map(|ext| dir.join(format!("{APP_NAME}.{ext}")));
            let found: Vec<Utf8PathBuf> = dotfiles.chain(regular).filter(|p| p.is_file()).collect();

            if !found.is_empty() {
                return found;
            }

            // A config beside the marker still counts, so check it after.
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
                && dir != start
            {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }
}

fn find_user_config() -> Option<Utf8PathBuf> {
    let config_dir = user_config_dir()?;
    CONFIG_EXTENSIONS
        .iter()
        .map(|ext| config_dir.join(format!("config.{ext}")))
        .find(|path| path.is_file())
}

/// Merge a config file into the figment, detecting format from extension.
fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
    match path.extension() {
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
        Some("json") => figment.merge(Json::file_exact(path.as_str())),
        _ => figment.merge(Toml::file_exact(path.as_str())),
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", APP_NAME)
}

/// User config directory (`~/.config/penmeter/` on Linux).
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = project_dirs()?;
    Utf8PathBuf::from_path_buf(proj_dirs.config_dir().to_path_buf()).ok()
}

/// User data directory (`~/.local/share/penmeter/` on Linux).
///
/// Default parent of the log directory.
pub fn user_data_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = project_dirs()?;
    Utf8PathBuf::from_path_buf(proj_dirs.data_dir().to_path_buf()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Serializes tests that mutate environment variables.
    static TEST_ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn utf8(path: std::path::PathBuf) -> Utf8PathBuf {
        Utf8PathBuf::try_from(path).unwrap()
    }

    fn load_file(contents: &str, name: &str) -> Config {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(name);
        fs::write(&config_path, contents).unwrap();
        let (config, _sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_file(utf8(config_path))
            .load()
            .unwrap();
        config
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.log_dir.is_none());
        assert!(config.max_grade.is_none());
        assert!(config.common_words.is_none());
        assert!(!config.disable_input_limit);
    }

    #[test]
    fn test_loader_builds_with_defaults() {
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .load()
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(sources.primary_file().is_none());
    }

    #[test]
    fn test_toml_file() {
        let config = load_file(
            "log_level = \"debug\"\nmax_grade = 8\ncommon_words = [\"creator\", \"algorithm\"]\n",
            "config.toml",
        );
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.max_grade, Some(8));
        assert_eq!(
            config.common_words,
            Some(vec!["creator".to_string(), "algorithm".to_string()])
        );
    }

    #[test]
    fn test_yaml_file() {
        let config = load_file("log_level: warn\nmax_grade: 10\n", "config.yaml");
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.max_grade, Some(10));
    }

    #[test]
    fn test_json_file() {
        let config = load_file(r#"{"log_dir": "/tmp/penmeter"}"#, "config.json");
        assert_eq!(
            config.log_dir.as_ref().map(|dir| dir.as_str()),
            Some("/tmp/penmeter")
        );
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        fs::write(&config_path, "max_grade = \"hard\"\n").unwrap();
        let result = ConfigLoader::new()
            .with_user_config(false)
            .with_file(utf8(config_path))
            .load();
        assert!(matches!(result, Err(ConfigError::Deserialize(_))));
    }

    #[test]
    fn test_later_file_overrides_earlier() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path().join("base.toml");
        fs::write(&base, r#"log_level = "warn""#).unwrap();
        let over = tmp.path().join("override.toml");
        fs::write(&over, r#"log_level = "error""#).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(utf8(base))
            .with_file(utf8(over))
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert!(sources.primary_file().unwrap().as_str().ends_with("override.toml"));
    }

    #[test]
    fn test_project_config_discovery() {
        let tmp = TempDir::new().unwrap();
        let project_dir = tmp.path().join("project");
        let sub_dir = project_dir.join("drafts").join("2026");
        fs::create_dir_all(&sub_dir).unwrap();
        fs::write(project_dir.join(".penmeter.toml"), "max_grade = 7\n").unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(utf8(sub_dir))
            .load()
            .unwrap();

        assert_eq!(config.max_grade, Some(7));
        assert_eq!(sources.project_files.len(), 1);
    }

    #[test]
    fn test_boundary_marker_stops_search() {
        let tmp = TempDir::new().unwrap();
        let parent = tmp.path().join("parent");
        let child = parent.join("child");
        let work = child.join("work");
        fs::create_dir_all(&work).unwrap();
        fs::write(parent.join(".penmeter.toml"), r#"log_level = "warn""#).unwrap();
        fs::create_dir(child.join(".git")).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_boundary_marker(".git")
            .with_project_search(utf8(work))
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Info);
        assert!(sources.project_files.is_empty());
    }

    #[test]
    fn dotfile_before_regular_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".penmeter.toml"), "max_grade = 6\n").unwrap();
        fs::write(tmp.path().join("penmeter.yaml"), "max_grade: 9\n").unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(utf8(tmp.path().to_path_buf()))
            .load()
            .unwrap();

        assert_eq!(config.max_grade, Some(9));
        assert_eq!(sources.project_files.len(), 2);
    }

    #[test]
    fn only_closest_directory_contributes() {
        let tmp = TempDir::new().unwrap();
        let parent = tmp.path().join("parent");
        let child = parent.join("child");
        fs::create_dir_all(&child).unwrap();
        fs::write(parent.join(".penmeter.toml"), "max_grade = 6\n").unwrap();
        fs::write(child.join("penmeter.toml"), r#"log_level = "error""#).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(utf8(child))
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert!(config.max_grade.is_none());
        assert_eq!(sources.project_files.len(), 1);
    }

    #[test]
    fn test_explicit_file_overrides_project_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".penmeter.toml"), "max_grade = 6\n").unwrap();
        let over = tmp.path().join("override.toml");
        fs::write(&over, "max_grade = 12\n").unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(utf8(tmp.path().to_path_buf()))
            .with_file(utf8(over))
            .load()
            .unwrap();

        assert_eq!(config.max_grade, Some(12));
        assert_eq!(sources.explicit_files.len(), 1);
    }

    #[test]
    fn test_load_or_error_fails_when_no_config() {
        let result = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .load_or_error();
        assert!(matches!(result, Err(ConfigError::NotFound)));
    }

    #[test]
    fn input_limit_defaults_and_overrides() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

        assert_eq!(Config::default().input_limit(), Some(DEFAULT_MAX_INPUT_BYTES));

        let config = load_file("max_input_bytes = 1024\n", "config.toml");
        assert_eq!(config.input_limit(), Some(1024));

        let config = load_file("max_input_bytes = 1024\ndisable_input_limit = true\n", "config.toml");
        assert_eq!(config.input_limit(), None);
    }

    #[test]
    fn configured_common_words_reach_analyzer() {
        let config: Config = serde_yaml::from_str("common_words: [Organization]\n").unwrap();
        assert!(!config.analyzer().is_complex("organization"));
        assert!(Config::default().analyzer().is_complex("organization"));
    }

    #[test]
    #[allow(unsafe_code)]
    fn test_env_var_overrides_file_config() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        fs::write(&config_path, "max_input_bytes = 1024\n").unwrap();

        // SAFETY: Test environment — mutex serializes env access across tests.
        unsafe {
            std::env::set_var("PENMETER_MAX_INPUT_BYTES", "2048");
        }

        let (config, _sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(utf8(config_path))
            .load()
            .unwrap();

        // SAFETY: Cleanup after test.
        unsafe {
            std::env::remove_var("PENMETER_MAX_INPUT_BYTES");
        }

        assert_eq!(config.max_input_bytes, Some(2048));
    }

    #[test]
    fn test_user_config_dir() {
        if let Some(path) = user_config_dir() {
            assert!(path.as_str().contains("penmeter"));
        }
    }
}
