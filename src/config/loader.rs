//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Application directory name under the platform config/state dirs.
const APP_DIR: &str = "pageview-tracker";

/// Env var naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "PAGEVIEW_TRACKER_CONFIG";

/// Env var overriding the scroll throttle interval.
pub const THROTTLE_ENV_VAR: &str = "PAGEVIEW_TRACKER_THROTTLE_MS";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/pageview-tracker/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Minimum spacing between delivered scroll ticks, in trace milliseconds.
    #[serde(default)]
    pub scroll_throttle_ms: Option<u64>,

    /// Pretty-print emitted events.
    #[serde(default)]
    pub pretty: Option<bool>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Scroll throttle interval; 0 delivers every tick.
    pub scroll_throttle_ms: u64,
    /// Pretty-print emitted events.
    pub pretty: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            log_file_path: default_log_path(),
            scroll_throttle_ms: 0,
            pretty: false,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/pageview-tracker/pageview-tracker.log` on Linux, the platform
/// state directory elsewhere, or the current directory when none exists.
pub fn default_log_path() -> PathBuf {
    match dirs::state_dir() {
        Some(state_dir) => state_dir.join(APP_DIR).join("pageview-tracker.log"),
        None => PathBuf::from("pageview-tracker.log"),
    }
}

/// Resolve default config file path.
///
/// Returns `None` if the platform config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `PAGEVIEW_TRACKER_CONFIG` environment variable
/// 3. Default path
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        scroll_throttle_ms: config
            .scroll_throttle_ms
            .unwrap_or(defaults.scroll_throttle_ms),
        pretty: config.pretty.unwrap_or(defaults.pretty),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `PAGEVIEW_TRACKER_THROTTLE_MS`: Override scroll throttle (ignored if not an integer)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(THROTTLE_ENV_VAR) {
        match raw.trim().parse::<u64>() {
            Ok(ms) => config.scroll_throttle_ms = ms,
            Err(_) => warn!(
                value = %raw,
                "Ignoring {} (expected integer milliseconds)",
                THROTTLE_ENV_VAR
            ),
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    throttle_override: Option<u64>,
    pretty_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(ms) = throttle_override {
        config.scroll_throttle_ms = ms;
    }

    if let Some(pretty) = pretty_override {
        config.pretty = pretty;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
