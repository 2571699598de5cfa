//! Configuration file loading with precedence handling.

use crate::model::DestroyPolicy;
use crate::view::OutputFormat;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Session log read when no path is given.
pub const DEFAULT_LOG_PATH: &str = "Log.txt";

/// Value table read when no path is configured.
pub const DEFAULT_VALUES_PATH: &str = "ItemValues.txt";

const ENV_CONFIG: &str = "LOOTTALLY_CONFIG";
const ENV_VALUES: &str = "LOOTTALLY_VALUES";

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
/// Corresponds to `~/.config/loottally/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Count silver drops as waste.
    #[serde(default)]
    pub destroy_silver: Option<bool>,

    /// Count copper drops as waste.
    #[serde(default)]
    pub destroy_copper: Option<bool>,

    /// Count Fine Steel items as waste.
    #[serde(default)]
    pub destroy_fine_steel: Option<bool>,

    /// Path to the item value table.
    #[serde(default)]
    pub values_path: Option<PathBuf>,

    /// Report output format.
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Destroy policy for the run.
    pub policy: DestroyPolicy,
    /// Item value table path.
    pub values_path: PathBuf,
    /// Report output format.
    pub format: OutputFormat,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            policy: DestroyPolicy::default(),
            values_path: PathBuf::from(DEFAULT_VALUES_PATH),
            format: OutputFormat::default(),
            log_file_path: default_log_path(),
        }
    }
}

/// Flags given on the command line.
///
/// `keep_*` flags can only turn destruction off; leaving them unset keeps
/// whatever the config file decided.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// Value table path from `--values`.
    pub values_path: Option<PathBuf>,
    /// Output format from `--format`.
    pub format: Option<OutputFormat>,
    /// `--keep-silver` was passed.
    pub keep_silver: bool,
    /// `--keep-copper` was passed.
    pub keep_copper: bool,
    /// `--keep-fine-steel` was passed.
    pub keep_fine_steel: bool,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/loottally/loottally.log` on Unix-like systems,
/// or the platform equivalent. Falls back to the current directory if the
/// state directory cannot be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("loottally").join("loottally.log")
    } else {
        PathBuf::from("loottally.log")
    }
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

    // Missing file is not an error - use defaults
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

/// Resolve default config file path.
///
/// Returns `~/.config/loottally/config.toml` on Unix, appropriate path on
/// other platforms. Returns `None` if the config directory is unknown.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("loottally").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `LOOTTALLY_CONFIG` environment variable
/// 3. Default path `~/.config/loottally/config.toml`
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

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `LOOTTALLY_VALUES`: Override value table path
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(values_path) = std::env::var(ENV_VALUES) {
        config.values_path = PathBuf::from(values_path);
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        policy: DestroyPolicy {
            destroy_silver: config
                .destroy_silver
                .unwrap_or(defaults.policy.destroy_silver),
            destroy_copper: config
                .destroy_copper
                .unwrap_or(defaults.policy.destroy_copper),
            destroy_fine_steel: config
                .destroy_fine_steel
                .unwrap_or(defaults.policy.destroy_fine_steel),
        },
        values_path: config.values_path.unwrap_or(defaults.values_path),
        format: config.format.unwrap_or(defaults.format),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(values_path) = cli.values_path {
        config.values_path = values_path;
    }

    if let Some(format) = cli.format {
        config.format = format;
    }

    if cli.keep_silver {
        config.policy.destroy_silver = false;
    }
    if cli.keep_copper {
        config.policy.destroy_copper = false;
    }
    if cli.keep_fine_steel {
        config.policy.destroy_fine_steel = false;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
