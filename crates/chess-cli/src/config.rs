//! Configuration file loading for the replay tool.
//!
//! Settings live in `replay.toml` in the current directory unless another
//! path is given on the command line. Every key is optional.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML or has a value of the wrong type.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings for a replay run.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ReplayConfig {
    /// Tracing filter used when `RUST_LOG` is not set. Defaults to "warn".
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Number of trailing move log lines printed. Defaults to 15.
    #[serde(default = "default_history_tail")]
    pub history_tail: usize,
    /// Stop at the first rejected move instead of skipping it.
    #[serde(default = "default_true")]
    pub stop_on_illegal: bool,
    /// Print the pieces each side has captured.
    #[serde(default = "default_true")]
    pub show_captured: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_history_tail() -> usize {
    15
}

fn default_true() -> bool {
    true
}

impl Default for ReplayConfig {
    fn default() -> Self {
        ReplayConfig {
            log_level: default_log_level(),
            history_tail: default_history_tail(),
            stop_on_illegal: true,
            show_captured: true,
        }
    }
}

impl ReplayConfig {
    /// Path used when none is given: `replay.toml` in the working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("replay.toml")
    }

    /// Loads the configuration at `path`, or the defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file exists but cannot be read,
    /// or [`ConfigError::Parse`] if it contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
