//! Configuration management for Stockroom.
//!
//! Handles loading configuration from a TOML file. Every section is optional
//! and a missing file yields the defaults.

use crate::error::{Result, StockroomError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure for Stockroom.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Command history settings.
    #[serde(default)]
    pub history: HistoryConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Interactive prompt settings.
    #[serde(default)]
    pub repl: ReplConfig,
}

/// Command history configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Whether processed lines are recorded.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// File the history is appended to.
    #[serde(default = "default_history_path")]
    pub path: PathBuf,

    /// Milliseconds between flushes.
    #[serde(default = "default_flush_interval_ms")]
    pub flush_interval_ms: u64,

    /// Lines written per flush.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

fn default_enabled() -> bool {
    true
}

fn default_history_path() -> PathBuf {
    PathBuf::from("command_history.txt")
}

fn default_flush_interval_ms() -> u64 {
    1000
}

fn default_batch_size() -> usize {
    2
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            path: default_history_path(),
            flush_interval_ms: default_flush_interval_ms(),
            batch_size: default_batch_size(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset (e.g., "warn", "stockroom=debug").
    #[serde(default = "default_level")]
    pub level: String,

    /// Write logs to this file instead of stderr.
    pub log_file: Option<PathBuf>,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            log_file: None,
        }
    }
}

/// Interactive prompt configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplConfig {
    /// Prompt printed before each command.
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_prompt() -> String {
    ">".to_string()
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
        }
    }
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("stockroom")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| StockroomError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| {
            StockroomError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the session cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.history.flush_interval_ms == 0 {
            return Err(StockroomError::config(
                "history.flush_interval_ms must be greater than 0",
            ));
        }
        if self.history.batch_size == 0 {
            return Err(StockroomError::config(
                "history.batch_size must be greater than 0",
            ));
        }
        Ok(())
    }
}
