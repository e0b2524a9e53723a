//! Logging configuration for Stockroom.
//!
//! Logs never go to stdout, which belongs to the interpreter's output. They
//! are written to stderr, or to a file when one is configured.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Builds the filter: `RUST_LOG` if set, otherwise the configured level.
fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Initializes logging to a file.
///
/// Falls back to stderr if the file cannot be created.
pub fn init_file_logging(log_path: &Path, default_level: &str) {
    // Ensure parent directory exists
    if let Some(parent) = log_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("Warning: Could not create log directory: {e}");
            init_stderr_logging(default_level);
            return;
        }
    }

    // Append so that consecutive sessions share one log
    let log_file = match File::options().create(true).append(true).open(log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not open log file: {e}");
            init_stderr_logging(default_level);
            return;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(log_file)
        .with_ansi(false) // No ANSI colors in file output
        .init();
}

/// Initializes logging to stderr.
pub fn init_stderr_logging(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(std::io::stderr)
        .init();
}

/// Returns the platform log path, used when `log_file` is given as a bare name.
///
/// Uses the XDG state directory on Linux (`~/.local/state/stockroom/`),
/// or falls back to the config directory on other platforms.
pub fn resolve_log_path(log_file: &Path) -> PathBuf {
    if log_file.is_absolute() || log_file.components().count() > 1 {
        return log_file.to_path_buf();
    }

    if let Some(state_dir) = dirs::state_dir() {
        return state_dir.join("stockroom").join(log_file);
    }

    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("stockroom").join(log_file);
    }

    std::env::temp_dir().join(log_file)
}
