//! Command-line argument parsing for Stockroom.
//!
//! Uses clap to parse CLI arguments. Flags override the config file.

use crate::commands::definitions::generate_help_text;
use crate::config::Config;
use clap::{CommandFactory, FromArgMatches, Parser};
use std::path::PathBuf;

/// An interactive inventory interpreter for products, warehouses and stock.
#[derive(Parser, Debug)]
#[command(name = "stockroom")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Append command history to this file
    #[arg(long, value_name = "PATH")]
    pub history_file: Option<PathBuf>,

    /// Do not record command history
    #[arg(long)]
    pub no_history: bool,

    /// Fixture file whose lines run before reading stdin
    #[arg(long, value_name = "PATH", env = "TESTFILE")]
    pub script: Option<PathBuf>,

    /// Prompt printed before each command
    #[arg(long, value_name = "PROMPT")]
    pub prompt: Option<String>,
}

impl Cli {
    /// Parses command-line arguments, listing the interpreter commands in `--help`.
    pub fn parse_args() -> Self {
        let matches = Self::command()
            .after_help(generate_help_text())
            .get_matches();
        Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }

    /// Returns the config file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }

    /// Applies flag overrides on top of the loaded configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(path) = &self.history_file {
            config.history.path = path.clone();
        }
        if self.no_history {
            config.history.enabled = false;
        }
        if let Some(prompt) = &self.prompt {
            config.repl.prompt = prompt.clone();
        }
    }
}
