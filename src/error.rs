//! Error types for Stockroom.
//!
//! Defines the main error enum used throughout the application. Every
//! variant is recoverable from the session's point of view: the interpreter
//! prints the message and goes back to reading lines.

use thiserror::Error;

/// Main error type for Stockroom operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StockroomError {
    /// The input did not match any command. Carries the leading tokens that were compared.
    #[error("ERROR: Command not found [{0}]")]
    Syntax(String),

    /// One or more arguments were missing or had the wrong type.
    #[error("ERROR: {}", .0.join(" "))]
    Validation(Vec<String>),

    /// The command was well-formed but not legal for the current inventory.
    #[error("{0}")]
    Domain(String),

    /// Writing the command history failed.
    #[error("History error: {0}")]
    History(String),

    /// Configuration errors (invalid config file, unreadable path, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal application errors (unexpected states, bugs, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl StockroomError {
    /// Creates a syntax error from the unmatched leading tokens.
    pub fn syntax(tokens: impl Into<String>) -> Self {
        Self::Syntax(tokens.into())
    }

    /// Creates a validation error from per-argument reasons.
    pub fn validation(reasons: Vec<String>) -> Self {
        Self::Validation(reasons)
    }

    /// Creates a domain error with the given sentence.
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    /// Creates a history error with the given message.
    pub fn history(msg: impl Into<String>) -> Self {
        Self::History(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Syntax(_) => "Syntax Error",
            Self::Validation(_) => "Validation Error",
            Self::Domain(_) => "Domain Error",
            Self::History(_) => "History Error",
            Self::Config(_) => "Configuration Error",
            Self::Internal(_) => "Internal Error",
        }
    }
}

/// Result type alias using StockroomError.
pub type Result<T> = std::result::Result<T, StockroomError>;
