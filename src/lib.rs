//! Stockroom - An interactive inventory interpreter.
//!
//! This library exposes the core modules for use in integration tests.

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod history;
pub mod inventory;
pub mod logging;
pub mod repl;
