//! Integration tests for Stockroom.

pub mod binary_test;
pub mod repl_test;
pub mod session_test;
