//! Command parsing for Stockroom.
//!
//! This module turns raw input lines into typed commands, keeping parsing
//! separate from the inventory so the grammar can be tested on its own.

pub mod definitions;
pub mod output;
pub mod router;
pub mod sanitizer;
pub mod tokenizer;
pub mod validator;

pub use definitions::{ArgDef, ArgType, CommandDef, CommandKind, COMMANDS};
pub use output::CommandOutput;
pub use router::{Command, CommandRouter};
pub use validator::{ArgValue, Arguments};
