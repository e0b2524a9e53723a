//! Command parsing and routing for Stockroom.
//!
//! Runs a raw input line through sanitizing, matching, argument extraction
//! and validation, producing a typed [`Command`] the inventory can execute.

use tracing::debug;

use super::definitions::{max_command_words, CommandDef, CommandKind, COMMANDS};
use super::sanitizer::sanitize;
use super::tokenizer::tokenize;
use super::validator::{validate, Arguments};
use crate::error::{Result, StockroomError};

/// Parsed command with arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a product to the catalog.
    AddProduct { name: String, sku: String },
    /// Add a warehouse, or change the limit of an existing one. `None` means no limit.
    AddWarehouse { number: i64, limit: Option<i64> },
    /// Add units of a product to a warehouse.
    Stock { sku: String, warehouse: i64, qty: i64 },
    /// Remove units of a product from a warehouse.
    Unstock { sku: String, warehouse: i64, qty: i64 },
    /// List every product.
    ListProducts,
    /// List every warehouse.
    ListWarehouses,
    /// List the stock of one warehouse.
    ListWarehouse { warehouse: i64 },
}

impl Command {
    /// Builds the typed command from validated arguments.
    pub fn from_arguments(kind: CommandKind, args: &Arguments) -> Result<Self> {
        let command = match kind {
            CommandKind::AddProduct => Self::AddProduct {
                name: args.require_text("PRODUCT NAME")?,
                sku: args.require_text("SKU")?,
            },
            CommandKind::AddWarehouse => Self::AddWarehouse {
                number: args.require_number("WAREHOUSE#")?,
                limit: args.number("STOCK_LIMIT"),
            },
            CommandKind::Stock => Self::Stock {
                sku: args.require_text("SKU")?,
                warehouse: args.require_number("WAREHOUSE#")?,
                qty: args.require_number("QTY")?,
            },
            CommandKind::Unstock => Self::Unstock {
                sku: args.require_text("SKU")?,
                warehouse: args.require_number("WAREHOUSE#")?,
                qty: args.require_number("QTY")?,
            },
            CommandKind::ListProducts => Self::ListProducts,
            CommandKind::ListWarehouses => Self::ListWarehouses,
            CommandKind::ListWarehouse => Self::ListWarehouse {
                warehouse: args.require_number("WAREHOUSE#")?,
            },
        };
        Ok(command)
    }
}

/// A command definition matched against the leading words of a line.
#[derive(Debug, Clone, Copy)]
pub struct MatchedCommand<'a> {
    /// The matched definition.
    pub def: &'static CommandDef,
    /// Text after the command words and one delimiter.
    pub remainder: &'a str,
}

/// Command router for parsing user input.
pub struct CommandRouter;

impl CommandRouter {
    /// Parse a raw input line into a Command.
    pub fn parse(input: &str) -> Result<Command> {
        let line = sanitize(input);
        let matched = Self::match_command(&line)?;
        let raw_args = tokenize(matched.remainder);

        debug!(command = %matched.def.name(), args = ?raw_args, "Matched command");

        let args = validate(&raw_args, matched.def.args).into_arguments()?;
        Command::from_arguments(matched.def.kind, &args)
    }

    /// Matches the leading words of a sanitized line against the command table.
    ///
    /// Command words compare case-insensitively and must equal whole tokens.
    /// When several definitions match, the one with the most words wins.
    pub fn match_command(line: &str) -> Result<MatchedCommand<'_>> {
        let tokens: Vec<String> = line.split_whitespace().map(str::to_uppercase).collect();

        let best = COMMANDS
            .iter()
            .filter(|def| {
                def.words.len() <= tokens.len()
                    && def.words.iter().zip(&tokens).all(|(word, token)| word == token)
            })
            .max_by_key(|def| def.words.len());

        match best {
            Some(def) => Ok(MatchedCommand {
                def,
                remainder: remainder_after_words(line, def.words.len()),
            }),
            None => {
                let attempted = tokens
                    .iter()
                    .take(max_command_words())
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(" ");
                Err(StockroomError::syntax(attempted))
            }
        }
    }
}

/// Skips `count` whitespace-separated words plus the one delimiter after them.
fn remainder_after_words(line: &str, count: usize) -> &str {
    let mut rest = line;
    for _ in 0..count {
        rest = rest.trim_start();
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        rest = &rest[end..];
    }

    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => chars.as_str(),
        _ => rest,
    }
}
