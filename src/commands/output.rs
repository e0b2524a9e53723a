//! Transport-agnostic command output types.
//!
//! These types represent what a processed line produced, independent of where
//! it is printed. The REPL renders them to stdout; tests inspect them directly.

use std::fmt;

use crate::error::StockroomError;
use crate::inventory::Payload;

const WAREHOUSES_HEADER: &str = "WAREHOUSE #\t\t\tSTOCK LIMIT";
const WAREHOUSE_STOCK_HEADER: &str = "ITEM NAME\t\t\t\t\tSKU\t\t\t\t\t\tQTY";
const NOTHING_IN_STOCK: &str = "(Nothing in stock)";
const UNKNOWN_PRODUCT: &str = "(unknown)";

/// Output from processing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Informational message.
    Info(String),

    /// Error message (already rendered with its `ERROR:` prefix when it has one).
    Error(String),

    /// Tab-aligned listing.
    Table {
        /// Optional header row.
        header: Option<String>,
        /// Row data, columns separated by literal tabs.
        rows: Vec<String>,
    },

    /// A yes/no question; the next line is its answer.
    Prompt(String),
}

impl CommandOutput {
    /// Creates an info message.
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    /// Creates an error message.
    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error(msg.into())
    }

    /// Creates a table output.
    pub fn table(header: Option<&str>, rows: Vec<String>) -> Self {
        Self::Table {
            header: header.map(str::to_string),
            rows,
        }
    }

    /// Creates a confirmation prompt.
    pub fn prompt(question: impl Into<String>) -> Self {
        Self::Prompt(question.into())
    }

    /// Returns true for prompts, which are printed without a trailing newline.
    pub fn is_prompt(&self) -> bool {
        matches!(self, Self::Prompt(_))
    }

    /// Returns true if rendering produces no text at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Table { header, rows } => header.is_none() && rows.is_empty(),
            Self::Info(s) | Self::Error(s) | Self::Prompt(s) => s.is_empty(),
        }
    }
}

impl From<StockroomError> for CommandOutput {
    fn from(err: StockroomError) -> Self {
        Self::Error(err.to_string())
    }
}

impl From<Payload> for CommandOutput {
    fn from(payload: Payload) -> Self {
        match payload {
            Payload::Products(products) => Self::table(
                None,
                products
                    .into_iter()
                    .map(|p| format!("{}\t{}", p.sku, p.name))
                    .collect(),
            ),
            Payload::Warehouses(warehouses) => Self::table(
                Some(WAREHOUSES_HEADER),
                warehouses
                    .into_iter()
                    .map(|(number, limit)| format!("{number}\t\t\t\t{limit}"))
                    .collect(),
            ),
            Payload::WarehouseStock(rows) if rows.is_empty() => {
                Self::table(Some(WAREHOUSE_STOCK_HEADER), vec![NOTHING_IN_STOCK.to_string()])
            }
            Payload::WarehouseStock(rows) => Self::table(
                Some(WAREHOUSE_STOCK_HEADER),
                rows.into_iter()
                    .map(|row| {
                        format!(
                            "{}\t\t{}\t\t{}",
                            row.name.as_deref().unwrap_or(UNKNOWN_PRODUCT),
                            row.sku,
                            row.qty
                        )
                    })
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for CommandOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info(s) | Self::Error(s) | Self::Prompt(s) => f.write_str(s),
            Self::Table { header, rows } => {
                let lines: Vec<&str> = header
                    .iter()
                    .map(String::as_str)
                    .chain(rows.iter().map(String::as_str))
                    .collect();
                f.write_str(&lines.join("\n"))
            }
        }
    }
}
