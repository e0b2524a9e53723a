//! Deferred mutations that wait on a yes/no answer.

use super::types::StockLimit;

/// A mutation the inventory proposed instead of the one requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingConfirmation {
    /// Replace the limit of an existing warehouse.
    UpdateStockLimit {
        warehouse: i64,
        from: StockLimit,
        to: StockLimit,
    },
    /// Stock only the units that still fit under the limit.
    StockRemainder {
        sku: String,
        warehouse: i64,
        current: u64,
        limit: u64,
        requested: u64,
        remainder: u64,
    },
    /// Remove the SKU from the warehouse instead of going below zero.
    ZeroOutStock {
        sku: String,
        warehouse: i64,
        current: u64,
    },
}

impl PendingConfirmation {
    /// The question shown to the user.
    pub fn question(&self) -> String {
        match self {
            Self::UpdateStockLimit {
                warehouse,
                from,
                to,
            } => format!(
                "WAREHOUSE [{warehouse}] already exists.  Update STOCK_LIMIT from [{from}] to [{to}]? (y/n) "
            ),
            Self::StockRemainder {
                warehouse,
                current,
                limit,
                requested,
                remainder,
                ..
            } => format!(
                "Warehouse [{warehouse}] currently has [{current}] products stocked and a limit of [{limit}].  Would you like to add [{remainder}] instead of [{requested}] to stay within limit? (y/n) "
            ),
            Self::ZeroOutStock {
                sku,
                warehouse,
                current,
            } => format!(
                "Warehouse [{warehouse}] currently has a stock of [{current}] for SKU [{sku}].  Would you like to reduce stock to 0? (y/n) "
            ),
        }
    }

    /// Printed when the answer is anything but yes.
    pub fn decline_message(&self) -> &'static str {
        match self {
            Self::UpdateStockLimit { .. } => "Warehouse stock limit not updated.",
            Self::StockRemainder { .. } => "No stock added.",
            Self::ZeroOutStock { .. } => "No changes made.",
        }
    }
}

/// An answer to a pending confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    /// Anything else; treated as no.
    Unrecognized,
}

impl Answer {
    /// Interprets an input line as an answer.
    pub fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "y" => Self::Yes,
            "n" => Self::No,
            _ => Self::Unrecognized,
        }
    }
}

/// What happened to a pending confirmation once answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The proposed mutation was applied.
    Applied,
    /// Nothing changed; carries the message to show.
    Declined(String),
}
