//! In-memory inventory engine.
//!
//! Owns the product catalog and the warehouses, and implements one state
//! transition per command. Transitions that would break a limit do not fail
//! outright: they return a [`PendingConfirmation`] proposing a safe
//! alternative, which is applied later through [`Inventory::resolve`].

pub mod confirm;
pub mod types;

pub use confirm::{Answer, PendingConfirmation, Resolution};
pub use types::{Payload, Product, StockLimit, StockRow, Warehouse};

use tracing::{debug, info};

use crate::commands::Command;
use crate::error::{Result, StockroomError};

/// Result of executing a command against the inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// State changed (or was already as requested); nothing to show.
    Done,
    /// A list command's data.
    Payload(Payload),
    /// The command needs a yes/no answer before anything changes.
    NeedsConfirmation(PendingConfirmation),
}

/// Products and warehouses held for the lifetime of a session.
#[derive(Debug, Default)]
pub struct Inventory {
    products: Vec<Product>,
    warehouses: Vec<Warehouse>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a parsed command.
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        debug!(?command, "Executing command");

        let outcome = match command {
            Command::AddProduct { name, sku } => self.add_product(name, sku),
            Command::AddWarehouse { number, limit } => self.add_warehouse(number, limit),
            Command::Stock {
                sku,
                warehouse,
                qty,
            } => self.stock(sku, warehouse, qty),
            Command::Unstock {
                sku,
                warehouse,
                qty,
            } => self.unstock(sku, warehouse, qty),
            Command::ListProducts => Ok(self.list_products()),
            Command::ListWarehouses => Ok(self.list_warehouses()),
            Command::ListWarehouse { warehouse } => self.list_warehouse(warehouse),
        };

        if let Err(e) = &outcome {
            info!(error = %e, "Command rejected");
        }
        outcome
    }

    /// Applies or drops a pending mutation according to the answer.
    pub fn resolve(&mut self, pending: PendingConfirmation, answer: Answer) -> Resolution {
        match answer {
            Answer::Yes => {
                self.apply(pending);
                Resolution::Applied
            }
            Answer::No => Resolution::Declined(pending.decline_message().to_string()),
            Answer::Unrecognized => Resolution::Declined(format!(
                "Please enter y or n.  {}",
                pending.decline_message()
            )),
        }
    }

    /// Looks up a product by SKU.
    pub fn product(&self, sku: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.sku == sku)
    }

    /// Looks up a warehouse by number.
    pub fn warehouse(&self, number: i64) -> Option<&Warehouse> {
        self.warehouses.iter().find(|w| w.number == number)
    }

    fn warehouse_mut(&mut self, number: i64) -> Option<&mut Warehouse> {
        self.warehouses.iter_mut().find(|w| w.number == number)
    }

    fn add_product(&mut self, name: String, sku: String) -> Result<Outcome> {
        if self.product(&sku).is_some() {
            return Err(StockroomError::domain(format!(
                "SKU {sku} already exists.  Product was not added."
            )));
        }

        self.products.push(Product { sku, name });
        Ok(Outcome::Done)
    }

    fn add_warehouse(&mut self, number: i64, limit: Option<i64>) -> Result<Outcome> {
        let limit = match limit {
            None | Some(0) => StockLimit::Unbounded,
            Some(n) => StockLimit::Limited(u64::try_from(n).map_err(|_| {
                StockroomError::domain(format!(
                    "STOCK_LIMIT [{n}] cannot be negative.  No changes made."
                ))
            })?),
        };

        let Some(existing) = self.warehouse(number) else {
            self.warehouses.push(Warehouse::new(number, limit));
            return Ok(Outcome::Done);
        };

        if existing.limit == limit {
            return Ok(Outcome::Done);
        }

        let held = existing.total_stock();
        if !limit.admits(held) {
            return Err(StockroomError::domain(format!(
                "Warehouse [{number}] currently has [{held}] products stocked, more than a limit of [{limit}].  Warehouse stock limit not updated."
            )));
        }

        Ok(Outcome::NeedsConfirmation(
            PendingConfirmation::UpdateStockLimit {
                warehouse: number,
                from: existing.limit,
                to: limit,
            },
        ))
    }

    fn stock(&mut self, sku: String, number: i64, qty: i64) -> Result<Outcome> {
        let qty = non_negative(qty, "No stock added.")?;

        let mut problems = Vec::new();
        if self.product(&sku).is_none() {
            problems.push(format!(
                "SKU [{sku}] not in product catalog.  Please add the product before attempting to stock."
            ));
        }
        if self.warehouse(number).is_none() {
            problems.push(format!(
                "Warehouse # [{number}] not found.  Please add the warehouse number before attempting to stock."
            ));
        }
        let warehouse = match self.warehouse_mut(number) {
            Some(warehouse) if problems.is_empty() => warehouse,
            _ => return Err(StockroomError::domain(problems.join(" "))),
        };

        let current = warehouse.total_stock();
        let Some(total) = current.checked_add(qty) else {
            return Err(StockroomError::domain(format!(
                "Warehouse [{number}] cannot hold [{qty}] more units on top of [{current}].  No stock added."
            )));
        };
        if warehouse.limit.admits(total) {
            warehouse.add(&sku, qty);
            return Ok(Outcome::Done);
        }

        let limit = match warehouse.limit {
            StockLimit::Limited(limit) => limit,
            StockLimit::Unbounded => {
                return Err(StockroomError::internal("unbounded warehouse refused stock"))
            }
        };
        let remainder = warehouse.limit.remaining(current).unwrap_or(0);
        if remainder == 0 {
            return Err(StockroomError::domain(format!(
                "Warehouse [{number}] is at its limit of [{limit}].  No stock added."
            )));
        }

        Ok(Outcome::NeedsConfirmation(
            PendingConfirmation::StockRemainder {
                sku,
                warehouse: number,
                current,
                limit,
                requested: qty,
                remainder,
            },
        ))
    }

    fn unstock(&mut self, sku: String, number: i64, qty: i64) -> Result<Outcome> {
        let qty = non_negative(qty, "No changes made.")?;

        let warehouse = self.warehouse_mut(number).ok_or_else(|| {
            StockroomError::domain(format!(
                "Warehouse # [{number}] not found.  No changes made."
            ))
        })?;

        // Checked against warehouse stock, not the catalog.
        let current = warehouse.quantity(&sku).ok_or_else(|| {
            StockroomError::domain(format!(
                "SKU [{sku}] not in warehouse [{number}].  No changes made."
            ))
        })?;

        match current.checked_sub(qty) {
            Some(left) => {
                warehouse.set(&sku, left);
                Ok(Outcome::Done)
            }
            None => Ok(Outcome::NeedsConfirmation(
                PendingConfirmation::ZeroOutStock {
                    sku,
                    warehouse: number,
                    current,
                },
            )),
        }
    }

    fn list_products(&self) -> Outcome {
        Outcome::Payload(Payload::Products(self.products.clone()))
    }

    fn list_warehouses(&self) -> Outcome {
        Outcome::Payload(Payload::Warehouses(
            self.warehouses.iter().map(|w| (w.number, w.limit)).collect(),
        ))
    }

    fn list_warehouse(&self, number: i64) -> Result<Outcome> {
        let warehouse = self.warehouse(number).ok_or_else(|| {
            StockroomError::domain(format!("Warehouse [{number}] does not exist"))
        })?;

        let rows = warehouse
            .stock()
            .map(|(sku, qty)| StockRow {
                name: self.product(sku).map(|p| p.name.clone()),
                sku: sku.to_string(),
                qty,
            })
            .collect();

        Ok(Outcome::Payload(Payload::WarehouseStock(rows)))
    }

    fn apply(&mut self, pending: PendingConfirmation) {
        debug!(?pending, "Applying confirmed change");

        match pending {
            PendingConfirmation::UpdateStockLimit { warehouse, to, .. } => {
                if let Some(w) = self.warehouse_mut(warehouse) {
                    w.limit = to;
                }
            }
            PendingConfirmation::StockRemainder {
                sku,
                warehouse,
                remainder,
                ..
            } => {
                if let Some(w) = self.warehouse_mut(warehouse) {
                    w.add(&sku, remainder);
                }
            }
            PendingConfirmation::ZeroOutStock { sku, warehouse, .. } => {
                if let Some(w) = self.warehouse_mut(warehouse) {
                    w.set(&sku, 0);
                }
            }
        }
    }
}

/// Rejects negative quantities.
fn non_negative(qty: i64, consequence: &str) -> Result<u64> {
    u64::try_from(qty).map_err(|_| {
        StockroomError::domain(format!(
            "QTY [{qty}] cannot be negative.  {consequence}"
        ))
    })
}
