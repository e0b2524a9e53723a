//! Inventory data types.
//!
//! Products, warehouses and their stock, plus the rows handed to the
//! formatter by list commands.

use std::fmt;

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Unique stock keeping unit.
    pub sku: String,
    /// Display name.
    pub name: String,
}

/// Maximum total units a warehouse may hold across all SKUs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StockLimit {
    #[default]
    Unbounded,
    Limited(u64),
}

impl StockLimit {
    /// Returns true if a warehouse holding `total` units is within this limit.
    pub fn admits(&self, total: u64) -> bool {
        match self {
            Self::Unbounded => true,
            Self::Limited(limit) => total <= *limit,
        }
    }

    /// Units that still fit on top of `current`, or `None` when unbounded.
    pub fn remaining(&self, current: u64) -> Option<u64> {
        match self {
            Self::Unbounded => None,
            Self::Limited(limit) => Some(limit.saturating_sub(current)),
        }
    }
}

impl fmt::Display for StockLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbounded => write!(f, "Infinity"),
            Self::Limited(limit) => write!(f, "{limit}"),
        }
    }
}

/// A warehouse and the stock it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warehouse {
    /// Warehouse number.
    pub number: i64,
    /// Stock limit.
    pub limit: StockLimit,
    /// Stocked SKUs in first-stocked order. Quantities are always positive.
    stock: Vec<(String, u64)>,
}

impl Warehouse {
    /// Creates an empty warehouse.
    pub fn new(number: i64, limit: StockLimit) -> Self {
        Self {
            number,
            limit,
            stock: Vec::new(),
        }
    }

    /// Total units held across all SKUs, saturating at `u64::MAX`.
    pub fn total_stock(&self) -> u64 {
        self.stock
            .iter()
            .fold(0u64, |total, (_, qty)| total.saturating_add(*qty))
    }

    /// Units held for `sku`, or `None` if it is not stocked here.
    pub fn quantity(&self, sku: &str) -> Option<u64> {
        self.stock
            .iter()
            .find(|(stocked, _)| stocked == sku)
            .map(|(_, qty)| *qty)
    }

    /// Adds units for `sku`, creating the entry if needed.
    pub fn add(&mut self, sku: &str, qty: u64) {
        match self.stock.iter_mut().find(|(stocked, _)| stocked == sku) {
            Some((_, held)) => *held = held.saturating_add(qty),
            None if qty > 0 => self.stock.push((sku.to_string(), qty)),
            None => {}
        }
    }

    /// Sets the units held for `sku`. Zero removes the entry.
    pub fn set(&mut self, sku: &str, qty: u64) {
        if qty == 0 {
            self.stock.retain(|(stocked, _)| stocked != sku);
            return;
        }
        match self.stock.iter_mut().find(|(stocked, _)| stocked == sku) {
            Some((_, held)) => *held = qty,
            None => self.stock.push((sku.to_string(), qty)),
        }
    }

    /// Iterates stocked SKUs and quantities.
    pub fn stock(&self) -> impl Iterator<Item = (&str, u64)> {
        self.stock.iter().map(|(sku, qty)| (sku.as_str(), *qty))
    }
}

/// One row of a `LIST WAREHOUSE` listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockRow {
    /// Product name, absent if the SKU is no longer in the catalog.
    pub name: Option<String>,
    pub sku: String,
    pub qty: u64,
}

/// Data produced by a list command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Every product, in catalog order.
    Products(Vec<Product>),
    /// Every warehouse number with its limit.
    Warehouses(Vec<(i64, StockLimit)>),
    /// The stock of a single warehouse.
    WarehouseStock(Vec<StockRow>),
}
