use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// A tracked stock item (supplies, packaging, raw ingredients).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct InventoryItem {
    /// Unique identifier of the stock item.
    pub id: i32,
    /// Human-readable item name.
    pub name: String,
    /// Units currently on hand.
    pub quantity: i32,
    /// Unit of measure, e.g. `lb` or `case`.
    pub unit: String,
    /// Quantity at or below which the item needs restocking.
    pub restock_threshold: i32,
    /// Timestamp for when the record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the record.
    pub updated_at: NaiveDateTime,
}

impl InventoryItem {
    /// Whether the on-hand quantity has reached the restock threshold.
    pub fn needs_restock(&self) -> bool {
        self.quantity <= self.restock_threshold
    }
}

/// Payload required to insert a new stock item.
#[derive(Debug, Clone)]
pub struct NewInventoryItem {
    pub name: String,
    pub quantity: i32,
    pub unit: String,
    pub restock_threshold: i32,
    pub updated_at: NaiveDateTime,
}

impl NewInventoryItem {
    pub fn new(
        name: impl Into<String>,
        quantity: i32,
        unit: impl Into<String>,
        restock_threshold: i32,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            restock_threshold,
            updated_at: chrono::Local::now().naive_utc(),
        }
    }
}

/// Patch data applied when updating a stock item.
#[derive(Debug, Clone)]
pub struct UpdateInventoryItem {
    pub name: Option<String>,
    pub quantity: Option<i32>,
    pub unit: Option<String>,
    pub restock_threshold: Option<i32>,
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateInventoryItem {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateInventoryItem {
    pub fn new() -> Self {
        Self {
            name: None,
            quantity: None,
            unit: None,
            restock_threshold: None,
            updated_at: chrono::Local::now().naive_utc(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn restock_threshold(mut self, restock_threshold: i32) -> Self {
        self.restock_threshold = Some(restock_threshold);
        self
    }
}

/// Query definition used to list stock items.
#[derive(Debug, Clone, Default)]
pub struct InventoryListQuery {
    /// Optional name search term.
    pub search: Option<String>,
    /// Keep only items at or below their restock threshold.
    pub low_stock_only: bool,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl InventoryListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn low_stock_only(mut self) -> Self {
        self.low_stock_only = true;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
