use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::inventory::{NewInventoryItem, UpdateInventoryItem};
use crate::forms::sanitize_inline_text;

const NAME_MAX_LEN: u64 = 128;
const UNIT_MAX_LEN: u64 = 32;

pub type InventoryFormResult<T> = Result<T, InventoryFormError>;

#[derive(Debug, Error)]
pub enum InventoryFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("stock item name cannot be empty")]
    EmptyName,
}

/// Payload for `POST /api/inventory`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddInventoryItemForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(range(min = 0))]
    pub quantity: i32,
    #[validate(length(min = 1, max = UNIT_MAX_LEN))]
    pub unit: String,
    #[validate(range(min = 0))]
    pub restock_threshold: i32,
}

impl AddInventoryItemForm {
    pub fn into_new_inventory_item(self) -> InventoryFormResult<NewInventoryItem> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(InventoryFormError::EmptyName);
        }

        Ok(NewInventoryItem::new(
            name,
            self.quantity,
            sanitize_inline_text(&self.unit),
            self.restock_threshold,
        ))
    }
}

/// Payload for `PUT /api/inventory/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct EditInventoryItemForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: Option<String>,
    #[validate(range(min = 0))]
    pub quantity: Option<i32>,
    #[validate(length(min = 1, max = UNIT_MAX_LEN))]
    pub unit: Option<String>,
    #[validate(range(min = 0))]
    pub restock_threshold: Option<i32>,
}

impl EditInventoryItemForm {
    pub fn into_update_inventory_item(self) -> InventoryFormResult<UpdateInventoryItem> {
        self.validate()?;

        let mut updates = UpdateInventoryItem::new();

        if let Some(name) = self.name {
            let sanitized = sanitize_inline_text(&name);
            if sanitized.is_empty() {
                return Err(InventoryFormError::EmptyName);
            }
            updates = updates.name(sanitized);
        }

        if let Some(quantity) = self.quantity {
            updates = updates.quantity(quantity);
        }

        if let Some(unit) = self.unit {
            updates = updates.unit(sanitize_inline_text(&unit));
        }

        if let Some(restock_threshold) = self.restock_threshold {
            updates = updates.restock_threshold(restock_threshold);
        }

        Ok(updates)
    }
}
