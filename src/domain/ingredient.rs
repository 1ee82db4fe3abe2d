use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A stocked ingredient that menu item recipes reference.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Ingredient {
    /// Unique identifier of the ingredient.
    pub id: i32,
    /// Human-readable ingredient name.
    pub name: String,
    /// Unit price in cents charged when a customer adds the ingredient.
    pub price_cents: i64,
    /// Timestamp for when the record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new ingredient.
#[derive(Debug, Clone)]
pub struct NewIngredient {
    pub name: String,
    pub price_cents: i64,
    pub updated_at: NaiveDateTime,
}

impl NewIngredient {
    pub fn new(name: impl Into<String>, price_cents: i64) -> Self {
        Self {
            name: name.into(),
            price_cents,
            updated_at: chrono::Local::now().naive_utc(),
        }
    }
}
