use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::order::{CustomizationAction, PaymentMethod};

pub type CheckoutFormResult<T> = Result<T, CheckoutFormError>;

/// Errors that can occur while processing a checkout payload.
#[derive(Debug, Error)]
pub enum CheckoutFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("order must contain at least one item")]
    NoItems,
    #[error("either a customer id or a phone number identifies the order")]
    MissingIdentity,
}

/// One ingredient delta submitted with an order line.
#[derive(Debug, Deserialize, Validate, Clone)]
pub struct CheckoutCustomizationForm {
    pub ingredient_id: i32,
    pub action: CustomizationAction,
    #[serde(default = "default_quantity")]
    #[validate(range(min = 1))]
    pub quantity_delta: i32,
}

/// One order line of a checkout payload.
#[derive(Debug, Deserialize, Validate, Clone)]
pub struct CheckoutItemForm {
    pub menu_item_id: i32,
    #[validate(range(min = 1))]
    pub quantity: i32,
    #[serde(default)]
    #[validate(nested)]
    pub customizations: Vec<CheckoutCustomizationForm>,
}

fn default_quantity() -> i32 {
    1
}

/// Payload for `POST /api/checkout/create-order`.
///
/// The customer is identified by `customer_id` (online orders) or by `phone`
/// (walk-up lookup); an unknown phone falls back to a guest order.
#[derive(Debug, Deserialize, Validate)]
pub struct CheckoutForm {
    #[validate(nested)]
    pub items: Vec<CheckoutItemForm>,
    pub customer_id: Option<i32>,
    pub phone: Option<String>,
    #[serde(default)]
    pub online: bool,
    /// Handling staff member; required for in-person orders.
    pub staff_id: Option<i32>,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub points_used: i64,
}

impl CheckoutForm {
    /// Validates payload shape; business rules live in the checkout service.
    pub fn validated(self) -> CheckoutFormResult<Self> {
        self.validate()?;

        if self.items.is_empty() {
            return Err(CheckoutFormError::NoItems);
        }

        if self.online && self.customer_id.is_none() && self.phone.is_none() {
            return Err(CheckoutFormError::MissingIdentity);
        }

        Ok(self)
    }
}
