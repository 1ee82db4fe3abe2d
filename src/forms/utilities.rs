use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::utility::NewUtilityBill;
use crate::forms::{PriceError, parse_price_cents, sanitize_inline_text};

const KIND_MAX_LEN: u64 = 64;

pub type UtilityFormResult<T> = Result<T, UtilityFormError>;

#[derive(Debug, Error)]
pub enum UtilityFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("utility kind cannot be empty")]
    EmptyKind,
    #[error(transparent)]
    Cost(#[from] PriceError),
}

/// Payload for `POST /api/utilities`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddUtilityBillForm {
    pub location_id: i32,
    #[validate(length(min = 1, max = KIND_MAX_LEN))]
    pub kind: String,
    /// Decimal amount string, e.g. `84.20`.
    pub cost: String,
    pub billed_on: NaiveDate,
}

impl AddUtilityBillForm {
    pub fn into_new_utility_bill(self) -> UtilityFormResult<NewUtilityBill> {
        self.validate()?;

        let kind = sanitize_inline_text(&self.kind);
        if kind.is_empty() {
            return Err(UtilityFormError::EmptyKind);
        }

        let cost_cents = parse_price_cents(&self.cost)?;

        Ok(NewUtilityBill::new(
            self.location_id,
            kind,
            cost_cents,
            self.billed_on,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bill_form_parses_cost() {
        let form = AddUtilityBillForm {
            location_id: 2,
            kind: " propane ".to_string(),
            cost: "84.20".to_string(),
            billed_on: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
        };

        let bill = form.into_new_utility_bill().expect("expected success");
        assert_eq!(bill.kind, "propane");
        assert_eq!(bill.cost_cents, 8_420);
    }

    #[test]
    fn bill_form_rejects_overly_precise_cost() {
        let form = AddUtilityBillForm {
            location_id: 2,
            kind: "water".to_string(),
            cost: "10.123".to_string(),
            billed_on: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
        };

        assert!(matches!(
            form.into_new_utility_bill(),
            Err(UtilityFormError::Cost(PriceError::TooPrecise(_)))
        ));
    }
}
