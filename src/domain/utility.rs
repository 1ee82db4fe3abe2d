use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A utility bill recorded against a location (water, electric, propane).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UtilityBill {
    /// Unique identifier of the bill.
    pub id: i32,
    /// Location the bill belongs to.
    pub location_id: i32,
    /// Kind of utility, free text.
    pub kind: String,
    /// Billed amount in cents.
    pub cost_cents: i64,
    /// Date the bill was issued for.
    pub billed_on: NaiveDate,
    /// Timestamp for when the record was created.
    pub created_at: NaiveDateTime,
}

/// Payload required to record a new utility bill.
#[derive(Debug, Clone)]
pub struct NewUtilityBill {
    pub location_id: i32,
    pub kind: String,
    pub cost_cents: i64,
    pub billed_on: NaiveDate,
}

impl NewUtilityBill {
    pub fn new(
        location_id: i32,
        kind: impl Into<String>,
        cost_cents: i64,
        billed_on: NaiveDate,
    ) -> Self {
        Self {
            location_id,
            kind: kind.into(),
            cost_cents,
            billed_on,
        }
    }
}

/// Query definition used to list utility bills.
#[derive(Debug, Clone, Default)]
pub struct UtilityListQuery {
    /// Optional location filter.
    pub location_id: Option<i32>,
    /// Optional first billing date included.
    pub from: Option<NaiveDate>,
    /// Optional last billing date included.
    pub to: Option<NaiveDate>,
}

impl UtilityListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location_id(mut self, location_id: i32) -> Self {
        self.location_id = Some(location_id);
        self
    }

    pub fn between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }
}
