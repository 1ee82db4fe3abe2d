use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::utility::{NewUtilityBill as DomainNewUtilityBill, UtilityBill as DomainUtilityBill};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::utility_bills)]
pub struct UtilityBill {
    pub id: i32,
    pub location_id: i32,
    pub kind: String,
    pub cost_cents: i64,
    pub billed_on: NaiveDate,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::utility_bills)]
pub struct NewUtilityBill<'a> {
    pub location_id: i32,
    pub kind: &'a str,
    pub cost_cents: i64,
    pub billed_on: NaiveDate,
}

impl From<UtilityBill> for DomainUtilityBill {
    fn from(value: UtilityBill) -> Self {
        Self {
            id: value.id,
            location_id: value.location_id,
            kind: value.kind,
            cost_cents: value.cost_cents,
            billed_on: value.billed_on,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewUtilityBill> for NewUtilityBill<'a> {
    fn from(value: &'a DomainNewUtilityBill) -> Self {
        Self {
            location_id: value.location_id,
            kind: value.kind.as_str(),
            cost_cents: value.cost_cents,
            billed_on: value.billed_on,
        }
    }
}
