use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive date range a report covers.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct ReportRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// Profit per location over a date range: revenue minus utility costs.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct LocationProfitRow {
    pub location_name: String,
    pub order_count: i64,
    pub revenue_cents: i64,
    pub utility_cost_cents: i64,
    pub profit_cents: i64,
}

/// Units sold and revenue per menu item over a date range.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ItemPopularityRow {
    pub name: String,
    pub quantity_sold: i64,
    pub revenue_cents: i64,
}

/// Orders handled and revenue per staff member over a date range.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct EmployeePerformanceRow {
    pub staff_id: i32,
    pub staff_name: String,
    pub orders_handled: i64,
    pub revenue_cents: i64,
}
