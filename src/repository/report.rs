use std::collections::{BTreeMap, HashMap};

use chrono::{NaiveDateTime, NaiveTime};
use diesel::prelude::*;

use crate::domain::report::{
    EmployeePerformanceRow, ItemPopularityRow, LocationProfitRow, ReportRange,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, ReportReader};

fn range_bounds(range: ReportRange) -> (NaiveDateTime, NaiveDateTime) {
    let start = range.from.and_time(NaiveTime::MIN);
    let end = (range.to + chrono::Days::new(1)).and_time(NaiveTime::MIN);
    (start, end)
}

impl ReportReader for DieselRepository {
    fn location_profit(&self, range: ReportRange) -> RepositoryResult<Vec<LocationProfitRow>> {
        use crate::schema::{locations, orders, utility_bills};

        let mut conn = self.conn()?;
        let (start, end) = range_bounds(range);

        let order_rows: Vec<(String, i64)> = orders::table
            .filter(orders::created_at.ge(start))
            .filter(orders::created_at.lt(end))
            .select((orders::location_name, orders::total_cents))
            .load(&mut conn)?;

        let bill_rows: Vec<(i32, i64)> = utility_bills::table
            .filter(utility_bills::billed_on.ge(range.from))
            .filter(utility_bills::billed_on.le(range.to))
            .select((utility_bills::location_id, utility_bills::cost_cents))
            .load(&mut conn)?;

        let location_names: HashMap<i32, String> = locations::table
            .select((locations::id, locations::name))
            .load::<(i32, String)>(&mut conn)?
            .into_iter()
            .collect();

        // Sums are folded here rather than in SQL, like the other reports.
        let mut by_name: BTreeMap<String, (i64, i64)> = BTreeMap::new();
        for (location_name, total_cents) in order_rows {
            let entry = by_name.entry(location_name).or_default();
            entry.0 += 1;
            entry.1 += total_cents;
        }

        let mut utilities_by_name: HashMap<String, i64> = HashMap::new();
        for (location_id, cost_cents) in bill_rows {
            if let Some(name) = location_names.get(&location_id) {
                *utilities_by_name.entry(name.clone()).or_default() += cost_cents;
            }
        }

        let mut rows: Vec<LocationProfitRow> = by_name
            .into_iter()
            .map(|(location_name, (order_count, revenue_cents))| {
                let utility_cost_cents =
                    utilities_by_name.remove(&location_name).unwrap_or(0);
                LocationProfitRow {
                    location_name,
                    order_count,
                    revenue_cents,
                    utility_cost_cents,
                    profit_cents: revenue_cents - utility_cost_cents,
                }
            })
            .collect();

        // Locations with bills but no sales still show up, at a loss.
        for (location_name, utility_cost_cents) in utilities_by_name {
            rows.push(LocationProfitRow {
                location_name,
                order_count: 0,
                revenue_cents: 0,
                utility_cost_cents,
                profit_cents: -utility_cost_cents,
            });
        }

        rows.sort_by(|a, b| b.profit_cents.cmp(&a.profit_cents));
        Ok(rows)
    }

    fn item_popularity(&self, range: ReportRange) -> RepositoryResult<Vec<ItemPopularityRow>> {
        use crate::schema::{order_items, orders};

        let mut conn = self.conn()?;
        let (start, end) = range_bounds(range);

        let lines: Vec<(String, i64, i32)> = order_items::table
            .inner_join(orders::table)
            .filter(orders::created_at.ge(start))
            .filter(orders::created_at.lt(end))
            .select((order_items::name, order_items::price_cents, order_items::quantity))
            .load(&mut conn)?;

        let mut by_name: BTreeMap<String, (i64, i64)> = BTreeMap::new();
        for (name, price_cents, quantity) in lines {
            let entry = by_name.entry(name).or_default();
            entry.0 += i64::from(quantity);
            entry.1 += price_cents * i64::from(quantity);
        }

        let mut rows: Vec<ItemPopularityRow> = by_name
            .into_iter()
            .map(|(name, (quantity_sold, revenue_cents))| ItemPopularityRow {
                name,
                quantity_sold,
                revenue_cents,
            })
            .collect();

        rows.sort_by(|a, b| b.quantity_sold.cmp(&a.quantity_sold));
        Ok(rows)
    }

    fn employee_performance(
        &self,
        range: ReportRange,
    ) -> RepositoryResult<Vec<EmployeePerformanceRow>> {
        use crate::schema::{orders, staff};

        let mut conn = self.conn()?;
        let (start, end) = range_bounds(range);

        let order_rows: Vec<(i32, i64)> = orders::table
            .filter(orders::created_at.ge(start))
            .filter(orders::created_at.lt(end))
            .select((orders::staff_id, orders::total_cents))
            .load(&mut conn)?;

        let staff_names: HashMap<i32, String> = staff::table
            .select((staff::id, staff::name))
            .load::<(i32, String)>(&mut conn)?
            .into_iter()
            .collect();

        let mut by_staff: BTreeMap<i32, (i64, i64)> = BTreeMap::new();
        for (staff_id, total_cents) in order_rows {
            let entry = by_staff.entry(staff_id).or_default();
            entry.0 += 1;
            entry.1 += total_cents;
        }

        let mut rows: Vec<EmployeePerformanceRow> = by_staff
            .into_iter()
            .map(|(staff_id, (orders_handled, revenue_cents))| EmployeePerformanceRow {
                staff_id,
                staff_name: staff_names.get(&staff_id).cloned().unwrap_or_default(),
                orders_handled,
                revenue_cents,
            })
            .collect();

        rows.sort_by(|a, b| b.revenue_cents.cmp(&a.revenue_cents));
        Ok(rows)
    }
}
