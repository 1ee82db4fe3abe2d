use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use diesel::prelude::*;

use crate::domain::order::{
    NewOrder as DomainNewOrder, Order as DomainOrder, OrderItem as DomainOrderItem,
    OrderItemStatus, OrderListQuery,
};
use crate::models::order::{
    NewOrder as DbNewOrder, NewOrderItem as DbNewOrderItem,
    NewOrderItemCustomization as DbNewCustomization, Order as DbOrder, OrderItem as DbOrderItem,
    OrderItemCustomization as DbCustomization,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, OrderReader, OrderWriter};

fn day_start(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn load_items(
    conn: &mut SqliteConnection,
    order_id: i32,
) -> QueryResult<Vec<(DbOrderItem, Vec<DbCustomization>)>> {
    use crate::schema::{order_item_customizations, order_items};

    let items = order_items::table
        .filter(order_items::order_id.eq(order_id))
        .order(order_items::id.asc())
        .load::<DbOrderItem>(conn)?;

    let item_ids: Vec<i32> = items.iter().map(|item| item.id).collect();

    let mut customizations_by_item: HashMap<i32, Vec<DbCustomization>> = HashMap::new();
    if !item_ids.is_empty() {
        let rows = order_item_customizations::table
            .filter(order_item_customizations::order_item_id.eq_any(&item_ids))
            .order(order_item_customizations::id.asc())
            .load::<DbCustomization>(conn)?;
        for row in rows {
            customizations_by_item
                .entry(row.order_item_id)
                .or_default()
                .push(row);
        }
    }

    Ok(items
        .into_iter()
        .map(|item| {
            let item_id = item.id;
            let customizations = customizations_by_item.remove(&item_id).unwrap_or_default();
            (item, customizations)
        })
        .collect())
}

impl OrderReader for DieselRepository {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<DomainOrder>> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let order = orders::table
            .filter(orders::id.eq(id))
            .first::<DbOrder>(&mut conn)
            .optional()?;

        let Some(order) = order else {
            return Ok(None);
        };

        let order_id = order.id;
        let items = load_items(&mut conn, order_id)?;
        Ok(Some(order.into_domain(items)))
    }

    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<(usize, Vec<DomainOrder>)> {
        use crate::schema::orders;

        let mut conn = self.conn()?;

        let OrderListQuery {
            customer_id,
            staff_id,
            from,
            to,
            pagination,
        } = query;

        let mut count_query = orders::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(customer) = customer_id {
            count_query = count_query.filter(orders::customer_id.eq(Some(customer)));
        }
        if let Some(staff) = staff_id {
            count_query = count_query.filter(orders::staff_id.eq(staff));
        }
        if let Some(from) = from {
            count_query = count_query.filter(orders::created_at.ge(day_start(from)));
        }
        if let Some(to) = to {
            count_query = count_query.filter(orders::created_at.lt(day_start(to + chrono::Days::new(1))));
        }

        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = orders::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(customer) = customer_id {
            items = items.filter(orders::customer_id.eq(Some(customer)));
        }
        if let Some(staff) = staff_id {
            items = items.filter(orders::staff_id.eq(staff));
        }
        if let Some(from) = from {
            items = items.filter(orders::created_at.ge(day_start(from)));
        }
        if let Some(to) = to {
            items = items.filter(orders::created_at.lt(day_start(to + chrono::Days::new(1))));
        }

        items = items.order(orders::created_at.desc());

        if let Some(pagination) = pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items = items.offset(offset).limit(limit);
        }

        let db_orders = items.load::<DbOrder>(&mut conn)?;

        let mut orders = Vec::with_capacity(db_orders.len());
        for order in db_orders {
            let order_id = order.id;
            let items = load_items(&mut conn, order_id)?;
            orders.push(order.into_domain(items));
        }

        Ok((total, orders))
    }
}

impl OrderWriter for DieselRepository {
    fn create_order(&self, new_order: &DomainNewOrder) -> RepositoryResult<DomainOrder> {
        use crate::schema::{customers, order_item_customizations, order_items, orders};

        let mut conn = self.conn()?;

        conn.transaction::<DomainOrder, RepositoryError, _>(|conn| {
            if new_order.points_used > 0 {
                let Some(customer_id) = new_order.customer_id else {
                    return Err(RepositoryError::Conflict(
                        "points redemption requires a customer".into(),
                    ));
                };

                let adjusted = diesel::update(
                    customers::table
                        .filter(customers::id.eq(customer_id))
                        .filter(customers::incentive_points.ge(new_order.points_used)),
                )
                .set(
                    customers::incentive_points
                        .eq(customers::incentive_points - new_order.points_used),
                )
                .execute(conn)?;

                if adjusted == 0 {
                    return Err(RepositoryError::Conflict(
                        "insufficient incentive points".into(),
                    ));
                }
            }

            let created = diesel::insert_into(orders::table)
                .values(&DbNewOrder::from(new_order))
                .get_result::<DbOrder>(conn)?;

            let order_id = created.id;

            for item in &new_order.items {
                let created_item = diesel::insert_into(order_items::table)
                    .values(&DbNewOrderItem::from_domain(
                        order_id,
                        item,
                        new_order.updated_at,
                    ))
                    .get_result::<DbOrderItem>(conn)?;

                if !item.customizations.is_empty() {
                    let payload: Vec<DbNewCustomization> = item
                        .customizations
                        .iter()
                        .map(|delta| DbNewCustomization::from_domain(created_item.id, delta))
                        .collect();

                    diesel::insert_into(order_item_customizations::table)
                        .values(&payload)
                        .execute(conn)?;
                }
            }

            let items = load_items(conn, order_id)?;
            Ok(created.into_domain(items))
        })
    }

    fn update_order_item_status(
        &self,
        order_id: i32,
        item_id: i32,
        status: OrderItemStatus,
    ) -> RepositoryResult<DomainOrderItem> {
        use crate::schema::{order_item_customizations, order_items};

        let mut conn = self.conn()?;

        conn.transaction::<DomainOrderItem, RepositoryError, _>(|conn| {
            let current = order_items::table
                .filter(order_items::id.eq(item_id))
                .filter(order_items::order_id.eq(order_id))
                .first::<DbOrderItem>(conn)?;

            let current_status = OrderItemStatus::from(current.status.as_str());
            if !current_status.can_transition_to(status) {
                return Err(RepositoryError::Conflict(format!(
                    "cannot move order item from {} to {}",
                    current.status,
                    <&'static str>::from(status),
                )));
            }

            let status_value: &'static str = status.into();
            let updated = diesel::update(order_items::table.filter(order_items::id.eq(item_id)))
                .set((
                    order_items::status.eq(status_value),
                    order_items::updated_at.eq(chrono::Local::now().naive_utc()),
                ))
                .get_result::<DbOrderItem>(conn)?;

            let customizations = order_item_customizations::table
                .filter(order_item_customizations::order_item_id.eq(item_id))
                .order(order_item_customizations::id.asc())
                .load::<DbCustomization>(conn)?;

            Ok(updated.into_domain(customizations))
        })
    }
}
