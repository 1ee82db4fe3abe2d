use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::order::{Order, OrderItem, OrderItemStatus, OrderListQuery};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{OrderReader, OrderWriter};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by `GET /api/orders`.
#[derive(Debug, Deserialize, Default)]
pub struct OrdersQuery {
    pub customer_id: Option<i32>,
    pub staff_id: Option<i32>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub page: Option<usize>,
}

/// Payload for `POST /api/orders/{order_id}/items/{item_id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateItemStatusForm {
    pub status: OrderItemStatus,
}

/// Lists orders matching the query, newest first, one page at a time.
pub fn list_orders<R>(repo: &R, query: OrdersQuery) -> ServiceResult<Paginated<Order>>
where
    R: OrderReader + ?Sized,
{
    if let (Some(from), Some(to)) = (query.from, query.to)
        && from > to
    {
        return Err(ServiceError::Form(
            "from date must not be after to date".to_string(),
        ));
    }

    let page = query.page.unwrap_or(1);
    let mut list_query = OrderListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if let Some(customer_id) = query.customer_id {
        list_query = list_query.customer_id(customer_id);
    }
    if let Some(staff_id) = query.staff_id {
        list_query = list_query.staff_id(staff_id);
    }
    list_query.from = query.from;
    list_query.to = query.to;

    let (total, orders) = repo.list_orders(list_query)?;
    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE).max(1);
    Ok(Paginated::new(orders, page, total_pages))
}

pub fn get_order<R>(repo: &R, order_id: i32) -> ServiceResult<Order>
where
    R: OrderReader + ?Sized,
{
    repo.get_order_by_id(order_id)?
        .ok_or_else(|| ServiceError::NotFound(format!("order {order_id}")))
}

/// Moves one order line along its lifecycle. Invalid transitions surface as
/// conflicts from the repository.
pub fn update_item_status<R>(
    repo: &R,
    order_id: i32,
    item_id: i32,
    form: UpdateItemStatusForm,
) -> ServiceResult<OrderItem>
where
    R: OrderWriter + ?Sized,
{
    Ok(repo.update_order_item_status(order_id, item_id, form.status)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    use crate::domain::order::NewOrder;
    use crate::repository::RepositoryResult;

    mock! {
        OrdersRepo {}

        impl OrderReader for OrdersRepo {
            fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
            fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<(usize, Vec<Order>)>;
        }

        impl OrderWriter for OrdersRepo {
            fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
            fn update_order_item_status(
                &self,
                order_id: i32,
                item_id: i32,
                status: OrderItemStatus,
            ) -> RepositoryResult<OrderItem>;
        }
    }

    #[test]
    fn list_orders_rejects_inverted_date_range() {
        let repo = MockOrdersRepo::new();
        let query = OrdersQuery {
            from: NaiveDate::from_ymd_opt(2026, 8, 30),
            to: NaiveDate::from_ymd_opt(2026, 8, 1),
            ..OrdersQuery::default()
        };

        assert!(matches!(
            list_orders(&repo, query),
            Err(ServiceError::Form(_))
        ));
    }

    #[test]
    fn get_order_maps_missing_row_to_not_found() {
        let mut repo = MockOrdersRepo::new();
        repo.expect_get_order_by_id().returning(|_| Ok(None));

        assert!(matches!(
            get_order(&repo, 9),
            Err(ServiceError::NotFound(_))
        ));
    }
}
