use serde::Deserialize;

use crate::domain::inventory::{InventoryItem, InventoryListQuery};
use crate::domain::notification::NewNotification;
use crate::forms::inventory::{AddInventoryItemForm, EditInventoryItemForm};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{InventoryReader, InventoryWriter, NotificationWriter, StaffReader};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by `GET /api/inventory`.
#[derive(Debug, Deserialize, Default)]
pub struct InventoryQuery {
    pub search: Option<String>,
    #[serde(default)]
    pub low_stock_only: bool,
    pub page: Option<usize>,
}

/// Lists stock items matching the query, one page at a time.
pub fn list_inventory<R>(repo: &R, query: InventoryQuery) -> ServiceResult<Paginated<InventoryItem>>
where
    R: InventoryReader + ?Sized,
{
    let page = query.page.unwrap_or(1);
    let mut list_query = InventoryListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if let Some(search) = query.search.filter(|term| !term.trim().is_empty()) {
        list_query = list_query.search(search.trim());
    }
    if query.low_stock_only {
        list_query = list_query.low_stock_only();
    }

    let (total, items) = repo.list_inventory_items(list_query)?;
    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE).max(1);
    Ok(Paginated::new(items, page, total_pages))
}

pub fn get_inventory_item<R>(repo: &R, item_id: i32) -> ServiceResult<InventoryItem>
where
    R: InventoryReader + ?Sized,
{
    repo.get_inventory_item_by_id(item_id)?
        .ok_or_else(|| ServiceError::NotFound(format!("inventory item {item_id}")))
}

pub fn create_inventory_item<R>(repo: &R, form: AddInventoryItemForm) -> ServiceResult<InventoryItem>
where
    R: InventoryWriter + StaffReader + NotificationWriter + ?Sized,
{
    let new_item = form
        .into_new_inventory_item()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let item = repo.create_inventory_item(&new_item)?;
    notify_if_low(repo, &item);
    Ok(item)
}

/// Applies a partial update to a stock item. Dropping to or below the restock
/// threshold notifies every manager.
pub fn update_inventory_item<R>(
    repo: &R,
    item_id: i32,
    form: EditInventoryItemForm,
) -> ServiceResult<InventoryItem>
where
    R: InventoryWriter + StaffReader + NotificationWriter + ?Sized,
{
    let updates = form
        .into_update_inventory_item()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let item = repo.update_inventory_item(item_id, &updates)?;
    notify_if_low(repo, &item);
    Ok(item)
}

pub fn delete_inventory_item<R>(repo: &R, item_id: i32) -> ServiceResult<()>
where
    R: InventoryWriter + ?Sized,
{
    Ok(repo.delete_inventory_item(item_id)?)
}

/// Sends a low-stock notification to every manager. A notification failure is
/// logged but never fails the stock write that triggered it.
fn notify_if_low<R>(repo: &R, item: &InventoryItem)
where
    R: StaffReader + NotificationWriter + ?Sized,
{
    if !item.needs_restock() {
        return;
    }

    let message = format!(
        "Low stock: {} is down to {} {}",
        item.name, item.quantity, item.unit
    );

    let result = repo.list_managers().and_then(|managers| {
        let notifications: Vec<NewNotification> = managers
            .iter()
            .map(|manager| NewNotification::new(manager.id, message.clone()))
            .collect();
        repo.create_notifications(&notifications)
    });

    if let Err(err) = result {
        log::error!("failed to send low stock notifications for '{}': {err}", item.name);
    }
}
