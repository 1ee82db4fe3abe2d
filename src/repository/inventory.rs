use diesel::prelude::*;

use crate::domain::inventory::{
    InventoryItem as DomainInventoryItem, InventoryListQuery,
    NewInventoryItem as DomainNewInventoryItem, UpdateInventoryItem as DomainUpdateInventoryItem,
};
use crate::models::inventory::{
    InventoryItem as DbInventoryItem, NewInventoryItem as DbNewInventoryItem,
    UpdateInventoryItem as DbUpdateInventoryItem,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, InventoryReader, InventoryWriter};

impl InventoryReader for DieselRepository {
    fn get_inventory_item_by_id(&self, id: i32) -> RepositoryResult<Option<DomainInventoryItem>> {
        use crate::schema::inventory_items;

        let mut conn = self.conn()?;
        let item = inventory_items::table
            .filter(inventory_items::id.eq(id))
            .first::<DbInventoryItem>(&mut conn)
            .optional()?;

        Ok(item.map(DomainInventoryItem::from))
    }

    fn list_inventory_items(
        &self,
        query: InventoryListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainInventoryItem>)> {
        use crate::schema::inventory_items;

        let mut conn = self.conn()?;

        let InventoryListQuery {
            search,
            low_stock_only,
            pagination,
        } = query;

        let search_pattern = search.as_ref().map(|term| format!("%{}%", term));

        let mut count_query = inventory_items::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(ref pattern) = search_pattern {
            count_query = count_query.filter(inventory_items::name.like(pattern.clone()));
        }
        if low_stock_only {
            count_query = count_query
                .filter(inventory_items::quantity.le(inventory_items::restock_threshold));
        }

        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = inventory_items::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(ref pattern) = search_pattern {
            items = items.filter(inventory_items::name.like(pattern.clone()));
        }
        if low_stock_only {
            items =
                items.filter(inventory_items::quantity.le(inventory_items::restock_threshold));
        }

        items = items.order(inventory_items::name.asc());

        if let Some(pagination) = pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items = items.offset(offset).limit(limit);
        }

        let rows = items.load::<DbInventoryItem>(&mut conn)?;
        Ok((total, rows.into_iter().map(DomainInventoryItem::from).collect()))
    }
}

impl InventoryWriter for DieselRepository {
    fn create_inventory_item(
        &self,
        new_item: &DomainNewInventoryItem,
    ) -> RepositoryResult<DomainInventoryItem> {
        use crate::schema::inventory_items;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(inventory_items::table)
            .values(&DbNewInventoryItem::from(new_item))
            .get_result::<DbInventoryItem>(&mut conn)?;

        Ok(created.into())
    }

    fn update_inventory_item(
        &self,
        item_id: i32,
        updates: &DomainUpdateInventoryItem,
    ) -> RepositoryResult<DomainInventoryItem> {
        use crate::schema::inventory_items;

        let mut conn = self.conn()?;
        let updated =
            diesel::update(inventory_items::table.filter(inventory_items::id.eq(item_id)))
                .set(&DbUpdateInventoryItem::from(updates))
                .get_result::<DbInventoryItem>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_inventory_item(&self, item_id: i32) -> RepositoryResult<()> {
        use crate::schema::inventory_items;

        let mut conn = self.conn()?;
        let deleted =
            diesel::delete(inventory_items::table.filter(inventory_items::id.eq(item_id)))
                .execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
