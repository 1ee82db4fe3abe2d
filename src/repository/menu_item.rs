use std::collections::HashMap;

use diesel::prelude::*;

use crate::domain::menu_item::{
    MenuItem as DomainMenuItem, MenuItemListQuery, NewMenuItem as DomainNewMenuItem,
    UpdateMenuItem as DomainUpdateMenuItem,
};
use crate::models::ingredient::Ingredient as DbIngredient;
use crate::models::menu_item::{
    MenuItem as DbMenuItem, MenuItemIngredient as DbMenuItemIngredient,
    NewMenuItem as DbNewMenuItem, NewMenuItemIngredient as DbNewMenuItemIngredient,
    UpdateMenuItem as DbUpdateMenuItem,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, MenuItemReader, MenuItemWriter};

fn load_recipe(
    conn: &mut SqliteConnection,
    item_id: i32,
) -> QueryResult<Vec<(DbMenuItemIngredient, DbIngredient)>> {
    use crate::schema::{ingredients, menu_item_ingredients};

    menu_item_ingredients::table
        .inner_join(ingredients::table)
        .filter(menu_item_ingredients::menu_item_id.eq(item_id))
        .order(menu_item_ingredients::id.asc())
        .load::<(DbMenuItemIngredient, DbIngredient)>(conn)
}

impl MenuItemReader for DieselRepository {
    fn get_menu_item_by_id(&self, id: i32) -> RepositoryResult<Option<DomainMenuItem>> {
        use crate::schema::menu_items;

        let mut conn = self.conn()?;
        let item = menu_items::table
            .filter(menu_items::id.eq(id))
            .first::<DbMenuItem>(&mut conn)
            .optional()?;

        let Some(item) = item else {
            return Ok(None);
        };

        let recipe = load_recipe(&mut conn, item.id)?;
        Ok(Some(DomainMenuItem::from((item, recipe))))
    }

    fn list_menu_items(
        &self,
        query: MenuItemListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainMenuItem>)> {
        use crate::schema::{ingredients, menu_item_ingredients, menu_items};

        let mut conn = self.conn()?;

        let MenuItemListQuery {
            search,
            category,
            only_available,
            pagination,
        } = query;

        let category_filter: Option<&'static str> = category.map(|value| value.into());
        let search_pattern = search.as_ref().map(|term| format!("%{}%", term));

        let mut count_query = menu_items::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(category_value) = category_filter {
            count_query = count_query.filter(menu_items::category.eq(category_value));
        }

        if only_available {
            count_query = count_query.filter(menu_items::is_available.eq(true));
        }

        if let Some(ref pattern) = search_pattern {
            count_query = count_query.filter(
                menu_items::name
                    .like(pattern.clone())
                    .or(menu_items::description.like(pattern.clone())),
            );
        }

        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = menu_items::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(category_value) = category_filter {
            items = items.filter(menu_items::category.eq(category_value));
        }

        if only_available {
            items = items.filter(menu_items::is_available.eq(true));
        }

        if let Some(ref pattern) = search_pattern {
            items = items.filter(
                menu_items::name
                    .like(pattern.clone())
                    .or(menu_items::description.like(pattern.clone())),
            );
        }

        items = items.order(menu_items::name.asc());

        if let Some(pagination) = pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items = items.offset(offset).limit(limit);
        }

        let db_items = items.load::<DbMenuItem>(&mut conn)?;
        if db_items.is_empty() {
            return Ok((total, Vec::new()));
        }

        let item_ids: Vec<i32> = db_items.iter().map(|item| item.id).collect();

        let rows = menu_item_ingredients::table
            .inner_join(ingredients::table)
            .filter(menu_item_ingredients::menu_item_id.eq_any(&item_ids))
            .order(menu_item_ingredients::id.asc())
            .load::<(DbMenuItemIngredient, DbIngredient)>(&mut conn)?;

        let mut recipes_by_item: HashMap<i32, Vec<(DbMenuItemIngredient, DbIngredient)>> =
            HashMap::new();
        for row in rows {
            recipes_by_item.entry(row.0.menu_item_id).or_default().push(row);
        }

        let items = db_items
            .into_iter()
            .map(|item| {
                let item_id = item.id;
                let recipe = recipes_by_item.remove(&item_id).unwrap_or_default();
                DomainMenuItem::from((item, recipe))
            })
            .collect();

        Ok((total, items))
    }
}

impl MenuItemWriter for DieselRepository {
    fn create_menu_item(&self, new_item: &DomainNewMenuItem) -> RepositoryResult<DomainMenuItem> {
        use crate::schema::{menu_item_ingredients, menu_items};

        let mut conn = self.conn()?;

        conn.transaction::<DomainMenuItem, RepositoryError, _>(|conn| {
            let db_new = DbNewMenuItem::from(new_item);

            let created = diesel::insert_into(menu_items::table)
                .values(&db_new)
                .get_result::<DbMenuItem>(conn)?;

            if !new_item.ingredients.is_empty() {
                let payload: Vec<DbNewMenuItemIngredient> = new_item
                    .ingredients
                    .iter()
                    .map(|line| DbNewMenuItemIngredient::from_domain(created.id, line))
                    .collect();

                diesel::insert_into(menu_item_ingredients::table)
                    .values(&payload)
                    .execute(conn)?;
            }

            let recipe = load_recipe(conn, created.id)?;
            Ok(DomainMenuItem::from((created, recipe)))
        })
    }

    fn update_menu_item(
        &self,
        item_id: i32,
        updates: &DomainUpdateMenuItem,
    ) -> RepositoryResult<DomainMenuItem> {
        use crate::schema::{menu_item_ingredients, menu_items};

        let mut conn = self.conn()?;

        conn.transaction::<DomainMenuItem, RepositoryError, _>(|conn| {
            let db_updates = DbUpdateMenuItem::from(updates);

            let updated = diesel::update(menu_items::table.filter(menu_items::id.eq(item_id)))
                .set(&db_updates)
                .get_result::<DbMenuItem>(conn)?;

            if let Some(ingredients) = updates.ingredients.as_ref() {
                diesel::delete(
                    menu_item_ingredients::table
                        .filter(menu_item_ingredients::menu_item_id.eq(item_id)),
                )
                .execute(conn)?;

                if !ingredients.is_empty() {
                    let payload: Vec<DbNewMenuItemIngredient> = ingredients
                        .iter()
                        .map(|line| DbNewMenuItemIngredient::from_domain(item_id, line))
                        .collect();

                    diesel::insert_into(menu_item_ingredients::table)
                        .values(&payload)
                        .execute(conn)?;
                }
            }

            let recipe = load_recipe(conn, item_id)?;
            Ok(DomainMenuItem::from((updated, recipe)))
        })
    }

    fn delete_menu_item(&self, item_id: i32) -> RepositoryResult<()> {
        use crate::schema::{menu_item_ingredients, menu_items};

        let mut conn = self.conn()?;

        conn.transaction::<(), RepositoryError, _>(|conn| {
            diesel::delete(
                menu_item_ingredients::table.filter(menu_item_ingredients::menu_item_id.eq(item_id)),
            )
            .execute(conn)?;

            let deleted = diesel::delete(menu_items::table.filter(menu_items::id.eq(item_id)))
                .execute(conn)?;
            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }

            Ok(())
        })
    }
}
