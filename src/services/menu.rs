use serde::Deserialize;

use crate::domain::ingredient::Ingredient;
use crate::domain::menu_item::{Category, MenuItem, MenuItemListQuery};
use crate::forms::menu::{AddIngredientForm, AddMenuItemForm, EditMenuItemForm};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{IngredientReader, IngredientWriter, MenuItemReader, MenuItemWriter};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by `GET /api/menu-items`.
#[derive(Debug, Deserialize, Default)]
pub struct MenuItemsQuery {
    pub search: Option<String>,
    pub category: Option<Category>,
    #[serde(default)]
    pub available_only: bool,
    pub page: Option<usize>,
}

impl MenuItemsQuery {
    fn into_list_query(self) -> MenuItemListQuery {
        let mut query = MenuItemListQuery::new()
            .paginate(self.page.unwrap_or(1), DEFAULT_ITEMS_PER_PAGE);
        if let Some(search) = self.search.filter(|term| !term.trim().is_empty()) {
            query = query.search(search.trim());
        }
        if let Some(category) = self.category {
            query = query.category(category);
        }
        if self.available_only {
            query = query.only_available();
        }
        query
    }
}

/// Lists menu items matching the query, one page at a time.
pub fn list_menu_items<R>(repo: &R, query: MenuItemsQuery) -> ServiceResult<Paginated<MenuItem>>
where
    R: MenuItemReader + ?Sized,
{
    let page = query.page.unwrap_or(1);
    let (total, items) = repo.list_menu_items(query.into_list_query())?;
    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE).max(1);
    Ok(Paginated::new(items, page, total_pages))
}

pub fn get_menu_item<R>(repo: &R, item_id: i32) -> ServiceResult<MenuItem>
where
    R: MenuItemReader + ?Sized,
{
    repo.get_menu_item_by_id(item_id)?
        .ok_or_else(|| ServiceError::NotFound(format!("menu item {item_id}")))
}

/// Creates a menu item after checking that every recipe ingredient exists.
pub fn create_menu_item<R>(repo: &R, form: AddMenuItemForm) -> ServiceResult<MenuItem>
where
    R: MenuItemReader + MenuItemWriter + IngredientReader + ?Sized,
{
    let new_item = form
        .into_new_menu_item()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    for row in &new_item.ingredients {
        if repo.get_ingredient_by_id(row.ingredient_id)?.is_none() {
            return Err(ServiceError::NotFound(format!(
                "ingredient {}",
                row.ingredient_id
            )));
        }
    }

    Ok(repo.create_menu_item(&new_item)?)
}

/// Applies a partial update to a menu item. A submitted ingredient list
/// replaces the existing recipe wholesale.
pub fn update_menu_item<R>(repo: &R, item_id: i32, form: EditMenuItemForm) -> ServiceResult<MenuItem>
where
    R: MenuItemReader + MenuItemWriter + IngredientReader + ?Sized,
{
    let updates = form
        .into_update_menu_item()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if let Some(ingredients) = &updates.ingredients {
        for row in ingredients {
            if repo.get_ingredient_by_id(row.ingredient_id)?.is_none() {
                return Err(ServiceError::NotFound(format!(
                    "ingredient {}",
                    row.ingredient_id
                )));
            }
        }
    }

    Ok(repo.update_menu_item(item_id, &updates)?)
}

pub fn delete_menu_item<R>(repo: &R, item_id: i32) -> ServiceResult<()>
where
    R: MenuItemWriter + ?Sized,
{
    Ok(repo.delete_menu_item(item_id)?)
}

pub fn list_ingredients<R>(repo: &R) -> ServiceResult<Vec<Ingredient>>
where
    R: IngredientReader + ?Sized,
{
    Ok(repo.list_ingredients()?)
}

pub fn create_ingredient<R>(repo: &R, form: AddIngredientForm) -> ServiceResult<Ingredient>
where
    R: IngredientWriter + ?Sized,
{
    let new_ingredient = form
        .into_new_ingredient()
        .map_err(|err| ServiceError::Form(err.to_string()))?;
    Ok(repo.create_ingredient(&new_ingredient)?)
}
