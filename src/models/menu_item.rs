use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::menu_item::{
    MenuItem as DomainMenuItem, MenuItemIngredient as DomainMenuItemIngredient,
    NewMenuItem as DomainNewMenuItem, NewMenuItemIngredient as DomainNewMenuItemIngredient,
    UpdateMenuItem as DomainUpdateMenuItem,
};
use crate::models::ingredient::Ingredient;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::menu_items)]
pub struct MenuItem {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub category: String,
    pub is_available: bool,
    pub image_path: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::menu_item_ingredients)]
#[diesel(belongs_to(MenuItem, foreign_key = menu_item_id))]
pub struct MenuItemIngredient {
    pub id: i32,
    pub menu_item_id: i32,
    pub ingredient_id: i32,
    pub quantity: i32,
    pub substitutable: bool,
    pub removable: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::menu_items)]
pub struct NewMenuItem<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub price_cents: i64,
    pub category: &'a str,
    pub is_available: bool,
    pub image_path: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::menu_item_ingredients)]
pub struct NewMenuItemIngredient {
    pub menu_item_id: i32,
    pub ingredient_id: i32,
    pub quantity: i32,
    pub substitutable: bool,
    pub removable: bool,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::menu_items)]
pub struct UpdateMenuItem<'a> {
    pub name: Option<&'a str>,
    pub description: Option<Option<&'a str>>,
    pub price_cents: Option<i64>,
    pub category: Option<&'a str>,
    pub is_available: Option<bool>,
    pub image_path: Option<Option<&'a str>>,
    pub updated_at: NaiveDateTime,
}

impl MenuItem {
    pub fn into_domain(
        self,
        ingredients: Vec<(MenuItemIngredient, Ingredient)>,
    ) -> DomainMenuItem {
        DomainMenuItem {
            id: self.id,
            name: self.name,
            description: self.description,
            price_cents: self.price_cents,
            category: self.category.as_str().into(),
            is_available: self.is_available,
            image_path: self.image_path,
            ingredients: ingredients
                .into_iter()
                .map(|(recipe, ingredient)| DomainMenuItemIngredient {
                    ingredient_id: ingredient.id,
                    name: ingredient.name,
                    price_cents: ingredient.price_cents,
                    quantity: recipe.quantity,
                    substitutable: recipe.substitutable,
                    removable: recipe.removable,
                })
                .collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<(MenuItem, Vec<(MenuItemIngredient, Ingredient)>)> for DomainMenuItem {
    fn from(value: (MenuItem, Vec<(MenuItemIngredient, Ingredient)>)) -> Self {
        value.0.into_domain(value.1)
    }
}

impl<'a> From<&'a DomainNewMenuItem> for NewMenuItem<'a> {
    fn from(value: &'a DomainNewMenuItem) -> Self {
        Self {
            name: value.name.as_str(),
            description: value.description.as_deref(),
            price_cents: value.price_cents,
            category: value.category.into(),
            is_available: value.is_available,
            image_path: value.image_path.as_deref(),
            updated_at: value.updated_at,
        }
    }
}

impl NewMenuItemIngredient {
    pub fn from_domain(menu_item_id: i32, value: &DomainNewMenuItemIngredient) -> Self {
        Self {
            menu_item_id,
            ingredient_id: value.ingredient_id,
            quantity: value.quantity,
            substitutable: value.substitutable,
            removable: value.removable,
        }
    }
}

impl<'a> From<&'a DomainUpdateMenuItem> for UpdateMenuItem<'a> {
    fn from(value: &'a DomainUpdateMenuItem) -> Self {
        Self {
            name: value.name.as_deref(),
            description: value
                .description
                .as_ref()
                .map(|description| description.as_deref()),
            price_cents: value.price_cents,
            category: value.category.map(|category| category.into()),
            is_available: value.is_available,
            image_path: value
                .image_path
                .as_ref()
                .map(|image_path| image_path.as_deref()),
            updated_at: value.updated_at,
        }
    }
}
