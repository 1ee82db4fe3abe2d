use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::inventory::{
    InventoryItem as DomainInventoryItem, NewInventoryItem as DomainNewInventoryItem,
    UpdateInventoryItem as DomainUpdateInventoryItem,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::inventory_items)]
pub struct InventoryItem {
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    pub unit: String,
    pub restock_threshold: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::inventory_items)]
pub struct NewInventoryItem<'a> {
    pub name: &'a str,
    pub quantity: i32,
    pub unit: &'a str,
    pub restock_threshold: i32,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::inventory_items)]
pub struct UpdateInventoryItem<'a> {
    pub name: Option<&'a str>,
    pub quantity: Option<i32>,
    pub unit: Option<&'a str>,
    pub restock_threshold: Option<i32>,
    pub updated_at: NaiveDateTime,
}

impl From<InventoryItem> for DomainInventoryItem {
    fn from(value: InventoryItem) -> Self {
        Self {
            id: value.id,
            name: value.name,
            quantity: value.quantity,
            unit: value.unit,
            restock_threshold: value.restock_threshold,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewInventoryItem> for NewInventoryItem<'a> {
    fn from(value: &'a DomainNewInventoryItem) -> Self {
        Self {
            name: value.name.as_str(),
            quantity: value.quantity,
            unit: value.unit.as_str(),
            restock_threshold: value.restock_threshold,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateInventoryItem> for UpdateInventoryItem<'a> {
    fn from(value: &'a DomainUpdateInventoryItem) -> Self {
        Self {
            name: value.name.as_deref(),
            quantity: value.quantity,
            unit: value.unit.as_deref(),
            restock_threshold: value.restock_threshold,
            updated_at: value.updated_at,
        }
    }
}
