use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::order::{
    NewOrder as DomainNewOrder, NewOrderItem as DomainNewOrderItem,
    NewOrderItemCustomization as DomainNewCustomization, Order as DomainOrder,
    OrderItem as DomainOrderItem, OrderItemCustomization as DomainCustomization,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::orders)]
pub struct Order {
    pub id: i32,
    pub customer_id: Option<i32>,
    pub staff_id: i32,
    pub location_name: String,
    pub is_online: bool,
    pub payment_method: String,
    pub points_used: i64,
    pub total_cents: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::order_items)]
#[diesel(belongs_to(Order, foreign_key = order_id))]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub menu_item_id: Option<i32>,
    pub name: String,
    pub price_cents: i64,
    pub quantity: i32,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::order_item_customizations)]
#[diesel(belongs_to(OrderItem, foreign_key = order_item_id))]
pub struct OrderItemCustomization {
    pub id: i32,
    pub order_item_id: i32,
    pub ingredient_id: Option<i32>,
    pub ingredient_name: String,
    pub action: String,
    pub quantity_delta: i32,
    pub price_delta_cents: i64,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder<'a> {
    pub customer_id: Option<i32>,
    pub staff_id: i32,
    pub location_name: &'a str,
    pub is_online: bool,
    pub payment_method: &'a str,
    pub points_used: i64,
    pub total_cents: i64,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::order_items)]
pub struct NewOrderItem<'a> {
    pub order_id: i32,
    pub menu_item_id: Option<i32>,
    pub name: &'a str,
    pub price_cents: i64,
    pub quantity: i32,
    pub status: &'a str,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::order_item_customizations)]
pub struct NewOrderItemCustomization<'a> {
    pub order_item_id: i32,
    pub ingredient_id: Option<i32>,
    pub ingredient_name: &'a str,
    pub action: &'a str,
    pub quantity_delta: i32,
    pub price_delta_cents: i64,
}

impl Order {
    pub fn into_domain(
        self,
        items: Vec<(OrderItem, Vec<OrderItemCustomization>)>,
    ) -> DomainOrder {
        DomainOrder {
            id: self.id,
            customer_id: self.customer_id,
            staff_id: self.staff_id,
            location_name: self.location_name,
            is_online: self.is_online,
            payment_method: self.payment_method.as_str().into(),
            points_used: self.points_used,
            total_cents: self.total_cents,
            items: items
                .into_iter()
                .map(|(item, customizations)| item.into_domain(customizations))
                .collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl OrderItem {
    pub fn into_domain(self, customizations: Vec<OrderItemCustomization>) -> DomainOrderItem {
        DomainOrderItem {
            id: self.id,
            menu_item_id: self.menu_item_id,
            name: self.name,
            price_cents: self.price_cents,
            quantity: self.quantity,
            status: self.status.as_str().into(),
            customizations: customizations
                .into_iter()
                .map(OrderItemCustomization::into_domain)
                .collect(),
        }
    }
}

impl OrderItemCustomization {
    pub fn into_domain(self) -> DomainCustomization {
        DomainCustomization {
            ingredient_id: self.ingredient_id,
            ingredient_name: self.ingredient_name,
            action: self.action.as_str().into(),
            quantity_delta: self.quantity_delta,
            price_delta_cents: self.price_delta_cents,
        }
    }
}

impl<'a> From<&'a DomainNewOrder> for NewOrder<'a> {
    fn from(value: &'a DomainNewOrder) -> Self {
        Self {
            customer_id: value.customer_id,
            staff_id: value.staff_id,
            location_name: value.location_name.as_str(),
            is_online: value.is_online,
            payment_method: value.payment_method.into(),
            points_used: value.points_used,
            total_cents: value.total_cents,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> NewOrderItem<'a> {
    pub fn from_domain(
        order_id: i32,
        value: &'a DomainNewOrderItem,
        updated_at: NaiveDateTime,
    ) -> Self {
        Self {
            order_id,
            menu_item_id: value.menu_item_id,
            name: value.name.as_str(),
            price_cents: value.price_cents,
            quantity: value.quantity,
            status: crate::domain::order::OrderItemStatus::default().into(),
            updated_at,
        }
    }
}

impl<'a> NewOrderItemCustomization<'a> {
    pub fn from_domain(order_item_id: i32, value: &'a DomainNewCustomization) -> Self {
        Self {
            order_item_id,
            ingredient_id: value.ingredient_id,
            ingredient_name: value.ingredient_name.as_str(),
            action: value.action.into(),
            quantity_delta: value.quantity_delta,
            price_delta_cents: value.price_delta_cents,
        }
    }
}
