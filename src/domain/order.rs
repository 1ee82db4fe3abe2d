use chrono::{NaiveDateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Accepted payment methods.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Card,
    IncentivePoints,
}

impl From<&str> for PaymentMethod {
    fn from(value: &str) -> Self {
        match value {
            "cash" => Self::Cash,
            "incentive_points" => Self::IncentivePoints,
            _ => Self::Card,
        }
    }
}

impl From<PaymentMethod> for &'static str {
    fn from(value: PaymentMethod) -> Self {
        match value {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::IncentivePoints => "incentive_points",
        }
    }
}

/// Possible lifecycle states for a single order line.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderItemStatus {
    /// Line has been placed but the kitchen has not started it.
    Pending,
    /// Line is being prepared.
    InProgress,
    /// Line has been handed to the customer.
    Completed,
    /// Line was cancelled before completion.
    Cancelled,
    /// Line was completed and later refunded.
    Refunded,
}

impl Default for OrderItemStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl OrderItemStatus {
    /// Whether a line may move from `self` to `next`.
    pub fn can_transition_to(self, next: OrderItemStatus) -> bool {
        use OrderItemStatus::*;
        matches!(
            (self, next),
            (Pending, InProgress)
                | (Pending, Cancelled)
                | (InProgress, Completed)
                | (InProgress, Cancelled)
                | (Completed, Refunded)
        )
    }
}

impl From<&str> for OrderItemStatus {
    fn from(value: &str) -> Self {
        match value {
            "in_progress" => Self::InProgress,
            "completed" => Self::Completed,
            "cancelled" => Self::Cancelled,
            "refunded" => Self::Refunded,
            _ => Self::Pending,
        }
    }
}

impl From<OrderItemStatus> for &'static str {
    fn from(value: OrderItemStatus) -> Self {
        match value {
            OrderItemStatus::Pending => "pending",
            OrderItemStatus::InProgress => "in_progress",
            OrderItemStatus::Completed => "completed",
            OrderItemStatus::Cancelled => "cancelled",
            OrderItemStatus::Refunded => "refunded",
        }
    }
}

/// How a customization changes an order line relative to the default recipe.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CustomizationAction {
    Add,
    Remove,
    Substitute,
}

impl From<&str> for CustomizationAction {
    fn from(value: &str) -> Self {
        match value {
            "remove" => Self::Remove,
            "substitute" => Self::Substitute,
            _ => Self::Add,
        }
    }
}

impl From<CustomizationAction> for &'static str {
    fn from(value: CustomizationAction) -> Self {
        match value {
            CustomizationAction::Add => "add",
            CustomizationAction::Remove => "remove",
            CustomizationAction::Substitute => "substitute",
        }
    }
}

/// An ingredient delta applied to one order line.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OrderItemCustomization {
    /// Ingredient the delta refers to, if the record still exists.
    pub ingredient_id: Option<i32>,
    /// Ingredient name captured at order time.
    pub ingredient_name: String,
    /// Kind of delta applied.
    pub action: CustomizationAction,
    /// How many ingredient units the delta covers.
    pub quantity_delta: i32,
    /// Price change in cents caused by the delta.
    pub price_delta_cents: i64,
}

/// One line of an order, priced at order time.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OrderItem {
    /// Unique identifier of the order line.
    pub id: i32,
    /// Menu item the line was created from, if it still exists.
    pub menu_item_id: Option<i32>,
    /// Menu item name captured at order time.
    pub name: String,
    /// Unit price in cents captured at order time.
    pub price_cents: i64,
    /// Number of units ordered.
    pub quantity: i32,
    /// Current lifecycle status of the line.
    pub status: OrderItemStatus,
    /// Ingredient deltas applied to the line.
    pub customizations: Vec<OrderItemCustomization>,
}

/// Domain representation of a placed order. Order headers are immutable after
/// creation; only per-line status moves.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Order {
    /// Unique identifier of the order.
    pub id: i32,
    /// Customer the order belongs to, or `None` for guest orders.
    pub customer_id: Option<i32>,
    /// Staff member who handled the order.
    pub staff_id: i32,
    /// Location name captured at order time.
    pub location_name: String,
    /// Whether the order was placed online rather than at the counter.
    pub is_online: bool,
    /// Payment method used.
    pub payment_method: PaymentMethod,
    /// Incentive points redeemed against the total.
    pub points_used: i64,
    /// Grand total in cents after tax and point redemption.
    pub total_cents: i64,
    /// Order lines.
    pub items: Vec<OrderItem>,
    /// Timestamp for when the order was placed.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the order.
    pub updated_at: NaiveDateTime,
}

/// Customization attached to a new order line.
#[derive(Debug, Clone)]
pub struct NewOrderItemCustomization {
    pub ingredient_id: Option<i32>,
    pub ingredient_name: String,
    pub action: CustomizationAction,
    pub quantity_delta: i32,
    pub price_delta_cents: i64,
}

/// Line attached to a new order.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub menu_item_id: Option<i32>,
    pub name: String,
    pub price_cents: i64,
    pub quantity: i32,
    pub customizations: Vec<NewOrderItemCustomization>,
}

/// Payload required to insert a new order with all of its lines.
#[derive(Debug, Clone)]
pub struct NewOrder {
    /// Customer placing the order, or `None` for guest orders.
    pub customer_id: Option<i32>,
    /// Staff member handling the order.
    pub staff_id: i32,
    /// Location name captured at order time.
    pub location_name: String,
    /// Whether the order was placed online.
    pub is_online: bool,
    /// Payment method used.
    pub payment_method: PaymentMethod,
    /// Incentive points redeemed against the total.
    pub points_used: i64,
    /// Grand total in cents after tax and point redemption.
    pub total_cents: i64,
    /// Order lines.
    pub items: Vec<NewOrderItem>,
    /// Timestamp captured when the payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewOrder {
    /// Build a new order payload with the supplied details and current timestamp.
    pub fn new(
        staff_id: i32,
        location_name: impl Into<String>,
        payment_method: PaymentMethod,
        total_cents: i64,
    ) -> Self {
        Self {
            customer_id: None,
            staff_id,
            location_name: location_name.into(),
            is_online: false,
            payment_method,
            points_used: 0,
            total_cents,
            items: Vec::new(),
            updated_at: chrono::Local::now().naive_utc(),
        }
    }

    /// Attach a customer identifier to the payload.
    pub fn with_customer_id(mut self, customer_id: i32) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    /// Mark the order as placed online.
    pub fn online(mut self) -> Self {
        self.is_online = true;
        self
    }

    /// Record redeemed incentive points on the payload.
    pub fn with_points_used(mut self, points_used: i64) -> Self {
        self.points_used = points_used;
        self
    }

    /// Attach the order lines to the payload.
    pub fn with_items(mut self, items: Vec<NewOrderItem>) -> Self {
        self.items = items;
        self
    }
}

/// Query definition used to list orders.
#[derive(Debug, Clone, Default)]
pub struct OrderListQuery {
    /// Optional customer filter.
    pub customer_id: Option<i32>,
    /// Optional staff filter.
    pub staff_id: Option<i32>,
    /// Optional first order date included.
    pub from: Option<NaiveDate>,
    /// Optional last order date included.
    pub to: Option<NaiveDate>,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl OrderListQuery {
    /// Construct a query that targets every order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results by customer identifier.
    pub fn customer_id(mut self, customer_id: i32) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    /// Filter the results by handling staff member.
    pub fn staff_id(mut self, staff_id: i32) -> Self {
        self.staff_id = Some(staff_id);
        self
    }

    /// Keep only orders placed between `from` and `to`, inclusive.
    pub fn between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
