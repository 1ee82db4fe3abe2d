use chrono::{NaiveDate, Weekday};

use crate::db::{DbConnection, DbPool};
use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::ingredient::{Ingredient, NewIngredient};
use crate::domain::inventory::{
    InventoryItem, InventoryListQuery, NewInventoryItem, UpdateInventoryItem,
};
use crate::domain::location::{ActiveLocation, Location, NewActiveLocation, NewLocation};
use crate::domain::menu_item::{MenuItem, MenuItemListQuery, NewMenuItem, UpdateMenuItem};
use crate::domain::notification::{NewNotification, Notification};
use crate::domain::order::{NewOrder, Order, OrderItem, OrderItemStatus, OrderListQuery};
use crate::domain::report::{
    EmployeePerformanceRow, ItemPopularityRow, LocationProfitRow, ReportRange,
};
use crate::domain::staff::{NewShift, NewStaff, Shift, Staff};
use crate::domain::utility::{NewUtilityBill, UtilityBill, UtilityListQuery};

pub mod customer;
pub mod errors;
pub mod ingredient;
pub mod inventory;
pub mod location;
pub mod menu_item;
pub mod notification;
pub mod order;
pub mod report;
pub mod staff;
pub mod utility;

#[cfg(test)]
pub mod mock;

pub use errors::{RepositoryError, RepositoryResult};

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over menu items and their recipes.
pub trait MenuItemReader {
    fn get_menu_item_by_id(&self, id: i32) -> RepositoryResult<Option<MenuItem>>;
    fn list_menu_items(&self, query: MenuItemListQuery) -> RepositoryResult<(usize, Vec<MenuItem>)>;
}

/// Write operations over menu items and their recipes.
pub trait MenuItemWriter {
    fn create_menu_item(&self, new_item: &NewMenuItem) -> RepositoryResult<MenuItem>;
    fn update_menu_item(&self, item_id: i32, updates: &UpdateMenuItem) -> RepositoryResult<MenuItem>;
    fn delete_menu_item(&self, item_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over ingredient records.
pub trait IngredientReader {
    fn get_ingredient_by_id(&self, id: i32) -> RepositoryResult<Option<Ingredient>>;
    fn list_ingredients(&self) -> RepositoryResult<Vec<Ingredient>>;
}

/// Write operations over ingredient records.
pub trait IngredientWriter {
    fn create_ingredient(&self, new_ingredient: &NewIngredient) -> RepositoryResult<Ingredient>;
}

/// Read-only operations over customer accounts.
pub trait CustomerReader {
    fn get_customer_by_id(&self, id: i32) -> RepositoryResult<Option<Customer>>;
    fn get_customer_by_email(&self, email: &str) -> RepositoryResult<Option<Customer>>;
    fn get_customer_by_phone(&self, phone: &str) -> RepositoryResult<Option<Customer>>;
}

/// Write operations over customer accounts.
pub trait CustomerWriter {
    fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
}

/// Read-only operations over staff accounts and shifts.
pub trait StaffReader {
    fn get_staff_by_id(&self, id: i32) -> RepositoryResult<Option<Staff>>;
    fn get_staff_by_email(&self, email: &str) -> RepositoryResult<Option<Staff>>;
    fn list_staff(&self) -> RepositoryResult<Vec<Staff>>;
    fn list_managers(&self) -> RepositoryResult<Vec<Staff>>;
    /// Find a staff member on shift at `location_id` on `weekday`, used to
    /// assign online orders.
    fn find_staff_on_shift(
        &self,
        location_id: i32,
        weekday: Weekday,
    ) -> RepositoryResult<Option<Staff>>;
    fn list_shifts(&self, location_id: Option<i32>) -> RepositoryResult<Vec<Shift>>;
}

/// Write operations over staff accounts and shifts.
pub trait StaffWriter {
    fn create_staff(&self, new_staff: &NewStaff) -> RepositoryResult<Staff>;
    fn create_shift(&self, new_shift: &NewShift) -> RepositoryResult<Shift>;
    fn delete_shift(&self, shift_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over locations and their operating windows.
pub trait LocationReader {
    fn get_location_by_id(&self, id: i32) -> RepositoryResult<Option<Location>>;
    fn list_locations(&self) -> RepositoryResult<Vec<Location>>;
    fn list_active_locations(&self) -> RepositoryResult<Vec<ActiveLocation>>;
    /// Resolve the operating window and location in effect on `date`, if any.
    fn get_active_location_for(
        &self,
        date: NaiveDate,
    ) -> RepositoryResult<Option<(ActiveLocation, Location)>>;
}

/// Write operations over locations and their operating windows.
pub trait LocationWriter {
    fn create_location(&self, new_location: &NewLocation) -> RepositoryResult<Location>;
    fn create_active_location(
        &self,
        new_active: &NewActiveLocation,
    ) -> RepositoryResult<ActiveLocation>;
    fn delete_active_location(&self, active_location_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over orders.
pub trait OrderReader {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<(usize, Vec<Order>)>;
}

/// Write operations over orders.
pub trait OrderWriter {
    /// Insert the order, all of its lines and customization rows, and deduct
    /// redeemed points from the customer, in a single transaction.
    fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
    fn update_order_item_status(
        &self,
        order_id: i32,
        item_id: i32,
        status: OrderItemStatus,
    ) -> RepositoryResult<OrderItem>;
}

/// Read-only operations over stock items.
pub trait InventoryReader {
    fn get_inventory_item_by_id(&self, id: i32) -> RepositoryResult<Option<InventoryItem>>;
    fn list_inventory_items(
        &self,
        query: InventoryListQuery,
    ) -> RepositoryResult<(usize, Vec<InventoryItem>)>;
}

/// Write operations over stock items.
pub trait InventoryWriter {
    fn create_inventory_item(&self, new_item: &NewInventoryItem) -> RepositoryResult<InventoryItem>;
    fn update_inventory_item(
        &self,
        item_id: i32,
        updates: &UpdateInventoryItem,
    ) -> RepositoryResult<InventoryItem>;
    fn delete_inventory_item(&self, item_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over utility bills.
pub trait UtilityReader {
    fn list_utility_bills(&self, query: UtilityListQuery) -> RepositoryResult<Vec<UtilityBill>>;
}

/// Write operations over utility bills.
pub trait UtilityWriter {
    fn create_utility_bill(&self, new_bill: &NewUtilityBill) -> RepositoryResult<UtilityBill>;
    fn delete_utility_bill(&self, bill_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over staff notifications.
pub trait NotificationReader {
    fn list_notifications(
        &self,
        staff_id: i32,
        unread_only: bool,
    ) -> RepositoryResult<Vec<Notification>>;
}

/// Write operations over staff notifications.
pub trait NotificationWriter {
    fn create_notifications(&self, new_notifications: &[NewNotification])
    -> RepositoryResult<usize>;
    fn mark_notification_read(&self, notification_id: i32, staff_id: i32) -> RepositoryResult<()>;
    fn mark_all_notifications_read(&self, staff_id: i32) -> RepositoryResult<usize>;
}

/// Date-ranged sales aggregations.
pub trait ReportReader {
    fn location_profit(&self, range: ReportRange) -> RepositoryResult<Vec<LocationProfitRow>>;
    fn item_popularity(&self, range: ReportRange) -> RepositoryResult<Vec<ItemPopularityRow>>;
    fn employee_performance(
        &self,
        range: ReportRange,
    ) -> RepositoryResult<Vec<EmployeePerformanceRow>>;
}
