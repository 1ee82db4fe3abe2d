use chrono::{NaiveDate, Weekday};
use mockall::mock;

use super::{
    CustomerReader, CustomerWriter, IngredientReader, IngredientWriter, InventoryReader,
    InventoryWriter, LocationReader, LocationWriter, MenuItemReader, MenuItemWriter,
    NotificationReader, NotificationWriter, OrderReader, OrderWriter, ReportReader, StaffReader,
    StaffWriter, UtilityReader, UtilityWriter,
};
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
use crate::repository::errors::RepositoryResult;

mock! {
    pub MenuItemReader {}

    impl MenuItemReader for MenuItemReader {
        fn get_menu_item_by_id(&self, id: i32) -> RepositoryResult<Option<MenuItem>>;
        fn list_menu_items(&self, query: MenuItemListQuery) -> RepositoryResult<(usize, Vec<MenuItem>)>;
    }
}

mock! {
    pub MenuItemWriter {}

    impl MenuItemWriter for MenuItemWriter {
        fn create_menu_item(&self, new_item: &NewMenuItem) -> RepositoryResult<MenuItem>;
        fn update_menu_item(&self, item_id: i32, updates: &UpdateMenuItem) -> RepositoryResult<MenuItem>;
        fn delete_menu_item(&self, item_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub IngredientReader {}

    impl IngredientReader for IngredientReader {
        fn get_ingredient_by_id(&self, id: i32) -> RepositoryResult<Option<Ingredient>>;
        fn list_ingredients(&self) -> RepositoryResult<Vec<Ingredient>>;
    }
}

mock! {
    pub IngredientWriter {}

    impl IngredientWriter for IngredientWriter {
        fn create_ingredient(&self, new_ingredient: &NewIngredient) -> RepositoryResult<Ingredient>;
    }
}

mock! {
    pub CustomerReader {}

    impl CustomerReader for CustomerReader {
        fn get_customer_by_id(&self, id: i32) -> RepositoryResult<Option<Customer>>;
        fn get_customer_by_email(&self, email: &str) -> RepositoryResult<Option<Customer>>;
        fn get_customer_by_phone(&self, phone: &str) -> RepositoryResult<Option<Customer>>;
    }
}

mock! {
    pub CustomerWriter {}

    impl CustomerWriter for CustomerWriter {
        fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
    }
}

mock! {
    pub StaffReader {}

    impl StaffReader for StaffReader {
        fn get_staff_by_id(&self, id: i32) -> RepositoryResult<Option<Staff>>;
        fn get_staff_by_email(&self, email: &str) -> RepositoryResult<Option<Staff>>;
        fn list_staff(&self) -> RepositoryResult<Vec<Staff>>;
        fn list_managers(&self) -> RepositoryResult<Vec<Staff>>;
        fn find_staff_on_shift(&self, location_id: i32, weekday: Weekday) -> RepositoryResult<Option<Staff>>;
        fn list_shifts(&self, location_id: Option<i32>) -> RepositoryResult<Vec<Shift>>;
    }
}

mock! {
    pub StaffWriter {}

    impl StaffWriter for StaffWriter {
        fn create_staff(&self, new_staff: &NewStaff) -> RepositoryResult<Staff>;
        fn create_shift(&self, new_shift: &NewShift) -> RepositoryResult<Shift>;
        fn delete_shift(&self, shift_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub LocationReader {}

    impl LocationReader for LocationReader {
        fn get_location_by_id(&self, id: i32) -> RepositoryResult<Option<Location>>;
        fn list_locations(&self) -> RepositoryResult<Vec<Location>>;
        fn list_active_locations(&self) -> RepositoryResult<Vec<ActiveLocation>>;
        fn get_active_location_for(&self, date: NaiveDate) -> RepositoryResult<Option<(ActiveLocation, Location)>>;
    }
}

mock! {
    pub LocationWriter {}

    impl LocationWriter for LocationWriter {
        fn create_location(&self, new_location: &NewLocation) -> RepositoryResult<Location>;
        fn create_active_location(&self, new_active: &NewActiveLocation) -> RepositoryResult<ActiveLocation>;
        fn delete_active_location(&self, active_location_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub OrderReader {}

    impl OrderReader for OrderReader {
        fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
        fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<(usize, Vec<Order>)>;
    }
}

mock! {
    pub OrderWriter {}

    impl OrderWriter for OrderWriter {
        fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
        fn update_order_item_status(&self, order_id: i32, item_id: i32, status: OrderItemStatus) -> RepositoryResult<OrderItem>;
    }
}

mock! {
    pub InventoryReader {}

    impl InventoryReader for InventoryReader {
        fn get_inventory_item_by_id(&self, id: i32) -> RepositoryResult<Option<InventoryItem>>;
        fn list_inventory_items(&self, query: InventoryListQuery) -> RepositoryResult<(usize, Vec<InventoryItem>)>;
    }
}

mock! {
    pub InventoryWriter {}

    impl InventoryWriter for InventoryWriter {
        fn create_inventory_item(&self, new_item: &NewInventoryItem) -> RepositoryResult<InventoryItem>;
        fn update_inventory_item(&self, item_id: i32, updates: &UpdateInventoryItem) -> RepositoryResult<InventoryItem>;
        fn delete_inventory_item(&self, item_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub UtilityReader {}

    impl UtilityReader for UtilityReader {
        fn list_utility_bills(&self, query: UtilityListQuery) -> RepositoryResult<Vec<UtilityBill>>;
    }
}

mock! {
    pub UtilityWriter {}

    impl UtilityWriter for UtilityWriter {
        fn create_utility_bill(&self, new_bill: &NewUtilityBill) -> RepositoryResult<UtilityBill>;
        fn delete_utility_bill(&self, bill_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub NotificationReader {}

    impl NotificationReader for NotificationReader {
        fn list_notifications(&self, staff_id: i32, unread_only: bool) -> RepositoryResult<Vec<Notification>>;
    }
}

mock! {
    pub NotificationWriter {}

    impl NotificationWriter for NotificationWriter {
        fn create_notifications(&self, new_notifications: &[NewNotification]) -> RepositoryResult<usize>;
        fn mark_notification_read(&self, notification_id: i32, staff_id: i32) -> RepositoryResult<()>;
        fn mark_all_notifications_read(&self, staff_id: i32) -> RepositoryResult<usize>;
    }
}

mock! {
    pub ReportReader {}

    impl ReportReader for ReportReader {
        fn location_profit(&self, range: ReportRange) -> RepositoryResult<Vec<LocationProfitRow>>;
        fn item_popularity(&self, range: ReportRange) -> RepositoryResult<Vec<ItemPopularityRow>>;
        fn employee_performance(&self, range: ReportRange) -> RepositoryResult<Vec<EmployeePerformanceRow>>;
    }
}
