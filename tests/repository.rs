use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};

use foodtruck_pos::domain::customer::NewCustomer;
use foodtruck_pos::domain::ingredient::NewIngredient;
use foodtruck_pos::domain::inventory::{InventoryListQuery, NewInventoryItem, UpdateInventoryItem};
use foodtruck_pos::domain::location::{NewActiveLocation, NewLocation};
use foodtruck_pos::domain::menu_item::{
    Category, MenuItemListQuery, NewMenuItem, NewMenuItemIngredient, UpdateMenuItem,
};
use foodtruck_pos::domain::notification::NewNotification;
use foodtruck_pos::domain::order::{
    CustomizationAction, NewOrder, NewOrderItem, NewOrderItemCustomization, OrderItemStatus,
    OrderListQuery, PaymentMethod,
};
use foodtruck_pos::domain::staff::{NewShift, NewStaff, StaffRole};
use foodtruck_pos::domain::utility::{NewUtilityBill, UtilityListQuery};
use foodtruck_pos::repository::{
    CustomerReader, CustomerWriter, DieselRepository, IngredientWriter, InventoryReader,
    InventoryWriter, LocationReader, LocationWriter, MenuItemReader, MenuItemWriter,
    NotificationReader, NotificationWriter, OrderReader, OrderWriter, RepositoryError,
    StaffReader, StaffWriter, UtilityReader, UtilityWriter,
};

mod common;

fn seed_staff(repo: &DieselRepository, name: &str, role: StaffRole) -> i32 {
    repo.create_staff(&NewStaff::new(
        name,
        format!("{}@example.com", name.to_lowercase()),
        "5125550100",
        role,
        "hash",
    ))
    .expect("create staff")
    .id
}

fn seed_location(repo: &DieselRepository, name: &str) -> i32 {
    repo.create_location(&NewLocation::new(name, "1 Main St"))
        .expect("create location")
        .id
}

fn seed_taco(repo: &DieselRepository) -> (i32, i32) {
    let onion = repo
        .create_ingredient(&NewIngredient::new("Onion", 25))
        .expect("create ingredient");
    let item = repo
        .create_menu_item(
            &NewMenuItem::new("Taco", 450, Category::Entree).with_ingredients(vec![
                NewMenuItemIngredient {
                    ingredient_id: onion.id,
                    quantity: 1,
                    substitutable: false,
                    removable: true,
                },
            ]),
        )
        .expect("create menu item");
    (item.id, onion.id)
}

#[test]
fn test_menu_item_repository_crud() {
    let test_db = common::TestDb::new("test_menu_item_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let (item_id, onion_id) = seed_taco(&repo);

    let item = repo
        .get_menu_item_by_id(item_id)
        .expect("get menu item")
        .expect("menu item should exist");
    assert_eq!(item.name, "Taco");
    assert_eq!(item.ingredients.len(), 1);
    assert_eq!(item.ingredients[0].ingredient_id, onion_id);
    assert_eq!(item.ingredients[0].price_cents, 25);
    assert!(item.ingredients[0].removable);

    let updated = repo
        .update_menu_item(
            item_id,
            &UpdateMenuItem::new().price_cents(475).available(false),
        )
        .expect("update menu item");
    assert_eq!(updated.price_cents, 475);
    assert!(!updated.is_available);
    // Recipe untouched when the update does not submit one.
    assert_eq!(updated.ingredients.len(), 1);

    let (total, available) = repo
        .list_menu_items(MenuItemListQuery::new().only_available())
        .expect("list menu items");
    assert_eq!(total, 0);
    assert!(available.is_empty());

    repo.delete_menu_item(item_id).expect("delete menu item");
    assert!(
        repo.get_menu_item_by_id(item_id)
            .expect("get menu item")
            .is_none()
    );
    assert!(matches!(
        repo.delete_menu_item(item_id),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn test_create_order_writes_one_order_and_one_row_per_item() {
    let test_db = common::TestDb::new("test_create_order_row_counts.db");
    let repo = DieselRepository::new(test_db.pool());

    let staff_id = seed_staff(&repo, "Sam", StaffRole::Cashier);
    let (item_id, onion_id) = seed_taco(&repo);

    let new_order = NewOrder::new(staff_id, "Downtown", PaymentMethod::Card, 1_299).with_items(vec![
        NewOrderItem {
            menu_item_id: Some(item_id),
            name: "Taco".to_string(),
            price_cents: 425,
            quantity: 2,
            customizations: vec![NewOrderItemCustomization {
                ingredient_id: Some(onion_id),
                ingredient_name: "Onion".to_string(),
                action: CustomizationAction::Remove,
                quantity_delta: 1,
                price_delta_cents: -25,
            }],
        },
        NewOrderItem {
            menu_item_id: Some(item_id),
            name: "Taco".to_string(),
            price_cents: 450,
            quantity: 1,
            customizations: Vec::new(),
        },
    ]);

    let order = repo.create_order(&new_order).expect("create order");
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[0].status, OrderItemStatus::Pending);
    assert_eq!(order.items[0].customizations.len(), 1);
    assert_eq!(order.items[0].customizations[0].price_delta_cents, -25);
    assert_eq!(order.items[1].customizations.len(), 0);

    let (total, orders) = repo.list_orders(OrderListQuery::new()).expect("list orders");
    assert_eq!(total, 1);
    assert_eq!(orders[0].id, order.id);
    assert_eq!(orders[0].items.len(), 2);
}

#[test]
fn test_create_order_rejects_points_beyond_balance() {
    let test_db = common::TestDb::new("test_create_order_points.db");
    let repo = DieselRepository::new(test_db.pool());

    let staff_id = seed_staff(&repo, "Sam", StaffRole::Cashier);
    let customer = repo
        .create_customer(&NewCustomer::new(
            "Ada",
            "ada@example.com",
            "5125550100",
            "hash",
        ))
        .expect("create customer");

    // Fresh accounts start with zero points, so any redemption must fail and
    // roll the whole order back.
    let over_redeeming = NewOrder::new(staff_id, "Downtown", PaymentMethod::Card, 0)
        .with_customer_id(customer.id)
        .with_points_used(100)
        .with_items(vec![NewOrderItem {
            menu_item_id: None,
            name: "Taco".to_string(),
            price_cents: 450,
            quantity: 1,
            customizations: Vec::new(),
        }]);

    let err = repo
        .create_order(&over_redeeming)
        .expect_err("expected redemption beyond balance to fail");
    assert!(matches!(err, RepositoryError::Conflict(_)));

    let (total, _) = repo.list_orders(OrderListQuery::new()).expect("list orders");
    assert_eq!(total, 0, "failed order must not leave rows behind");
}

#[test]
fn test_order_item_status_transitions_are_enforced() {
    let test_db = common::TestDb::new("test_order_item_status_transitions.db");
    let repo = DieselRepository::new(test_db.pool());

    let staff_id = seed_staff(&repo, "Sam", StaffRole::Cook);
    let order = repo
        .create_order(
            &NewOrder::new(staff_id, "Downtown", PaymentMethod::Cash, 450).with_items(vec![
                NewOrderItem {
                    menu_item_id: None,
                    name: "Taco".to_string(),
                    price_cents: 450,
                    quantity: 1,
                    customizations: Vec::new(),
                },
            ]),
        )
        .expect("create order");
    let item_id = order.items[0].id;

    let err = repo
        .update_order_item_status(order.id, item_id, OrderItemStatus::Completed)
        .expect_err("pending lines cannot complete directly");
    assert!(matches!(err, RepositoryError::Conflict(_)));

    let item = repo
        .update_order_item_status(order.id, item_id, OrderItemStatus::InProgress)
        .expect("move to in_progress");
    assert_eq!(item.status, OrderItemStatus::InProgress);

    let item = repo
        .update_order_item_status(order.id, item_id, OrderItemStatus::Completed)
        .expect("move to completed");
    assert_eq!(item.status, OrderItemStatus::Completed);

    // Wrong order id must not find the line.
    let err = repo
        .update_order_item_status(order.id + 1, item_id, OrderItemStatus::Refunded)
        .expect_err("expected lookup under wrong order to fail");
    assert!(matches!(err, RepositoryError::NotFound));
}

#[test]
fn test_active_location_resolution_honors_schedule() {
    let test_db = common::TestDb::new("test_active_location_resolution.db");
    let repo = DieselRepository::new(test_db.pool());

    let location_id = seed_location(&repo, "Downtown");

    let monday = NaiveDate::from_ymd_opt(2026, 8, 31).unwrap();
    assert_eq!(monday.weekday(), Weekday::Mon);

    repo.create_active_location(
        &NewActiveLocation::new(
            location_id,
            monday,
            NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
            vec![Weekday::Mon, Weekday::Wed],
        )
        .with_end_date(monday + chrono::Days::new(30)),
    )
    .expect("create active location");

    let resolved = repo
        .get_active_location_for(monday)
        .expect("resolve monday");
    let (active, location) = resolved.expect("monday is scheduled");
    assert_eq!(location.name, "Downtown");
    assert_eq!(active.location_id, location_id);

    // Tuesday is not in the weekday set.
    assert!(
        repo.get_active_location_for(monday + chrono::Days::new(1))
            .expect("resolve tuesday")
            .is_none()
    );

    // Past the end date.
    assert!(
        repo.get_active_location_for(monday + chrono::Days::new(35))
            .expect("resolve after end")
            .is_none()
    );
}

#[test]
fn test_find_staff_on_shift() {
    let test_db = common::TestDb::new("test_find_staff_on_shift.db");
    let repo = DieselRepository::new(test_db.pool());

    let cook_id = seed_staff(&repo, "Remy", StaffRole::Cook);
    let location_id = seed_location(&repo, "Downtown");

    repo.create_shift(&NewShift::new(cook_id, location_id, Weekday::Fri))
        .expect("create shift");

    let on_friday = repo
        .find_staff_on_shift(location_id, Weekday::Fri)
        .expect("lookup friday");
    assert_eq!(on_friday.expect("cook works fridays").id, cook_id);

    assert!(
        repo.find_staff_on_shift(location_id, Weekday::Sat)
            .expect("lookup saturday")
            .is_none()
    );
}

#[test]
fn test_inventory_low_stock_filter() {
    let test_db = common::TestDb::new("test_inventory_low_stock_filter.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_inventory_item(&NewInventoryItem::new("Tortillas", 40, "dozen", 10))
        .expect("create item");
    let beans = repo
        .create_inventory_item(&NewInventoryItem::new("Beans", 3, "kg", 5))
        .expect("create item");

    let (total, low) = repo
        .list_inventory_items(InventoryListQuery::new().low_stock_only())
        .expect("list low stock");
    assert_eq!(total, 1);
    assert_eq!(low[0].id, beans.id);
    assert!(low[0].needs_restock());

    let updated = repo
        .update_inventory_item(beans.id, &UpdateInventoryItem::new().quantity(50))
        .expect("restock");
    assert!(!updated.needs_restock());

    let (total, _) = repo
        .list_inventory_items(InventoryListQuery::new().low_stock_only())
        .expect("list low stock");
    assert_eq!(total, 0);
}

#[test]
fn test_notifications_are_scoped_to_their_staff_member() {
    let test_db = common::TestDb::new("test_notifications_scope.db");
    let repo = DieselRepository::new(test_db.pool());

    let manager_id = seed_staff(&repo, "Mia", StaffRole::Manager);
    let other_id = seed_staff(&repo, "Sam", StaffRole::Cashier);

    repo.create_notifications(&[
        NewNotification::new(manager_id, "Low stock: Beans"),
        NewNotification::new(manager_id, "Low stock: Tortillas"),
    ])
    .expect("create notifications");

    let unread = repo
        .list_notifications(manager_id, true)
        .expect("list unread");
    assert_eq!(unread.len(), 2);

    // Another staff member cannot mark someone else's notification as read.
    let err = repo
        .mark_notification_read(unread[0].id, other_id)
        .expect_err("expected cross-staff mark to fail");
    assert!(matches!(err, RepositoryError::NotFound));

    repo.mark_notification_read(unread[0].id, manager_id)
        .expect("mark read");
    assert_eq!(
        repo.list_notifications(manager_id, true)
            .expect("list unread")
            .len(),
        1
    );

    assert_eq!(
        repo.mark_all_notifications_read(manager_id)
            .expect("mark all read"),
        1
    );
    assert!(
        repo.list_notifications(manager_id, true)
            .expect("list unread")
            .is_empty()
    );
}

#[test]
fn test_utility_bills_filter_by_location_and_range() {
    let test_db = common::TestDb::new("test_utility_bills_filters.db");
    let repo = DieselRepository::new(test_db.pool());

    let downtown = seed_location(&repo, "Downtown");
    let campus = seed_location(&repo, "Campus");

    let august = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
    let september = NaiveDate::from_ymd_opt(2026, 9, 10).unwrap();

    repo.create_utility_bill(&NewUtilityBill::new(downtown, "propane", 12_000, august))
        .expect("create bill");
    repo.create_utility_bill(&NewUtilityBill::new(downtown, "water", 3_000, september))
        .expect("create bill");
    repo.create_utility_bill(&NewUtilityBill::new(campus, "propane", 9_000, august))
        .expect("create bill");

    let downtown_bills = repo
        .list_utility_bills(UtilityListQuery::new().location_id(downtown))
        .expect("list downtown bills");
    assert_eq!(downtown_bills.len(), 2);

    let august_bills = repo
        .list_utility_bills(UtilityListQuery::new().between(
            NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 31).unwrap(),
        ))
        .expect("list august bills");
    assert_eq!(august_bills.len(), 2);
    assert!(august_bills.iter().all(|bill| bill.kind == "propane"));
}

#[test]
fn test_customer_lookup_by_email_and_phone() {
    let test_db = common::TestDb::new("test_customer_lookup.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_customer(&NewCustomer::new(
        "Ada",
        "ada@example.com",
        "5125550100",
        "hash",
    ))
    .expect("create customer");

    assert!(
        repo.get_customer_by_email("ada@example.com")
            .expect("by email")
            .is_some()
    );
    assert!(
        repo.get_customer_by_phone("5125550100")
            .expect("by phone")
            .is_some()
    );
    assert!(
        repo.get_customer_by_phone("0000000000")
            .expect("by phone")
            .is_none()
    );

    // Duplicate email must surface as a conflict.
    let err = repo
        .create_customer(&NewCustomer::new(
            "Ada Again",
            "ada@example.com",
            "5125550101",
            "hash",
        ))
        .expect_err("expected duplicate email to fail");
    assert!(matches!(err, RepositoryError::Conflict(_)));
}
