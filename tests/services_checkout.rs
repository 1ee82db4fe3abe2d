use chrono::{NaiveTime, Weekday};

use foodtruck_pos::domain::customer::NewCustomer;
use foodtruck_pos::domain::ingredient::NewIngredient;
use foodtruck_pos::domain::location::{NewActiveLocation, NewLocation};
use foodtruck_pos::domain::menu_item::{Category, NewMenuItem, NewMenuItemIngredient};
use foodtruck_pos::domain::order::{CustomizationAction, OrderItemStatus, PaymentMethod};
use foodtruck_pos::domain::staff::{NewStaff, StaffRole};
use foodtruck_pos::forms::checkout::{
    CheckoutCustomizationForm, CheckoutForm, CheckoutItemForm,
};
use foodtruck_pos::repository::{
    CustomerWriter, DieselRepository, IngredientWriter, LocationWriter, MenuItemWriter,
    OrderReader, StaffWriter,
};
use foodtruck_pos::services::checkout;
use foodtruck_pos::services::ServiceError;

mod common;

const ALL_WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

struct Fixture {
    staff_id: i32,
    taco_id: i32,
    onion_id: i32,
}

/// Seeds a staff member, a location operating every day, and a taco with a
/// removable onion.
fn seed(repo: &DieselRepository) -> Fixture {
    let staff = repo
        .create_staff(&NewStaff::new(
            "Sam",
            "sam@example.com",
            "5125550100",
            StaffRole::Cashier,
            "hash",
        ))
        .expect("create staff");

    let location = repo
        .create_location(&NewLocation::new("Downtown", "1 Main St"))
        .expect("create location");
    repo.create_active_location(&NewActiveLocation::new(
        location.id,
        chrono::Local::now().date_naive() - chrono::Days::new(1),
        NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(23, 59, 59).unwrap(),
        ALL_WEEK.to_vec(),
    ))
    .expect("create active location");

    let onion = repo
        .create_ingredient(&NewIngredient::new("Onion", 25))
        .expect("create ingredient");
    let taco = repo
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

    Fixture {
        staff_id: staff.id,
        taco_id: taco.id,
        onion_id: onion.id,
    }
}

#[test]
fn checkout_persists_order_with_server_computed_totals() {
    let test_db = common::TestDb::new("service_checkout_totals.db");
    let repo = DieselRepository::new(test_db.pool());
    let fixture = seed(&repo);

    let form = CheckoutForm {
        items: vec![CheckoutItemForm {
            menu_item_id: fixture.taco_id,
            quantity: 2,
            customizations: Vec::new(),
        }],
        customer_id: None,
        phone: None,
        online: false,
        staff_id: Some(fixture.staff_id),
        payment_method: PaymentMethod::Card,
        points_used: 0,
    };

    let order = checkout::create_order(&repo, 825, form).expect("checkout should succeed");

    // 2 x 450 = 900 subtotal, 74 cents of tax at 8.25% rounded half-up.
    assert_eq!(order.total_cents, 974);
    assert_eq!(order.location_name, "Downtown");
    assert_eq!(order.staff_id, fixture.staff_id);
    assert_eq!(order.customer_id, None);
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].status, OrderItemStatus::Pending);

    // The order really is in the database with its lines.
    let stored = repo
        .get_order_by_id(order.id)
        .expect("load order")
        .expect("order should exist");
    assert_eq!(stored.items.len(), 1);
    assert_eq!(stored.items[0].quantity, 2);
}

#[test]
fn checkout_attaches_the_customer_found_by_phone() {
    let test_db = common::TestDb::new("service_checkout_phone_lookup.db");
    let repo = DieselRepository::new(test_db.pool());
    let fixture = seed(&repo);

    let customer = repo
        .create_customer(&NewCustomer::new(
            "Ada",
            "ada@example.com",
            "5125550199",
            "hash",
        ))
        .expect("create customer");

    let form = CheckoutForm {
        items: vec![CheckoutItemForm {
            menu_item_id: fixture.taco_id,
            quantity: 1,
            customizations: vec![CheckoutCustomizationForm {
                ingredient_id: fixture.onion_id,
                action: CustomizationAction::Remove,
                quantity_delta: 1,
            }],
        }],
        customer_id: None,
        phone: Some("5125550199".to_string()),
        online: false,
        staff_id: Some(fixture.staff_id),
        payment_method: PaymentMethod::Cash,
        points_used: 0,
    };

    let order = checkout::create_order(&repo, 825, form).expect("checkout should succeed");

    assert_eq!(order.customer_id, Some(customer.id));
    // 450 - 25 for the removed onion, plus 35 cents of tax.
    assert_eq!(order.items[0].price_cents, 425);
    assert_eq!(order.total_cents, 460);
    assert_eq!(
        order.items[0].customizations[0].action,
        CustomizationAction::Remove
    );
}

#[test]
fn checkout_rejects_unknown_menu_items() {
    let test_db = common::TestDb::new("service_checkout_unknown_item.db");
    let repo = DieselRepository::new(test_db.pool());
    let fixture = seed(&repo);

    let form = CheckoutForm {
        items: vec![CheckoutItemForm {
            menu_item_id: fixture.taco_id + 100,
            quantity: 1,
            customizations: Vec::new(),
        }],
        customer_id: None,
        phone: None,
        online: false,
        staff_id: Some(fixture.staff_id),
        payment_method: PaymentMethod::Card,
        points_used: 0,
    };

    let result = checkout::create_order(&repo, 825, form);
    assert!(matches!(result, Err(ServiceError::NotFound(_))));

    let (total, _) = repo
        .list_orders(foodtruck_pos::domain::order::OrderListQuery::new())
        .expect("list orders");
    assert_eq!(total, 0);
}
