use chrono::Datelike;

use crate::domain::cart::CartTotals;
use crate::domain::customer::Customer;
use crate::domain::menu_item::MenuItem;
use crate::domain::notification::NewNotification;
use crate::domain::order::{
    CustomizationAction, NewOrder, NewOrderItem, NewOrderItemCustomization, Order,
};
use crate::forms::checkout::{CheckoutCustomizationForm, CheckoutForm, CheckoutItemForm};
use crate::repository::{
    CustomerReader, IngredientReader, LocationReader, MenuItemReader, NotificationWriter,
    OrderWriter, StaffReader,
};
use crate::services::{ServiceError, ServiceResult};

/// Creates an order from a checkout payload.
///
/// Resolves the customer, today's active location and the handling staff
/// member, prices every line server-side from the menu, and persists the
/// whole order in one repository transaction. Staff picking up an online
/// order get a notification.
pub fn create_order<R>(repo: &R, tax_rate_bp: i64, form: CheckoutForm) -> ServiceResult<Order>
where
    R: MenuItemReader
        + IngredientReader
        + CustomerReader
        + StaffReader
        + LocationReader
        + OrderWriter
        + NotificationWriter
        + ?Sized,
{
    let form = form
        .validated()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let customer = resolve_customer(repo, form.customer_id, form.phone.as_deref())?;

    if form.points_used > 0 {
        let Some(customer) = customer.as_ref() else {
            return Err(ServiceError::Form(
                "incentive points require a customer account".to_string(),
            ));
        };
        if form.points_used > customer.incentive_points {
            return Err(ServiceError::Conflict(
                "insufficient incentive points".to_string(),
            ));
        }
    }

    let today = chrono::Local::now().date_naive();
    let (active, location) = repo
        .get_active_location_for(today)?
        .ok_or_else(|| ServiceError::Conflict("no location is operating today".to_string()))?;

    let staff = match form.staff_id {
        Some(staff_id) => repo
            .get_staff_by_id(staff_id)?
            .ok_or_else(|| ServiceError::NotFound(format!("staff member {staff_id}")))?,
        None if form.online => repo
            .find_staff_on_shift(active.location_id, today.weekday())?
            .ok_or_else(|| {
                ServiceError::Conflict("no staff member is on shift today".to_string())
            })?,
        None => {
            return Err(ServiceError::Form(
                "in-person orders require a staff member".to_string(),
            ));
        }
    };

    let mut subtotal_cents = 0i64;
    let mut lines = Vec::with_capacity(form.items.len());
    for item_form in &form.items {
        let line = price_line(repo, item_form)?;
        subtotal_cents += line.price_cents * i64::from(line.quantity);
        lines.push(line);
    }

    let totals = CartTotals::from_subtotal(subtotal_cents, tax_rate_bp);
    let total_cents = (totals.grand_total_cents - form.points_used).max(0);

    let mut new_order = NewOrder::new(staff.id, location.name, form.payment_method, total_cents)
        .with_points_used(form.points_used)
        .with_items(lines);
    if let Some(customer) = customer {
        new_order = new_order.with_customer_id(customer.id);
    }
    if form.online {
        new_order = new_order.online();
    }

    let order = repo.create_order(&new_order)?;

    if order.is_online {
        let note = NewNotification::new(
            staff.id,
            format!(
                "New online order #{} at {}",
                order.id, order.location_name
            ),
        );
        // The order is already committed; a failed notification only gets logged.
        if let Err(err) = repo.create_notifications(std::slice::from_ref(&note)) {
            log::error!(
                "Failed to notify staff {} about order {}: {err}",
                staff.id,
                order.id
            );
        }
    }

    Ok(order)
}

/// Resolves the ordering customer. An explicit id must exist; a phone lookup
/// that misses falls back to a guest order.
fn resolve_customer<R>(
    repo: &R,
    customer_id: Option<i32>,
    phone: Option<&str>,
) -> ServiceResult<Option<Customer>>
where
    R: CustomerReader + ?Sized,
{
    if let Some(customer_id) = customer_id {
        let customer = repo
            .get_customer_by_id(customer_id)?
            .ok_or_else(|| ServiceError::NotFound(format!("customer {customer_id}")))?;
        return Ok(Some(customer));
    }
    match phone {
        Some(phone) => Ok(repo.get_customer_by_phone(phone)?),
        None => Ok(None),
    }
}

/// Prices one order line against the menu, applying customization deltas to
/// the unit price.
fn price_line<R>(repo: &R, item_form: &CheckoutItemForm) -> ServiceResult<NewOrderItem>
where
    R: MenuItemReader + IngredientReader + ?Sized,
{
    let menu_item = repo
        .get_menu_item_by_id(item_form.menu_item_id)?
        .ok_or_else(|| ServiceError::NotFound(format!("menu item {}", item_form.menu_item_id)))?;

    if !menu_item.is_available {
        return Err(ServiceError::Conflict(format!(
            "menu item '{}' is not available",
            menu_item.name
        )));
    }

    let mut customizations = Vec::with_capacity(item_form.customizations.len());
    for custom in &item_form.customizations {
        customizations.push(price_customization(repo, &menu_item, custom)?);
    }

    let delta_cents: i64 = customizations
        .iter()
        .map(|custom| custom.price_delta_cents)
        .sum();

    Ok(NewOrderItem {
        menu_item_id: Some(menu_item.id),
        name: menu_item.name,
        price_cents: (menu_item.price_cents + delta_cents).max(0),
        quantity: item_form.quantity,
        customizations,
    })
}

fn price_customization<R>(
    repo: &R,
    menu_item: &MenuItem,
    custom: &CheckoutCustomizationForm,
) -> ServiceResult<NewOrderItemCustomization>
where
    R: IngredientReader + ?Sized,
{
    let delta = i64::from(custom.quantity_delta);
    match custom.action {
        // Extras may use any ingredient on record, priced at its unit price.
        CustomizationAction::Add => {
            let ingredient = repo
                .get_ingredient_by_id(custom.ingredient_id)?
                .ok_or_else(|| {
                    ServiceError::NotFound(format!("ingredient {}", custom.ingredient_id))
                })?;
            Ok(NewOrderItemCustomization {
                ingredient_id: Some(ingredient.id),
                ingredient_name: ingredient.name,
                action: custom.action,
                quantity_delta: custom.quantity_delta,
                price_delta_cents: ingredient.price_cents * delta,
            })
        }
        // Removals and substitutions target the item's own recipe.
        CustomizationAction::Remove | CustomizationAction::Substitute => {
            let recipe_row = menu_item
                .ingredients
                .iter()
                .find(|row| row.ingredient_id == custom.ingredient_id)
                .ok_or_else(|| {
                    ServiceError::Form(format!(
                        "ingredient {} is not part of '{}'",
                        custom.ingredient_id, menu_item.name
                    ))
                })?;
            let price_delta_cents = match custom.action {
                CustomizationAction::Remove => {
                    if !recipe_row.removable {
                        return Err(ServiceError::Conflict(format!(
                            "'{}' cannot be removed from '{}'",
                            recipe_row.name, menu_item.name
                        )));
                    }
                    -(recipe_row.price_cents * delta)
                }
                _ => {
                    if !recipe_row.substitutable {
                        return Err(ServiceError::Conflict(format!(
                            "'{}' cannot be substituted on '{}'",
                            recipe_row.name, menu_item.name
                        )));
                    }
                    // Swaps trade for an equally priced option.
                    0
                }
            };
            Ok(NewOrderItemCustomization {
                ingredient_id: Some(recipe_row.ingredient_id),
                ingredient_name: recipe_row.name.clone(),
                action: custom.action,
                quantity_delta: custom.quantity_delta,
                price_delta_cents,
            })
        }
    }
}
