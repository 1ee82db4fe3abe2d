use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::ingredient::NewIngredient;
use crate::domain::menu_item::{Category, NewMenuItem, NewMenuItemIngredient, UpdateMenuItem};
use crate::forms::{PriceError, parse_price_cents, sanitize_inline_text, sanitize_multiline_text};

/// Maximum allowed length for a menu item name.
const NAME_MAX_LEN: u64 = 128;

pub type MenuFormResult<T> = Result<T, MenuFormError>;

/// Errors that can occur while processing menu item forms.
#[derive(Debug, Error)]
pub enum MenuFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("menu item name cannot be empty")]
    EmptyName,
    #[error(transparent)]
    Price(#[from] PriceError),
}

/// One recipe line submitted with a menu item form.
#[derive(Debug, Deserialize, Validate)]
pub struct MenuItemIngredientForm {
    pub ingredient_id: i32,
    #[validate(range(min = 1))]
    pub quantity: i32,
    #[serde(default)]
    pub substitutable: bool,
    #[serde(default)]
    pub removable: bool,
}

impl MenuItemIngredientForm {
    fn into_domain(self) -> NewMenuItemIngredient {
        NewMenuItemIngredient {
            ingredient_id: self.ingredient_id,
            quantity: self.quantity,
            substitutable: self.substitutable,
            removable: self.removable,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Payload for `POST /api/menu-items`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddMenuItemForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    pub description: Option<String>,
    /// Decimal price string, e.g. `9.99`; at most two decimal places.
    pub price: String,
    pub category: Category,
    #[serde(default = "default_true")]
    pub is_available: bool,
    pub image_path: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub ingredients: Vec<MenuItemIngredientForm>,
}

impl AddMenuItemForm {
    /// Validates and sanitizes the payload into a domain `NewMenuItem`.
    pub fn into_new_menu_item(self) -> MenuFormResult<NewMenuItem> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(MenuFormError::EmptyName);
        }

        let price_cents = parse_price_cents(&self.price)?;

        let description = self
            .description
            .as_deref()
            .map(sanitize_multiline_text)
            .filter(|value| !value.is_empty());

        let mut new_item = NewMenuItem::new(name, price_cents, self.category).with_ingredients(
            self.ingredients
                .into_iter()
                .map(MenuItemIngredientForm::into_domain)
                .collect(),
        );

        if let Some(description) = description {
            new_item = new_item.with_description(description);
        }

        if let Some(image_path) = self.image_path.filter(|value| !value.trim().is_empty()) {
            new_item = new_item.with_image_path(image_path.trim().to_string());
        }

        if !self.is_available {
            new_item = new_item.unavailable();
        }

        Ok(new_item)
    }
}

/// Payload for `POST /api/ingredients`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddIngredientForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    /// Decimal price string, e.g. `0.25`; at most two decimal places.
    pub price: String,
}

impl AddIngredientForm {
    /// Validates and sanitizes the payload into a domain `NewIngredient`.
    pub fn into_new_ingredient(self) -> MenuFormResult<NewIngredient> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(MenuFormError::EmptyName);
        }

        let price_cents = parse_price_cents(&self.price)?;
        Ok(NewIngredient::new(name, price_cents))
    }
}

/// Payload for `PUT /api/menu-items/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct EditMenuItemForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: Option<String>,
    /// Empty string clears the existing description.
    pub description: Option<String>,
    pub price: Option<String>,
    pub category: Option<Category>,
    pub is_available: Option<bool>,
    /// Empty string clears the existing image.
    pub image_path: Option<String>,
    #[validate(nested)]
    pub ingredients: Option<Vec<MenuItemIngredientForm>>,
}

impl EditMenuItemForm {
    /// Validates and sanitizes the payload into a domain `UpdateMenuItem`.
    pub fn into_update_menu_item(self) -> MenuFormResult<UpdateMenuItem> {
        self.validate()?;

        let mut updates = UpdateMenuItem::new();

        if let Some(name) = self.name {
            let sanitized = sanitize_inline_text(&name);
            if sanitized.is_empty() {
                return Err(MenuFormError::EmptyName);
            }
            updates = updates.name(sanitized);
        }

        if let Some(description) = self.description {
            let sanitized = sanitize_multiline_text(&description);
            if sanitized.is_empty() {
                updates = updates.description(None::<String>);
            } else {
                updates = updates.description(Some(sanitized));
            }
        }

        if let Some(price) = self.price {
            updates = updates.price_cents(parse_price_cents(&price)?);
        }

        if let Some(category) = self.category {
            updates = updates.category(category);
        }

        if let Some(is_available) = self.is_available {
            updates = updates.available(is_available);
        }

        if let Some(image_path) = self.image_path {
            let trimmed = image_path.trim();
            if trimmed.is_empty() {
                updates = updates.image_path(None::<String>);
            } else {
                updates = updates.image_path(Some(trimmed.to_string()));
            }
        }

        if let Some(ingredients) = self.ingredients {
            updates = updates.ingredients(
                ingredients
                    .into_iter()
                    .map(MenuItemIngredientForm::into_domain)
                    .collect(),
            );
        }

        Ok(updates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_form_converts_successfully() {
        let form = AddMenuItemForm {
            name: "  Carne  Asada Taco ".to_string(),
            description: Some(" Grilled steak.\n\n Fresh tortilla. ".to_string()),
            price: "4.50".to_string(),
            category: Category::Entree,
            is_available: true,
            image_path: None,
            ingredients: vec![MenuItemIngredientForm {
                ingredient_id: 7,
                quantity: 2,
                substitutable: false,
                removable: true,
            }],
        };

        let item = form.into_new_menu_item().expect("expected success");
        assert_eq!(item.name, "Carne Asada Taco");
        assert_eq!(item.price_cents, 450);
        assert_eq!(
            item.description.as_deref(),
            Some("Grilled steak.\n\nFresh tortilla.")
        );
        assert_eq!(item.ingredients.len(), 1);
        assert!(item.ingredients[0].removable);
    }

    #[test]
    fn add_form_rejects_overly_precise_price() {
        let form = AddMenuItemForm {
            name: "Churro".to_string(),
            description: None,
            price: "2.995".to_string(),
            category: Category::Dessert,
            is_available: true,
            image_path: None,
            ingredients: Vec::new(),
        };

        assert!(matches!(
            form.into_new_menu_item(),
            Err(MenuFormError::Price(PriceError::TooPrecise(_)))
        ));
    }

    #[test]
    fn edit_form_clears_description_with_empty_string() {
        let form = EditMenuItemForm {
            name: None,
            description: Some("  ".to_string()),
            price: Some("3.25".to_string()),
            category: None,
            is_available: Some(false),
            image_path: None,
            ingredients: None,
        };

        let updates = form.into_update_menu_item().expect("expected success");
        assert!(matches!(updates.description, Some(None)));
        assert_eq!(updates.price_cents, Some(325));
        assert_eq!(updates.is_available, Some(false));
    }

    #[test]
    fn edit_form_rejects_zero_quantity_ingredient() {
        let form = EditMenuItemForm {
            name: None,
            description: None,
            price: None,
            category: None,
            is_available: None,
            image_path: None,
            ingredients: Some(vec![MenuItemIngredientForm {
                ingredient_id: 1,
                quantity: 0,
                substitutable: false,
                removable: false,
            }]),
        };

        assert!(matches!(
            form.into_update_menu_item(),
            Err(MenuFormError::Validation(_))
        ));
    }
}
