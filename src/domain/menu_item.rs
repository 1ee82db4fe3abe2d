use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Menu categories shown to customers.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Appetizer,
    Entree,
    Dessert,
    Beverage,
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        match value {
            "appetizer" => Self::Appetizer,
            "dessert" => Self::Dessert,
            "beverage" => Self::Beverage,
            _ => Self::Entree,
        }
    }
}

impl From<Category> for &'static str {
    fn from(value: Category) -> Self {
        match value {
            Category::Appetizer => "appetizer",
            Category::Entree => "entree",
            Category::Dessert => "dessert",
            Category::Beverage => "beverage",
        }
    }
}

/// One ingredient of a menu item's default recipe.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MenuItemIngredient {
    /// Identifier of the underlying ingredient record.
    pub ingredient_id: i32,
    /// Ingredient name at the time of the lookup.
    pub name: String,
    /// Unit price of the ingredient, drives customization price deltas.
    pub price_cents: i64,
    /// How many units of the ingredient the recipe uses.
    pub quantity: i32,
    /// Whether a customer may substitute this ingredient.
    pub substitutable: bool,
    /// Whether a customer may remove this ingredient.
    pub removable: bool,
}

/// Domain representation of an orderable menu item.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MenuItem {
    /// Unique identifier of the menu item.
    pub id: i32,
    /// Human-readable name shown on the menu.
    pub name: String,
    /// Optional longer description shown to customers.
    pub description: Option<String>,
    /// Price represented in the smallest currency unit (cents).
    pub price_cents: i64,
    /// Menu category the item belongs to.
    pub category: Category,
    /// Whether the item can currently be ordered.
    pub is_available: bool,
    /// Optional path to an uploaded image, relative to the uploads root.
    pub image_path: Option<String>,
    /// Default recipe ingredients with customization flags.
    pub ingredients: Vec<MenuItemIngredient>,
    /// Timestamp for when the record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the record.
    pub updated_at: NaiveDateTime,
}

/// Recipe line attached to a new or updated menu item.
#[derive(Debug, Clone)]
pub struct NewMenuItemIngredient {
    pub ingredient_id: i32,
    pub quantity: i32,
    pub substitutable: bool,
    pub removable: bool,
}

/// Payload required to insert a new menu item.
#[derive(Debug, Clone)]
pub struct NewMenuItem {
    /// Human-readable name shown on the menu.
    pub name: String,
    /// Optional longer description shown to customers.
    pub description: Option<String>,
    /// Price represented in the smallest currency unit (cents).
    pub price_cents: i64,
    /// Menu category the item belongs to.
    pub category: Category,
    /// Whether the item can be ordered right away.
    pub is_available: bool,
    /// Optional path to an uploaded image.
    pub image_path: Option<String>,
    /// Default recipe ingredients.
    pub ingredients: Vec<NewMenuItemIngredient>,
    /// Timestamp captured when the payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewMenuItem {
    /// Build a new menu item payload with the supplied details and current timestamp.
    pub fn new(name: impl Into<String>, price_cents: i64, category: Category) -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            name: name.into(),
            description: None,
            price_cents,
            category,
            is_available: true,
            image_path: None,
            ingredients: Vec::new(),
            updated_at: now,
        }
    }

    /// Attach a descriptive text to the payload.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach an uploaded image path to the payload.
    pub fn with_image_path(mut self, image_path: impl Into<String>) -> Self {
        self.image_path = Some(image_path.into());
        self
    }

    /// Attach the default recipe to the payload.
    pub fn with_ingredients(mut self, ingredients: Vec<NewMenuItemIngredient>) -> Self {
        self.ingredients = ingredients;
        self
    }

    /// Mark the item as not orderable yet.
    pub fn unavailable(mut self) -> Self {
        self.is_available = false;
        self
    }
}

/// Patch data applied when updating an existing menu item.
#[derive(Debug, Clone)]
pub struct UpdateMenuItem {
    /// Optional name update.
    pub name: Option<String>,
    /// Optional description update, using inner `None` to clear the value.
    pub description: Option<Option<String>>,
    /// Optional price update in cents.
    pub price_cents: Option<i64>,
    /// Optional category update.
    pub category: Option<Category>,
    /// Optional availability toggle.
    pub is_available: Option<bool>,
    /// Optional image path update, using inner `None` to clear the value.
    pub image_path: Option<Option<String>>,
    /// Optional full replacement of the recipe.
    pub ingredients: Option<Vec<NewMenuItemIngredient>>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateMenuItem {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateMenuItem {
    /// Create a new patch object with no changes applied yet.
    pub fn new() -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            name: None,
            description: None,
            price_cents: None,
            category: None,
            is_available: None,
            image_path: None,
            ingredients: None,
            updated_at: now,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: Option<impl Into<String>>) -> Self {
        self.description = Some(description.map(|value| value.into()));
        self
    }

    pub fn price_cents(mut self, price_cents: i64) -> Self {
        self.price_cents = Some(price_cents);
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn available(mut self, is_available: bool) -> Self {
        self.is_available = Some(is_available);
        self
    }

    pub fn image_path(mut self, image_path: Option<impl Into<String>>) -> Self {
        self.image_path = Some(image_path.map(|value| value.into()));
        self
    }

    pub fn ingredients(mut self, ingredients: Vec<NewMenuItemIngredient>) -> Self {
        self.ingredients = Some(ingredients);
        self
    }
}

/// Query definition used to list menu items.
#[derive(Debug, Clone)]
pub struct MenuItemListQuery {
    /// Optional name or description search term.
    pub search: Option<String>,
    /// Optional category filter.
    pub category: Option<Category>,
    /// Whether unavailable items should be excluded from the results.
    pub only_available: bool,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl Default for MenuItemListQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuItemListQuery {
    /// Construct a query that targets every menu item.
    pub fn new() -> Self {
        Self {
            search: None,
            category: None,
            only_available: false,
            pagination: None,
        }
    }

    /// Filter the results by a search term applied to the name or description.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Filter the results by menu category.
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Exclude items that are not currently orderable.
    pub fn only_available(mut self) -> Self {
        self.only_available = true;
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
