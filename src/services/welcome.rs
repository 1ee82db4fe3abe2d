use serde::Serialize;

use crate::domain::menu_item::{Category, MenuItem, MenuItemListQuery};
use crate::repository::{LocationReader, MenuItemReader};
use crate::services::ServiceResult;
use crate::services::locations::{self, TodaysLocation};

/// All available menu items in one category.
#[derive(Debug, Serialize)]
pub struct CategorySection {
    pub category: Category,
    pub items: Vec<MenuItem>,
}

/// Everything the customer-facing landing page needs in one response.
#[derive(Debug, Serialize)]
pub struct WelcomeData {
    /// Available menu items grouped by category, in menu order.
    pub menu: Vec<CategorySection>,
    /// Where the truck is today, if it operates at all.
    pub todays_location: Option<TodaysLocation>,
}

const MENU_ORDER: [Category; 4] = [
    Category::Appetizer,
    Category::Entree,
    Category::Dessert,
    Category::Beverage,
];

/// Assembles the landing page payload.
pub fn welcome_data<R>(repo: &R) -> ServiceResult<WelcomeData>
where
    R: MenuItemReader + LocationReader + ?Sized,
{
    let (_, items) = repo.list_menu_items(MenuItemListQuery::new().only_available())?;

    let menu = MENU_ORDER
        .into_iter()
        .map(|category| CategorySection {
            category,
            items: items
                .iter()
                .filter(|item| item.category == category)
                .cloned()
                .collect(),
        })
        .filter(|section| !section.items.is_empty())
        .collect();

    let todays_location = locations::todays_location(repo)?;

    Ok(WelcomeData {
        menu,
        todays_location,
    })
}
