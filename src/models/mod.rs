pub mod customer;
pub mod ingredient;
pub mod inventory;
pub mod location;
pub mod menu_item;
pub mod notification;
pub mod order;
pub mod staff;
pub mod utility;
