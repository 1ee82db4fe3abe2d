pub mod auth;
pub mod checkout;
pub mod inventory;
pub mod locations;
pub mod menu;
pub mod notifications;
pub mod orders;
pub mod reports;
pub mod utilities;
pub mod welcome;
