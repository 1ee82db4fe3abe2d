use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a customer account.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Customer {
    /// Unique identifier of the customer.
    pub id: i32,
    /// Display name of the customer.
    pub name: String,
    /// Unique login email.
    pub email: String,
    /// Contact phone number, also used for walk-up order lookup.
    pub phone: String,
    /// Argon2 password hash, never serialized into responses.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Loyalty currency balance; one point is worth one cent at checkout.
    pub incentive_points: i64,
    /// Timestamp for when the account was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the account.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new customer account.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Argon2 hash of the chosen password.
    pub password_hash: String,
    pub updated_at: NaiveDateTime,
}

impl NewCustomer {
    /// Build a new customer payload with the supplied details and current timestamp.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            password_hash: password_hash.into(),
            updated_at: chrono::Local::now().naive_utc(),
        }
    }
}
