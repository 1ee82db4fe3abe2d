use chrono::{NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

/// Roles a staff member can hold.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    Cashier,
    Cook,
    Manager,
}

impl From<&str> for StaffRole {
    fn from(value: &str) -> Self {
        match value {
            "cook" => Self::Cook,
            "manager" => Self::Manager,
            _ => Self::Cashier,
        }
    }
}

impl From<StaffRole> for &'static str {
    fn from(value: StaffRole) -> Self {
        match value {
            StaffRole::Cashier => "cashier",
            StaffRole::Cook => "cook",
            StaffRole::Manager => "manager",
        }
    }
}

/// Domain representation of a staff account.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Staff {
    /// Unique identifier of the staff member.
    pub id: i32,
    /// Display name of the staff member.
    pub name: String,
    /// Unique login email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Role held by the staff member.
    pub role: StaffRole,
    /// Argon2 password hash, never serialized into responses.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Timestamp for when the account was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the account.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new staff account.
#[derive(Debug, Clone)]
pub struct NewStaff {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: StaffRole,
    /// Argon2 hash of the chosen password.
    pub password_hash: String,
    pub updated_at: NaiveDateTime,
}

impl NewStaff {
    /// Build a new staff payload with the supplied details and current timestamp.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        role: StaffRole,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            role,
            password_hash: password_hash.into(),
            updated_at: chrono::Local::now().naive_utc(),
        }
    }
}

/// A recurring weekday assignment of a staff member to a location.
///
/// Shifts drive staff assignment for online orders: the order goes to a staff
/// member on shift at the active location on the order's weekday.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Shift {
    /// Unique identifier of the shift.
    pub id: i32,
    /// Staff member working the shift.
    pub staff_id: i32,
    /// Location the shift is worked at.
    pub location_id: i32,
    /// Weekday the shift recurs on.
    pub weekday: Weekday,
    /// Timestamp for when the shift was created.
    pub created_at: NaiveDateTime,
}

/// Payload required to insert a new shift.
#[derive(Debug, Clone)]
pub struct NewShift {
    pub staff_id: i32,
    pub location_id: i32,
    pub weekday: Weekday,
}

impl NewShift {
    pub fn new(staff_id: i32, location_id: i32, weekday: Weekday) -> Self {
        Self {
            staff_id,
            location_id,
            weekday,
        }
    }
}
