use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::staff::StaffRole;
use crate::forms::sanitize_inline_text;

/// Maximum allowed length for an account display name.
const NAME_MAX_LEN: u64 = 128;
/// Minimum password length accepted at registration.
const PASSWORD_MIN_LEN: u64 = 8;

pub type AuthFormResult<T> = Result<T, AuthFormError>;

/// Errors that can occur while processing account forms.
#[derive(Debug, Error)]
pub enum AuthFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("name cannot be empty")]
    EmptyName,
}

/// Accept digits with an optional leading `+` and common separators, requiring
/// at least seven digits overall.
fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let digits = value.chars().filter(|ch| ch.is_ascii_digit()).count();
    let allowed = value
        .chars()
        .all(|ch| ch.is_ascii_digit() || matches!(ch, '+' | '-' | ' ' | '(' | ')'));
    if digits < 7 || !allowed {
        return Err(ValidationError::new("phone"));
    }
    Ok(())
}

/// Sanitized account fields shared by customer and staff registration.
#[derive(Debug)]
pub struct AccountDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Payload for `POST /api/auth/customer-register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterCustomerForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
    #[validate(length(min = PASSWORD_MIN_LEN))]
    pub password: String,
}

impl RegisterCustomerForm {
    /// Validates and sanitizes the payload into account details.
    pub fn into_details(self) -> AuthFormResult<AccountDetails> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(AuthFormError::EmptyName);
        }

        Ok(AccountDetails {
            name,
            email: self.email.trim().to_ascii_lowercase(),
            phone: sanitize_inline_text(&self.phone),
            password: self.password,
        })
    }
}

/// Payload for the customer and staff login endpoints.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl LoginForm {
    /// Validates the payload and normalizes the email.
    pub fn into_credentials(self) -> AuthFormResult<(String, String)> {
        self.validate()?;
        Ok((self.email.trim().to_ascii_lowercase(), self.password))
    }
}

/// Payload for `POST /api/staff`, used by managers to provision accounts.
#[derive(Debug, Deserialize, Validate)]
pub struct AddStaffForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
    pub role: StaffRole,
    #[validate(length(min = PASSWORD_MIN_LEN))]
    pub password: String,
}

impl AddStaffForm {
    /// Validates and sanitizes the payload into account details plus role.
    pub fn into_details(self) -> AuthFormResult<(AccountDetails, StaffRole)> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(AuthFormError::EmptyName);
        }

        Ok((
            AccountDetails {
                name,
                email: self.email.trim().to_ascii_lowercase(),
                phone: sanitize_inline_text(&self.phone),
                password: self.password,
            },
            self.role,
        ))
    }
}
