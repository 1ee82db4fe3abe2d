use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::staff::{NewStaff, Staff};
use crate::forms::auth::{AddStaffForm, LoginForm, RegisterCustomerForm};
use crate::repository::{CustomerReader, CustomerWriter, StaffReader, StaffWriter};
use crate::services::{ServiceError, ServiceResult};

/// Hash a password with Argon2 and a fresh random salt.
pub fn hash_password(password: &str) -> ServiceResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| {
            log::error!("password hashing failed: {err}");
            ServiceError::Password
        })?;
    Ok(hash.to_string())
}

/// Verify a password against a stored Argon2 hash. Unparseable hashes count
/// as a mismatch.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Registers a new customer account.
pub fn register_customer<R>(repo: &R, form: RegisterCustomerForm) -> ServiceResult<Customer>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    let details = form
        .into_details()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if repo.get_customer_by_email(&details.email)?.is_some() {
        return Err(ServiceError::Conflict("email already registered".to_string()));
    }

    let password_hash = hash_password(&details.password)?;
    let new_customer = NewCustomer::new(details.name, details.email, details.phone, password_hash);

    Ok(repo.create_customer(&new_customer)?)
}

/// Authenticates a customer by email and password.
///
/// Unknown emails and wrong passwords are indistinguishable to the caller.
pub fn login_customer<R>(repo: &R, form: LoginForm) -> ServiceResult<Customer>
where
    R: CustomerReader + ?Sized,
{
    let (email, password) = form
        .into_credentials()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let customer = repo
        .get_customer_by_email(&email)?
        .ok_or(ServiceError::Unauthorized)?;

    if !verify_password(&password, &customer.password_hash) {
        return Err(ServiceError::Unauthorized);
    }

    Ok(customer)
}

/// Authenticates a staff member by email and password.
pub fn login_staff<R>(repo: &R, form: LoginForm) -> ServiceResult<Staff>
where
    R: StaffReader + ?Sized,
{
    let (email, password) = form
        .into_credentials()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let member = repo
        .get_staff_by_email(&email)?
        .ok_or(ServiceError::Unauthorized)?;

    if !verify_password(&password, &member.password_hash) {
        return Err(ServiceError::Unauthorized);
    }

    Ok(member)
}

/// Provisions a staff account.
pub fn create_staff<R>(repo: &R, form: AddStaffForm) -> ServiceResult<Staff>
where
    R: StaffReader + StaffWriter + ?Sized,
{
    let (details, role) = form
        .into_details()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if repo.get_staff_by_email(&details.email)?.is_some() {
        return Err(ServiceError::Conflict("email already registered".to_string()));
    }

    let password_hash = hash_password(&details.password)?;
    let new_staff = NewStaff::new(
        details.name,
        details.email,
        details.phone,
        role,
        password_hash,
    );

    Ok(repo.create_staff(&new_staff)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::MockCustomerReader;

    fn customer_with_password(password: &str) -> Customer {
        let now = chrono::Local::now().naive_utc();
        Customer {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "5125550100".to_string(),
            password_hash: hash_password(password).unwrap(),
            incentive_points: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn hash_and_verify_round_trip() {
        let hash = hash_password("correct horse").unwrap();
        assert!(verify_password("correct horse", &hash));
        assert!(!verify_password("battery staple", &hash));
    }

    #[test]
    fn login_rejects_wrong_password() {
        let mut repo = MockCustomerReader::new();
        repo.expect_get_customer_by_email()
            .returning(|_| Ok(Some(customer_with_password("correct horse"))));

        let form = LoginForm {
            email: "ada@example.com".to_string(),
            password: "wrong".to_string(),
        };

        assert!(matches!(
            login_customer(&repo, form),
            Err(ServiceError::Unauthorized)
        ));
    }

    #[test]
    fn login_rejects_unknown_email() {
        let mut repo = MockCustomerReader::new();
        repo.expect_get_customer_by_email().returning(|_| Ok(None));

        let form = LoginForm {
            email: "nobody@example.com".to_string(),
            password: "whatever".to_string(),
        };

        assert!(matches!(
            login_customer(&repo, form),
            Err(ServiceError::Unauthorized)
        ));
    }

    #[test]
    fn login_accepts_correct_credentials() {
        let mut repo = MockCustomerReader::new();
        repo.expect_get_customer_by_email()
            .returning(|_| Ok(Some(customer_with_password("correct horse"))));

        let form = LoginForm {
            email: "ada@example.com".to_string(),
            password: "correct horse".to_string(),
        };

        let customer = login_customer(&repo, form).expect("expected login to succeed");
        assert_eq!(customer.email, "ada@example.com");
    }
}
