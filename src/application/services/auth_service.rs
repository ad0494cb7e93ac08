//! Signup and login service with Argon2 password hashing.

use std::sync::Arc;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use serde_json::json;

use crate::domain::entities::{Customer, NewCustomer};
use crate::domain::repositories::CustomerRepository;
use crate::error::AppError;

/// Input for registering a customer with credentials.
#[derive(Debug, Clone)]
pub struct SignupData {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub password: String,
}

/// Service for customer signup and login.
///
/// Passwords are stored only as Argon2id hashes with a per-user random salt.
/// Login verifies the supplied plaintext against the stored hash; no session
/// or token is issued on success.
pub struct AuthService<C: CustomerRepository> {
    customer_repository: Arc<C>,
}

impl<C: CustomerRepository> AuthService<C> {
    /// Creates a new authentication service.
    pub fn new(customer_repository: Arc<C>) -> Self {
        Self {
            customer_repository,
        }
    }

    /// Registers a customer with a hashed password and returns the new id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered
    /// (checked up front, and again by the unique constraint for concurrent
    /// signups).
    /// Returns [`AppError::Internal`] if hashing or the insert fails.
    pub async fn signup(&self, data: SignupData) -> Result<i64, AppError> {
        if self
            .customer_repository
            .find_by_email(&data.email)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(
                "Email already registered",
                json!({ "email": data.email }),
            ));
        }

        let password_hash = hash_password(&data.password)?;
        let email = data.email.clone();

        let new_customer = NewCustomer {
            name: data.name,
            email: data.email,
            phone: data.phone,
            address: data.address,
            password_hash: Some(password_hash),
        };

        match self.customer_repository.create(new_customer).await {
            Ok(id) => Ok(id),
            Err(AppError::Conflict { .. }) => Err(AppError::conflict(
                "Email already registered",
                json!({ "email": email }),
            )),
            Err(e) => Err(e),
        }
    }

    /// Verifies credentials and returns the matching customer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no customer has this email.
    /// Returns [`AppError::Unauthorized`] if the password does not match or
    /// the account was created without credentials.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn login(&self, email: &str, password: &str) -> Result<Customer, AppError> {
        let customer = self
            .customer_repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("Email not found", json!({ "email": email })))?;

        let Some(stored_hash) = customer.password_hash.as_deref() else {
            return Err(AppError::unauthorized(
                "Incorrect password",
                json!({ "reason": "Account has no credentials" }),
            ));
        };

        if !verify_password(stored_hash, password)? {
            return Err(AppError::unauthorized("Incorrect password", json!({})));
        }

        Ok(customer)
    }
}

/// Hashes a plaintext password with Argon2id and a fresh random salt.
fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            tracing::error!(error = %e, "Password hashing failed");
            AppError::internal("Password hashing failed", json!({}))
        })
}

/// Verifies a plaintext password against a stored Argon2 hash string.
fn verify_password(stored_hash: &str, password: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| {
        tracing::error!(error = %e, "Stored password hash is malformed");
        AppError::internal("Stored password hash is invalid", json!({}))
    })?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
