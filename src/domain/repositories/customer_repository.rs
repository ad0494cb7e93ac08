//! Repository trait for customer data access.

use crate::domain::entities::{Customer, NewCustomer};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for customer creation and lookup.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCustomerRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Inserts a new customer row and returns its generated id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email already exists
    /// (schema-level unique constraint).
    /// Returns [`AppError::Internal`] on other database errors.
    async fn create(&self, new_customer: NewCustomer) -> Result<i64, AppError>;

    /// Finds a customer by email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, AppError>;

    /// Finds a customer by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, AppError>;
}
