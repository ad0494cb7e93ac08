//! Repository trait for restaurant data access.

use crate::domain::entities::Restaurant;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for restaurant listings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRestaurantRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Returns all restaurants, unfiltered and unpaginated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_all(&self) -> Result<Vec<Restaurant>, AppError>;
}
