//! Repository trait for menu item data access.

use crate::domain::entities::MenuItem;
use crate::error::AppError;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Repository interface for menu listings and price lookups.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMenuItemRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuItemRepository: Send + Sync {
    /// Returns the available menu items for a restaurant.
    ///
    /// Items with `is_available = false` are excluded. A restaurant id with
    /// no rows (including a non-existent restaurant) yields an empty list,
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_available(&self, restaurant_id: i64) -> Result<Vec<MenuItem>, AppError>;

    /// Looks up the current price of a menu item.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(price))` if the item exists
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_price(&self, menu_item_id: i64) -> Result<Option<Decimal>, AppError>;
}
