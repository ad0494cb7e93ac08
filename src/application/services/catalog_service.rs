//! Restaurant and menu listing service.

use std::sync::Arc;

use crate::domain::entities::{MenuItem, Restaurant};
use crate::domain::repositories::{MenuItemRepository, RestaurantRepository};
use crate::error::AppError;

/// Service for restaurant and menu listings.
pub struct CatalogService<R: RestaurantRepository, M: MenuItemRepository> {
    restaurant_repository: Arc<R>,
    menu_repository: Arc<M>,
}

impl<R: RestaurantRepository, M: MenuItemRepository> CatalogService<R, M> {
    /// Creates a new catalog service.
    pub fn new(restaurant_repository: Arc<R>, menu_repository: Arc<M>) -> Self {
        Self {
            restaurant_repository,
            menu_repository,
        }
    }

    /// Returns all restaurants.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_restaurants(&self) -> Result<Vec<Restaurant>, AppError> {
        self.restaurant_repository.list_all().await
    }

    /// Returns the available menu items for a restaurant.
    ///
    /// A restaurant id with no available items (including a non-existent
    /// restaurant) yields an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn menu_for_restaurant(&self, restaurant_id: i64) -> Result<Vec<MenuItem>, AppError> {
        self.menu_repository.list_available(restaurant_id).await
    }
}
