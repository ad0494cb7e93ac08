//! Shared application state injected into all handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{AuthService, CatalogService, CustomerService, OrderService};
use crate::infrastructure::persistence::{
    PgCustomerRepository, PgMenuItemRepository, PgOrderRepository, PgRestaurantRepository,
};

/// Application state shared across all request handlers.
///
/// Services are generic over repository traits; the state pins them to their
/// PostgreSQL implementations. Cloning is cheap (`Arc` + pool handle).
#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<CatalogService<PgRestaurantRepository, PgMenuItemRepository>>,
    pub customer_service: Arc<CustomerService<PgCustomerRepository>>,
    pub order_service: Arc<OrderService<PgMenuItemRepository, PgOrderRepository>>,
    pub auth_service: Arc<AuthService<PgCustomerRepository>>,
    /// Kept for liveness checks; handlers go through services.
    pub db: PgPool,
}

impl AppState {
    /// Wires repositories and services around a connection pool.
    pub fn new(pool: PgPool) -> Self {
        let pool_arc = Arc::new(pool.clone());

        let restaurant_repo = Arc::new(PgRestaurantRepository::new(pool_arc.clone()));
        let menu_repo = Arc::new(PgMenuItemRepository::new(pool_arc.clone()));
        let customer_repo = Arc::new(PgCustomerRepository::new(pool_arc.clone()));
        let order_repo = Arc::new(PgOrderRepository::new(pool_arc.clone()));

        Self {
            catalog_service: Arc::new(CatalogService::new(restaurant_repo, menu_repo.clone())),
            customer_service: Arc::new(CustomerService::new(customer_repo.clone())),
            order_service: Arc::new(OrderService::new(menu_repo, order_repo)),
            auth_service: Arc::new(AuthService::new(customer_repo)),
            db: pool,
        }
    }
}
