//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx prepared
//! statements with runtime parameter binding.
//!
//! # Repositories
//!
//! - [`PgRestaurantRepository`] - Restaurant listings
//! - [`PgMenuItemRepository`] - Menu listings and price lookups
//! - [`PgCustomerRepository`] - Customer storage and lookup
//! - [`PgOrderRepository`] - Transactional order placement and history

pub mod pg_customer_repository;
pub mod pg_menu_item_repository;
pub mod pg_order_repository;
pub mod pg_restaurant_repository;

pub use pg_customer_repository::PgCustomerRepository;
pub use pg_menu_item_repository::PgMenuItemRepository;
pub use pg_order_repository::PgOrderRepository;
pub use pg_restaurant_repository::PgRestaurantRepository;
