//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`RestaurantRepository`] - Restaurant listings
//! - [`MenuItemRepository`] - Menu listings and price lookups
//! - [`CustomerRepository`] - Customer creation and lookup
//! - [`OrderRepository`] - Atomic order placement and history

pub mod customer_repository;
pub mod menu_item_repository;
pub mod order_repository;
pub mod restaurant_repository;

pub use customer_repository::CustomerRepository;
pub use menu_item_repository::MenuItemRepository;
pub use order_repository::{OrderItemDetail, OrderRepository, OrderSummary};
pub use restaurant_repository::RestaurantRepository;

#[cfg(test)]
pub use customer_repository::MockCustomerRepository;
#[cfg(test)]
pub use menu_item_repository::MockMenuItemRepository;
#[cfg(test)]
pub use order_repository::MockOrderRepository;
#[cfg(test)]
pub use restaurant_repository::MockRestaurantRepository;
