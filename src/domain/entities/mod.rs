//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Row-backed
//! entities derive `sqlx::FromRow`; `New*` structs carry insert data.

pub mod customer;
pub mod menu_item;
pub mod order;
pub mod restaurant;

pub use customer::{Customer, NewCustomer};
pub use menu_item::MenuItem;
pub use order::{NewOrder, NewOrderItem, Order};
pub use restaurant::Restaurant;
