//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod customers;
pub mod health;
pub mod menu;
pub mod orders;
pub mod restaurants;

pub use auth::{login_handler, signup_handler};
pub use customers::create_customer_handler;
pub use health::health_handler;
pub use menu::menu_handler;
pub use orders::{order_history_handler, place_order_handler};
pub use restaurants::restaurants_handler;
