//! API route configuration.

use crate::api::handlers::{
    create_customer_handler, health_handler, login_handler, menu_handler, order_history_handler,
    place_order_handler, restaurants_handler, signup_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `GET  /restaurants`          - List all restaurants
/// - `GET  /menu/{restaurant_id}` - Available menu items for a restaurant
/// - `POST /customers`            - Create a customer (no credentials)
/// - `POST /orders`               - Place an order
/// - `GET  /orders/{customer_id}` - Order history, newest first
/// - `POST /signup`               - Register a customer with a password
/// - `POST /login`                - Verify credentials
/// - `GET  /health`               - Database liveness check
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/restaurants", get(restaurants_handler))
        .route("/menu/{restaurant_id}", get(menu_handler))
        .route("/customers", post(create_customer_handler))
        .route("/orders", post(place_order_handler))
        .route("/orders/{customer_id}", get(order_history_handler))
        .route("/signup", post(signup_handler))
        .route("/login", post(login_handler))
        .route("/health", get(health_handler))
}
