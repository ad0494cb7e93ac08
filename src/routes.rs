//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /restaurants`            - List all restaurants
//! - `GET  /menu/{restaurant_id}`   - Available menu items for a restaurant
//! - `POST /customers`              - Create a customer (no credentials)
//! - `POST /orders`                 - Place an order
//! - `GET  /orders/{customer_id}`   - Order history, newest first
//! - `POST /signup`                 - Register a customer with a password
//! - `POST /login`                  - Verify credentials
//! - `GET  /health`                 - Database liveness check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Open to all origins, methods, and headers
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// CORS is intentionally wide open: the service is consumed by browser
/// clients on arbitrary origins and carries no cookie-based credentials.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = api::routes::routes()
        .with_state(state)
        .layer(cors)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
