//! Handlers for order placement and history endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::order::{OrderHistoryEntry, OrderPlacedResponse, PlaceOrderRequest};
use crate::application::services::order_service::LineItem;
use crate::error::AppError;
use crate::state::AppState;

/// Places an order.
///
/// # Endpoint
///
/// `POST /orders`
///
/// # Request Body
///
/// ```json
/// {
///   "customer_id": 1,
///   "restaurant_id": 2,
///   "items": [
///     { "menu_item_id": 10, "quantity": 2 },
///     { "menu_item_id": 11, "quantity": 1 }
///   ]
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "message": "Order placed successfully!",
///   "order_id": 42,
///   "total": "24.50"
/// }
/// ```
///
/// The total is Σ(current price × quantity) over the line items; each item's
/// price is snapshotted onto the order. The order and all its items are
/// committed in one transaction — on any failure nothing is persisted.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails (empty items, zero quantity).
/// Returns 404 Not Found naming the first missing menu item id.
/// Returns 500 Internal Server Error on database failures.
pub async fn place_order_handler(
    State(state): State<AppState>,
    Json(payload): Json<PlaceOrderRequest>,
) -> Result<Json<OrderPlacedResponse>, AppError> {
    payload.validate()?;

    let items = payload
        .items
        .into_iter()
        .map(|item| LineItem {
            menu_item_id: item.menu_item_id,
            quantity: item.quantity,
        })
        .collect();

    let placed = state
        .order_service
        .place_order(payload.customer_id, payload.restaurant_id, items)
        .await?;

    Ok(Json(OrderPlacedResponse {
        message: "Order placed successfully!".to_string(),
        order_id: placed.order_id,
        total: placed.total,
    }))
}

/// Returns a customer's order history, newest first.
///
/// # Endpoint
///
/// `GET /orders/{customer_id}`
///
/// Each order is annotated with its restaurant name and carries its line
/// items (menu item name, quantity, price snapshot at purchase time). An
/// unknown customer id yields an empty array.
pub async fn order_history_handler(
    Path(customer_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderHistoryEntry>>, AppError> {
    let orders = state.order_service.order_history(customer_id).await?;

    let entries = orders
        .into_iter()
        .map(|order| OrderHistoryEntry {
            order_id: order.summary.order_id,
            status: order.summary.status,
            total_amount: order.summary.total_amount,
            created_at: order.summary.created_at,
            restaurant_name: order.summary.restaurant_name,
            items: order.items,
        })
        .collect();

    Ok(Json(entries))
}
