//! DTOs for order placement and history endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::repositories::OrderItemDetail;

/// Request to place an order.
#[derive(Debug, Deserialize, Validate)]
pub struct PlaceOrderRequest {
    pub customer_id: i64,
    pub restaurant_id: i64,

    /// Zero-item orders are rejected here, before any database work.
    #[validate(length(min = 1, message = "Order must contain at least one item"))]
    #[validate(nested)]
    pub items: Vec<OrderItemRequest>,
}

/// One requested line item.
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct OrderItemRequest {
    pub menu_item_id: i64,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,
}

/// Response for a successfully placed order.
#[derive(Debug, Serialize)]
pub struct OrderPlacedResponse {
    pub message: String,
    pub order_id: i64,
    pub total: Decimal,
}

/// One order in the history response, with its line items embedded.
#[derive(Debug, Serialize)]
pub struct OrderHistoryEntry {
    pub order_id: i64,
    pub status: String,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub restaurant_name: String,
    pub items: Vec<OrderItemDetail>,
}
