//! Order entity and creation types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// A placed order.
///
/// Orders are append-only: once created, neither the order row nor its line
/// items are ever updated or deleted through this service.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
    pub id: i64,
    pub customer_id: i64,
    pub restaurant_id: i64,
    pub total_amount: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new order row.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_id: i64,
    pub restaurant_id: i64,
    /// Σ(price × quantity) over the line items, computed at placement time.
    pub total_amount: Decimal,
}

/// One line item to persist alongside a new order.
///
/// `price_at_order` is the snapshot of the menu item's price at placement
/// time; it is immutable once written and decoupled from later price changes.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub menu_item_id: i64,
    pub quantity: i32,
    pub price_at_order: Decimal,
}
