//! Menu item entity.

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// A dish on a restaurant's menu.
///
/// `is_available` gates whether the item appears in menu listings; the price
/// here is the *current* price, distinct from the snapshot recorded on order
/// items at purchase time.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MenuItem {
    pub id: i64,
    pub restaurant_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub is_available: bool,
}
