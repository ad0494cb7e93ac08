//! Repository trait for order placement and history.

use crate::domain::entities::{NewOrder, NewOrderItem, Order};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// One order in a customer's history, annotated with the restaurant name.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OrderSummary {
    pub order_id: i64,
    pub status: String,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub restaurant_name: String,
}

/// One line item of a historical order, annotated with the menu item name.
///
/// `price_at_order` is the snapshot recorded at placement time, not the
/// current menu price.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OrderItemDetail {
    pub name: String,
    pub quantity: i32,
    pub price_at_order: Decimal,
}

/// Repository interface for atomic order placement and history queries.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgOrderRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persists an order and all its line items in a single transaction.
    ///
    /// Either the order row and every item row are committed together, or
    /// nothing is persisted. Returns the created order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a referenced customer, restaurant,
    /// or menu item row does not exist (foreign key violation).
    /// Returns [`AppError::Internal`] on other database errors; the
    /// transaction is rolled back.
    async fn create(&self, new_order: NewOrder, items: Vec<NewOrderItem>)
    -> Result<Order, AppError>;

    /// Returns a customer's orders, newest first, each annotated with its
    /// restaurant name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_customer(&self, customer_id: i64) -> Result<Vec<OrderSummary>, AppError>;

    /// Returns the line items for a single order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn items_for_order(&self, order_id: i64) -> Result<Vec<OrderItemDetail>, AppError>;
}
