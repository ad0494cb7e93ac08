//! Order placement and history service.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde_json::json;

use crate::domain::entities::{NewOrder, NewOrderItem};
use crate::domain::repositories::{
    MenuItemRepository, OrderItemDetail, OrderRepository, OrderSummary,
};
use crate::error::AppError;

/// One requested line item: a menu item id and how many of it.
#[derive(Debug, Clone)]
pub struct LineItem {
    pub menu_item_id: i64,
    pub quantity: i32,
}

/// Result of a successful order placement.
#[derive(Debug, Clone)]
pub struct PlacedOrder {
    pub order_id: i64,
    pub total: Decimal,
}

/// One historical order with its line items attached.
#[derive(Debug, Clone)]
pub struct CustomerOrder {
    pub summary: OrderSummary,
    pub items: Vec<OrderItemDetail>,
}

/// Service for placing orders and reading order history.
pub struct OrderService<M: MenuItemRepository, O: OrderRepository> {
    menu_repository: Arc<M>,
    order_repository: Arc<O>,
}

impl<M: MenuItemRepository, O: OrderRepository> OrderService<M, O> {
    /// Creates a new order service.
    pub fn new(menu_repository: Arc<M>, order_repository: Arc<O>) -> Self {
        Self {
            menu_repository,
            order_repository,
        }
    }

    /// Places an order for the given line items.
    ///
    /// Looks up the current price of every menu item, computes the total,
    /// and persists the order with per-item price snapshots in a single
    /// transaction. A missing menu item aborts the whole operation before
    /// anything is written.
    ///
    /// Prices may change between this lookup and a concurrent admin update;
    /// the snapshot taken here wins for this order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `items` is empty.
    /// Returns [`AppError::NotFound`] naming the first missing menu item id.
    /// Returns [`AppError::Internal`] on database errors (nothing persisted).
    pub async fn place_order(
        &self,
        customer_id: i64,
        restaurant_id: i64,
        items: Vec<LineItem>,
    ) -> Result<PlacedOrder, AppError> {
        if items.is_empty() {
            return Err(AppError::bad_request(
                "Order must contain at least one item",
                json!({}),
            ));
        }

        let mut total = Decimal::ZERO;
        let mut new_items = Vec::with_capacity(items.len());

        for line in &items {
            let price = self
                .menu_repository
                .find_price(line.menu_item_id)
                .await?
                .ok_or_else(|| {
                    AppError::not_found(
                        format!("Menu item {} not found", line.menu_item_id),
                        json!({ "menu_item_id": line.menu_item_id }),
                    )
                })?;

            total += price * Decimal::from(line.quantity);
            new_items.push(NewOrderItem {
                menu_item_id: line.menu_item_id,
                quantity: line.quantity,
                price_at_order: price,
            });
        }

        let new_order = NewOrder {
            customer_id,
            restaurant_id,
            total_amount: total,
        };

        let order = self.order_repository.create(new_order, new_items).await?;

        Ok(PlacedOrder {
            order_id: order.id,
            total: order.total_amount,
        })
    }

    /// Returns a customer's orders, newest first, each with its line items.
    ///
    /// Fetches the line items with one follow-up query per order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn order_history(&self, customer_id: i64) -> Result<Vec<CustomerOrder>, AppError> {
        let summaries = self.order_repository.list_by_customer(customer_id).await?;

        let mut orders = Vec::with_capacity(summaries.len());
        for summary in summaries {
            let items = self.order_repository.items_for_order(summary.order_id).await?;
            orders.push(CustomerOrder { summary, items });
        }

        Ok(orders)
    }
}
