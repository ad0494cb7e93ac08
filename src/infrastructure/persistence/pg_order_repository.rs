//! PostgreSQL implementation of order repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewOrder, NewOrderItem, Order};
use crate::domain::repositories::{OrderItemDetail, OrderRepository, OrderSummary};
use crate::error::AppError;

/// PostgreSQL repository for order placement and history queries.
pub struct PgOrderRepository {
    pool: Arc<PgPool>,
}

impl PgOrderRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn create(
        &self,
        new_order: NewOrder,
        items: Vec<NewOrderItem>,
    ) -> Result<Order, AppError> {
        // Single transaction: an early return here drops `tx` and rolls
        // everything back, so a partial order is never visible.
        let mut tx = self.pool.begin().await?;

        let order = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders (customer_id, restaurant_id, total_amount)
            VALUES ($1, $2, $3)
            RETURNING id, customer_id, restaurant_id, total_amount, status, created_at
            "#,
        )
        .bind(new_order.customer_id)
        .bind(new_order.restaurant_id)
        .bind(new_order.total_amount)
        .fetch_one(&mut *tx)
        .await?;

        for item in &items {
            sqlx::query(
                r#"
                INSERT INTO order_items (order_id, menu_item_id, quantity, price_at_order)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(order.id)
            .bind(item.menu_item_id)
            .bind(item.quantity)
            .bind(item.price_at_order)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(order)
    }

    async fn list_by_customer(&self, customer_id: i64) -> Result<Vec<OrderSummary>, AppError> {
        let rows = sqlx::query_as::<_, OrderSummary>(
            r#"
            SELECT o.id AS order_id, o.status, o.total_amount, o.created_at,
                   r.name AS restaurant_name
            FROM orders o
            JOIN restaurants r ON o.restaurant_id = r.id
            WHERE o.customer_id = $1
            ORDER BY o.created_at DESC
            "#,
        )
        .bind(customer_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn items_for_order(&self, order_id: i64) -> Result<Vec<OrderItemDetail>, AppError> {
        let rows = sqlx::query_as::<_, OrderItemDetail>(
            r#"
            SELECT mi.name, oi.quantity, oi.price_at_order
            FROM order_items oi
            JOIN menu_items mi ON oi.menu_item_id = mi.id
            WHERE oi.order_id = $1
            ORDER BY oi.id
            "#,
        )
        .bind(order_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }
}
