//! PostgreSQL implementation of menu item repository.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::MenuItem;
use crate::domain::repositories::MenuItemRepository;
use crate::error::AppError;

/// PostgreSQL repository for menu listings and price lookups.
pub struct PgMenuItemRepository {
    pool: Arc<PgPool>,
}

impl PgMenuItemRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuItemRepository for PgMenuItemRepository {
    async fn list_available(&self, restaurant_id: i64) -> Result<Vec<MenuItem>, AppError> {
        let rows = sqlx::query_as::<_, MenuItem>(
            r#"
            SELECT id, restaurant_id, name, description, price, is_available
            FROM menu_items
            WHERE restaurant_id = $1 AND is_available = TRUE
            ORDER BY id
            "#,
        )
        .bind(restaurant_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn find_price(&self, menu_item_id: i64) -> Result<Option<Decimal>, AppError> {
        let price = sqlx::query_scalar::<_, Decimal>(
            "SELECT price FROM menu_items WHERE id = $1",
        )
        .bind(menu_item_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(price)
    }
}
