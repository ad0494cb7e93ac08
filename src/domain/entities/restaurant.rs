//! Restaurant entity.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A restaurant offering menu items.
///
/// Descriptive fields are passed through to clients as-is; the service does
/// not interpret them.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub cuisine: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}
