//! Handler for the menu listing endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::domain::entities::MenuItem;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the available menu items for a restaurant.
///
/// # Endpoint
///
/// `GET /menu/{restaurant_id}`
///
/// Items with `is_available = false` are excluded. There is no existence
/// check on the restaurant id: an unknown id yields an empty list, not 404.
pub async fn menu_handler(
    Path(restaurant_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Vec<MenuItem>>, AppError> {
    let menu = state
        .catalog_service
        .menu_for_restaurant(restaurant_id)
        .await?;

    Ok(Json(menu))
}
