//! Handler for the restaurant listing endpoint.

use axum::{Json, extract::State};

use crate::domain::entities::Restaurant;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all restaurants.
///
/// # Endpoint
///
/// `GET /restaurants`
///
/// Unfiltered and unpaginated; descriptive fields are returned as stored.
pub async fn restaurants_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Restaurant>>, AppError> {
    let restaurants = state.catalog_service.list_restaurants().await?;

    Ok(Json(restaurants))
}
