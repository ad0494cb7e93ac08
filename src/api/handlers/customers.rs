//! Handler for the customer creation endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::customer::{CreateCustomerRequest, CustomerCreatedResponse};
use crate::application::services::customer_service::CustomerData;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a customer without credentials.
///
/// # Endpoint
///
/// `POST /customers`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Alice",
///   "email": "alice@example.com",
///   "phone": "555-0100",    // optional
///   "address": "1 Main St"  // optional
/// }
/// ```
///
/// The created record has no password and cannot log in; `POST /signup` is
/// the credentialed path.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 409 Conflict if the email is already registered.
pub async fn create_customer_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateCustomerRequest>,
) -> Result<Json<CustomerCreatedResponse>, AppError> {
    payload.validate()?;

    let id = state
        .customer_service
        .create_customer(CustomerData {
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            address: payload.address,
        })
        .await?;

    Ok(Json(CustomerCreatedResponse {
        message: "Customer created".to_string(),
        id,
    }))
}
