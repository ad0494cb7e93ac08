//! DTOs for the customer creation endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a customer without credentials.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Response carrying the generated customer id.
#[derive(Debug, Serialize)]
pub struct CustomerCreatedResponse {
    pub message: String,
    pub id: i64,
}
