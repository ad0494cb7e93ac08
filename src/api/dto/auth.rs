//! DTOs for signup and login endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to register a customer with credentials.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    pub phone: Option<String>,
    pub address: Option<String>,

    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

/// Response carrying the generated customer id.
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: String,
    pub id: i64,
}

/// Request to verify credentials.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

/// Minimal identity payload returned on successful login.
///
/// This is not a credential: no token or session is issued, matching the
/// service's external contract.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub id: i64,
    pub name: String,
    pub email: String,
}
