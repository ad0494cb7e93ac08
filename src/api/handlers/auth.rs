//! Handlers for signup and login endpoints.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::auth::{LoginRequest, LoginResponse, SignupRequest, SignupResponse};
use crate::application::services::auth_service::SignupData;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a customer with credentials.
///
/// # Endpoint
///
/// `POST /signup`
///
/// The password is hashed with Argon2id and a per-user random salt before
/// storage; neither the password nor its hash ever appears in a response.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 409 Conflict if the email is already registered.
pub async fn signup_handler(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<SignupResponse>, AppError> {
    payload.validate()?;

    let id = state
        .auth_service
        .signup(SignupData {
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            address: payload.address,
            password: payload.password,
        })
        .await?;

    Ok(Json(SignupResponse {
        message: "Account created successfully!".to_string(),
        id,
    }))
}

/// Verifies credentials and returns a minimal identity payload.
///
/// # Endpoint
///
/// `POST /login`
///
/// No session token or credential is issued on success; the response is
/// identity data only.
///
/// # Errors
///
/// Returns 404 Not Found for an unknown email.
/// Returns 401 Unauthorized for a wrong password (or an account created
/// without credentials).
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    payload.validate()?;

    let customer = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        id: customer.id,
        name: customer.name,
        email: customer.email,
    }))
}
