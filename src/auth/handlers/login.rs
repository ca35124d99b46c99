/**
 * Login Handler
 *
 * POST /api/auth/login - user authentication.
 *
 * # Security
 *
 * - Unknown email and wrong password return the same 401 ("Invalid
 *   credentials") so the endpoint leaks nothing about which part failed
 * - Password verification goes through bcrypt's constant-time compare
 * - Passwords are never logged or echoed back
 */

use axum::{extract::State, response::Json};

use crate::auth::credentials::verify_password;
use crate::auth::handlers::types::{AuthResponse, LoginRequest, UserResponse};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// Verifies the email/password pair and returns a signed token carrying
/// the user id plus display-only name/avatar claims.
///
/// # Errors
///
/// * `401 Unauthorized` - unknown email or wrong password
/// * `503 Service Unavailable` - database not configured
/// * `500 Internal Server Error` - lookup or token signing failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let users = state.users()?;
    tracing::info!("Login request for: {}", request.email);

    let user = users
        .find_by_email(&request.email)
        .await
        .map_err(|e| ApiError::internal("Database error during login lookup", e))?
        .ok_or_else(|| {
            tracing::warn!("Login failed for: {}", request.email);
            ApiError::InvalidCredentials
        })?;

    if !verify_password(&request.password, &user.password_hash) {
        tracing::warn!("Login failed for: {}", request.email);
        return Err(ApiError::InvalidCredentials);
    }

    let token = state
        .tokens
        .issue(user.id, Some(user.name.clone()), user.url_photo.clone())
        .map_err(|e| ApiError::internal("Failed to create token", e))?;

    tracing::info!("User logged in: {}", user.email);

    Ok(Json(AuthResponse {
        token,
        user: UserResponse::from(&user),
    }))
}
