/**
 * Get Current User Handler
 *
 * GET /api/auth/me - returns the account behind the presented token.
 * The route sits behind the auth middleware, so the subject id arrives
 * through the `AuthUser` extractor; this handler only does the lookup.
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::UserResponse;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - token subject no longer maps to an account
/// * `503 Service Unavailable` - database not configured
/// * `500 Internal Server Error` - lookup failure
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let users = state.users()?;

    let user = users
        .find_by_id(auth.user_id)
        .await
        .map_err(|e| ApiError::internal("Database error during me lookup", e))?
        .ok_or_else(|| {
            // The token verified but its subject is gone; treat it as no
            // longer a valid credential.
            tracing::warn!("Token subject not found: {}", auth.user_id);
            ApiError::InvalidToken
        })?;

    Ok(Json(UserResponse::from(&user)))
}
