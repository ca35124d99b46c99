/**
 * Signup Handler
 *
 * POST /api/auth/signup - user registration.
 *
 * # Registration Process
 *
 * 1. Validate name/email/password
 * 2. Reject duplicate emails
 * 3. Hash the password with bcrypt
 * 4. Insert the user
 * 5. Issue a JWT so the client is logged in immediately
 *
 * Image upload itself is out of scope; clients that want an avatar pass
 * an already-hosted `url_photo`.
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::auth::credentials::hash_password;
use crate::auth::handlers::types::{AuthResponse, SignupRequest, UserResponse};
use crate::auth::users::NewUser;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - missing field, invalid email, or short password
/// * `409 Conflict` - email already registered
/// * `503 Service Unavailable` - database not configured
/// * `500 Internal Server Error` - hashing, insert, or signing failure
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let users = state.users()?;
    tracing::info!("Signup request for email: {}", request.email);

    if request.name.is_empty() || request.email.is_empty() || request.password.is_empty() {
        return Err(ApiError::validation("Missing required fields"));
    }
    if !request.email.contains('@') {
        tracing::warn!("Invalid email format: {}", request.email);
        return Err(ApiError::validation("Invalid email format"));
    }
    if request.password.len() < 8 {
        tracing::warn!("Password too short");
        return Err(ApiError::validation(
            "Password must be at least 8 characters",
        ));
    }

    if let Some(_existing) = users
        .find_by_email(&request.email)
        .await
        .map_err(|e| ApiError::internal("Database error during signup lookup", e))?
    {
        tracing::warn!("Email already exists: {}", request.email);
        return Err(ApiError::conflict("Email already registered"));
    }

    let password_hash = hash_password(&request.password)
        .map_err(|e| ApiError::internal("Failed to hash password", e))?;

    let user = users
        .insert(NewUser {
            name: request.name,
            email: request.email,
            password_hash,
            url_photo: request.url_photo,
        })
        .await
        .map_err(|e| ApiError::internal("Failed to create user", e))?;

    let token = state
        .tokens
        .issue(user.id, Some(user.name.clone()), user.url_photo.clone())
        .map_err(|e| ApiError::internal("Failed to create token", e))?;

    tracing::info!("User created: {} ({})", user.name, user.email);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: UserResponse::from(&user),
        }),
    ))
}
