/**
 * Authentication Middleware
 *
 * Request gate for routes that require a logged-in user. Extracts the
 * bearer token from the Authorization header, verifies it with the
 * token codec, and injects the resolved identity into request
 * extensions. The wrapped handler runs exactly once, and only after
 * verification succeeds; a rejected request never reaches the handler
 * or the persistence layer.
 *
 * The gate is pure: no shared-state mutation and no database round-trip.
 * It composes via `axum::middleware::from_fn_with_state` without
 * changing the router's method/path matching.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::header::AUTHORIZATION,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::server::state::AppState;

/// Authenticated identity extracted from a verified token
///
/// Lives only for the current request/response cycle; never cached or
/// shared across requests. `name` and `url_photo` are display-only
/// claims; authorization uses `user_id` alone.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub name: Option<String>,
    pub url_photo: Option<String>,
}

/// Pull the bearer token out of a header map
///
/// Returns `MissingToken` when the Authorization header is absent, not
/// valid UTF-8, or not prefixed with `Bearer `.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(ApiError::MissingToken)?;

    auth_header
        .strip_prefix("Bearer ")
        .ok_or(ApiError::MissingToken)
}

/// Authentication middleware
///
/// 1. Extracts the bearer token (401 `MissingToken` if absent/malformed)
/// 2. Verifies it (401 `InvalidToken`/`Expired` on any failure)
/// 3. Attaches `AuthenticatedUser` to request extensions and runs the
///    wrapped handler
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers()).map_err(|e| {
        tracing::warn!("Missing or malformed Authorization header");
        e
    })?;

    let claims = state.tokens.verify(token).map_err(|e| {
        tracing::warn!("Token rejected: {}", e);
        ApiError::from(e)
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: claims.sub,
        name: claims.name,
        url_photo: claims.url_photo,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Usable as a handler parameter on any route behind `auth_middleware`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::MissingToken
            })?;

        Ok(AuthUser(user))
    }
}
