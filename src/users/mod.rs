/**
 * Public User Directory
 *
 * `GET /api/users` - public slice of every account (no email, no hash).
 */

use axum::{extract::State, response::Json};
use serde::Serialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::server::state::AppState;

/// Public user row
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub url_photo: String,
}

/// List all users with their public profile fields
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<PublicUser>>, ApiError> {
    let pool = state.pool()?;

    let users = sqlx::query_as::<_, PublicUser>(
        "SELECT id, name, COALESCE(url_photo, '') AS url_photo FROM users ORDER BY name",
    )
    .fetch_all(pool)
    .await
    .map_err(|e| ApiError::internal("User directory query failed", e))?;

    Ok(Json(users))
}
