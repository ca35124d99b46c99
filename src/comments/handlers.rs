/**
 * Comment HTTP Handlers
 *
 * - `GET  /api/comments/{recipe_id}` - comments with author names
 * - `POST /api/comments/post/{recipe_id}` - gated; author is the token subject
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::SqlValue;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

/// Comment row joined with its author's display name
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub user_name: String,
    pub recipe_id: Uuid,
    pub comment: String,
    pub rating: f64,
}

/// Post-comment request body
#[derive(Debug, Deserialize, Serialize)]
pub struct NewCommentRequest {
    pub comment: String,
    pub rating: f64,
}

/// List comments for a recipe
pub async fn list_comments(
    State(state): State<AppState>,
    Path(recipe_id): Path<Uuid>,
) -> Result<Json<Vec<Comment>>, ApiError> {
    let pool = state.pool()?;

    let comments = sqlx::query_as::<_, Comment>(
        r#"
        SELECT c.id, u.name AS user_name, c.recipe_id, c.comment,
               CAST(c.rating AS double precision) AS rating
        FROM comments c
        JOIN users u ON u.id = c.user_id
        WHERE c.recipe_id = $1
        "#,
    )
    .bind(recipe_id)
    .fetch_all(pool)
    .await
    .map_err(|e| ApiError::internal("Comment listing query failed", e))?;

    Ok(Json(comments))
}

/// Post a comment with a rating on a recipe
///
/// The author is the authenticated subject from the gate; callers
/// cannot attribute comments to anyone else.
pub async fn post_comment(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Path(recipe_id): Path<Uuid>,
    Json(request): Json<NewCommentRequest>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let writes = state.writes()?;

    if request.comment.is_empty() {
        return Err(ApiError::validation("Missing comment body"));
    }
    if !(0.0..=5.0).contains(&request.rating) {
        return Err(ApiError::validation("Rating must be between 0 and 5"));
    }

    let params = [
        SqlValue::Uuid(Uuid::new_v4()),
        SqlValue::Uuid(auth.user_id),
        SqlValue::Uuid(recipe_id),
        SqlValue::Text(request.comment.clone()),
        SqlValue::Float(request.rating),
    ];
    writes
        .execute(
            "INSERT INTO comments (id, user_id, recipe_id, comment, rating) \
             VALUES ($1, $2, $3, $4, $5)",
            &params,
        )
        .await
        .map_err(|e| ApiError::internal("Failed to create comment", e))?;

    Ok((StatusCode::CREATED, "Comment created"))
}
