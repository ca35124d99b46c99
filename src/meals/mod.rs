/**
 * Meal Types
 *
 * Read-only taxonomy endpoint: `GET /api/meals`.
 */

use axum::{extract::State, response::Json};
use serde::Serialize;

use crate::error::ApiError;
use crate::server::state::AppState;

/// A meal-type row (breakfast, lunch, ...)
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct MealType {
    pub id: i32,
    pub name: String,
}

/// List all meal types
pub async fn list_meal_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<MealType>>, ApiError> {
    let pool = state.pool()?;

    let meals = sqlx::query_as::<_, MealType>("SELECT id, name FROM meal_type ORDER BY id")
        .fetch_all(pool)
        .await
        .map_err(|e| ApiError::internal("Meal type query failed", e))?;

    Ok(Json(meals))
}
