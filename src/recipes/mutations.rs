/**
 * Ownership-Checked Mutations
 *
 * State changes on a recipe that only its owner may perform. Each
 * operation issues a single atomic statement whose WHERE predicate is
 * `id = $recipe AND user_id = $owner`; ownership is enforced by the
 * statement itself, not by a prior lookup, so there is no
 * check-then-act race.
 *
 * Zero affected rows maps to `NotFoundOrNotOwned` (404). The design
 * does not distinguish "no such recipe" from "someone else's recipe",
 * which keeps other users' resource ids unguessable. Persistence
 * failures surface as opaque 500s and are never retried.
 */

use uuid::Uuid;

use crate::db::{SqlValue, StatementExecutor};
use crate::error::ApiError;
use crate::recipes::update::{build_recipe_update, RecipeEdit};

/// Flip a recipe's `is_active` flag on behalf of its owner
pub async fn set_recipe_active(
    executor: &dyn StatementExecutor,
    recipe_id: Uuid,
    owner_id: Uuid,
    active: bool,
) -> Result<(), ApiError> {
    let params = [
        SqlValue::Bool(active),
        SqlValue::Uuid(recipe_id),
        SqlValue::Uuid(owner_id),
    ];
    let affected = executor
        .execute(
            "UPDATE recipes SET is_active = $1 WHERE id = $2 AND user_id = $3",
            &params,
        )
        .await
        .map_err(|e| ApiError::internal("Failed to update recipe active flag", e))?;

    if affected == 0 {
        return Err(ApiError::NotFoundOrNotOwned);
    }
    Ok(())
}

/// Apply a sparse edit to a recipe on behalf of its owner
///
/// Builds the minimal UPDATE via the sparse update builder; a request
/// with no usable fields fails with `NoFieldsToUpdate` before any
/// statement is constructed or executed.
pub async fn edit_recipe(
    executor: &dyn StatementExecutor,
    recipe_id: Uuid,
    owner_id: Uuid,
    edit: &RecipeEdit,
) -> Result<(), ApiError> {
    let statement = build_recipe_update(recipe_id, owner_id, edit)?;

    let affected = executor
        .execute(&statement.sql, &statement.params)
        .await
        .map_err(|e| ApiError::internal("Failed to update recipe", e))?;

    if affected == 0 {
        return Err(ApiError::NotFoundOrNotOwned);
    }
    Ok(())
}
