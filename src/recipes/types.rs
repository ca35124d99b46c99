/**
 * Recipe Types
 *
 * Row types for the list/detail queries and the request body for recipe
 * creation.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Recipe row for the main listing, with its average comment rating
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct RecipeSummary {
    pub id: Uuid,
    pub name_recipe: String,
    pub description: String,
    pub meal_type_id: i32,
    pub img_url: String,
    pub rating: f64,
}

/// Recipe detail row, including the creator's display name
///
/// `creator_name` is the owning user's name, or the guest label for
/// recipes created without an account.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct RecipeDetail {
    pub id: Uuid,
    pub name_recipe: String,
    pub description: String,
    pub meal_type_id: i32,
    pub img_url: String,
    pub creator_name: String,
    pub rating: f64,
    pub steps: String,
}

/// Create-recipe request body
///
/// The owner is taken from the bearer token when one is presented;
/// otherwise `guest_name` must be set and the recipe is stored under
/// that guest label. Image hosting is external; `img_url` is an
/// already-hosted URL.
#[derive(Debug, Deserialize, Serialize)]
pub struct NewRecipeRequest {
    pub name_recipe: String,
    pub description: String,
    pub meal_type_id: i32,
    pub steps: String,
    #[serde(default)]
    pub img_url: Option<String>,
    #[serde(default)]
    pub guest_name: Option<String>,
}
