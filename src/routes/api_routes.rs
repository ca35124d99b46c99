/**
 * API Route Registration
 *
 * Registers all `/api` routes. Routes are split into two groups:
 *
 * # Public
 *
 * - `POST /api/auth/signup` - registration
 * - `POST /api/auth/login` - authentication
 * - `GET  /api/users` - public user directory
 * - `GET  /api/recipes` - recipe listing
 * - `POST /api/recipes` - create (owner from token, or guest label)
 * - `GET  /api/recipes/by-user?userName=` - listing filtered by author
 * - `GET  /api/recipes/by-guest?guestName=` - listing by guest label
 * - `GET  /api/recipes/{id}` - recipe detail
 * - `GET  /api/meals` - meal-type taxonomy
 * - `GET  /api/comments/{recipe_id}` - comments for a recipe
 *
 * # Gated (auth middleware verifies the bearer token first)
 *
 * - `GET   /api/auth/me` - current user
 * - `GET   /api/users/recipes` - recipes owned by the caller
 * - `PATCH /api/users/activate/{id}` - re-activate an owned recipe
 * - `PATCH /api/users/deactivate/{id}` - hide an owned recipe
 * - `PATCH /api/users/edit/{id}` - sparse edit of an owned recipe
 * - `POST  /api/comments/post/{recipe_id}` - post a comment
 */

use axum::{middleware, routing, Router};

use crate::auth::handlers::{get_me, login, signup};
use crate::comments::handlers::{list_comments, post_comment};
use crate::meals::list_meal_types;
use crate::middleware::auth::auth_middleware;
use crate::recipes::handlers::{
    activate_recipe, create_recipe, deactivate_recipe, edit_recipe_handler, get_recipe,
    list_recipes, my_recipes, recipes_by_guest, recipes_by_user,
};
use crate::server::state::AppState;
use crate::users::list_users;

/// Routes that do not require authentication
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/signup", routing::post(signup))
        .route("/api/auth/login", routing::post(login))
        .route("/api/users", routing::get(list_users))
        .route(
            "/api/recipes",
            routing::get(list_recipes).post(create_recipe),
        )
        .route("/api/recipes/by-user", routing::get(recipes_by_user))
        .route("/api/recipes/by-guest", routing::get(recipes_by_guest))
        .route("/api/recipes/{id}", routing::get(get_recipe))
        .route("/api/meals", routing::get(list_meal_types))
        .route("/api/comments/{recipe_id}", routing::get(list_comments))
}

/// Routes wrapped by the auth gate
///
/// `route_layer` applies the middleware only to routes registered here,
/// after the router has already matched method and path - the gate never
/// changes what the router matched.
pub fn gated_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/auth/me", routing::get(get_me))
        .route("/api/users/recipes", routing::get(my_recipes))
        .route("/api/users/activate/{id}", routing::patch(activate_recipe))
        .route(
            "/api/users/deactivate/{id}",
            routing::patch(deactivate_recipe),
        )
        .route("/api/users/edit/{id}", routing::patch(edit_recipe_handler))
        .route("/api/comments/post/{recipe_id}", routing::post(post_comment))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
