/**
 * Server Initialization
 *
 * Assembles the application: token codec from configuration, optional
 * database pool, application state, and the router.
 *
 * # Initialization Steps
 *
 * 1. Build the `TokenCodec` from the injected configuration
 * 2. Load the optional database pool (`DATABASE_URL`)
 * 3. Build `AppState` (stores wrap the pool when present)
 * 4. Construct the router with the auth gate on protected routes
 *
 * A missing database does not prevent startup; database-backed routes
 * answer 503 until one is configured.
 */

use axum::Router;

use crate::auth::tokens::TokenCodec;
use crate::db::load_database;
use crate::routes::router::create_router;
use crate::server::config::ServerConfig;
use crate::server::state::AppState;

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Router<()> {
    tracing::info!("Initializing Forkful backend server");

    let tokens = TokenCodec::new(config.secret.as_bytes(), config.token_ttl);

    let db_pool = load_database().await;
    let state = AppState::new(db_pool, tokens);

    tracing::info!("Router configured");
    create_router(state)
}
