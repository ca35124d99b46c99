/**
 * Router Configuration
 *
 * Combines the public and gated route groups into the final Axum
 * router, adds request tracing, and installs the 404 fallback. The auth
 * gate is attached inside `gated_routes` via `route_layer`, so it runs
 * only for routes that require it and only after routing has matched.
 */

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::routes::api_routes::{gated_routes, public_routes};
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(state: AppState) -> Router<()> {
    Router::new()
        .merge(public_routes())
        .merge(gated_routes(state.clone()))
        .fallback(|| async { (axum::http::StatusCode::NOT_FOUND, "404 Not Found") })
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
