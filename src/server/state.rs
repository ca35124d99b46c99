/**
 * Application State
 *
 * Central state container for the Axum application. Holds the persistence
 * collaborators and the token codec, and implements `FromRef` so handlers
 * can extract just the slice they need.
 *
 * # Thread Safety
 *
 * Everything here is read-only after startup: the codec's secret never
 * changes for the process lifetime, and the stores are shared behind
 * `Arc`. No cross-request mutable state exists in this layer.
 *
 * # Optional Persistence
 *
 * The store fields are `None` when `DATABASE_URL` is not configured;
 * handlers answer 503 in that case. Tests inject in-memory mocks here
 * instead of a real pool.
 */

use axum::extract::FromRef;
use sqlx::PgPool;
use std::sync::Arc;

use crate::auth::tokens::TokenCodec;
use crate::auth::users::UserStore;
use crate::db::StatementExecutor;
use crate::error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Connection pool for read-only query glue (lists, detail pages).
    /// `None` if the database is not configured.
    pub db_pool: Option<PgPool>,
    /// Credential lookup and account creation
    pub users: Option<Arc<dyn UserStore>>,
    /// Mutation execution (ownership-checked updates, comment inserts)
    pub writes: Option<Arc<dyn StatementExecutor>>,
    /// Token issue/verify, secret injected at startup
    pub tokens: TokenCodec,
}

impl AppState {
    /// Build production state from an optional pool
    pub fn new(db_pool: Option<PgPool>, tokens: TokenCodec) -> Self {
        let users: Option<Arc<dyn UserStore>> = db_pool
            .clone()
            .map(|pool| Arc::new(crate::auth::users::PgUserStore::new(pool)) as _);
        let writes: Option<Arc<dyn StatementExecutor>> =
            db_pool.clone().map(|pool| Arc::new(pool) as _);

        Self {
            db_pool,
            users,
            writes,
            tokens,
        }
    }

    /// User store, or 503 if persistence is not configured
    pub fn users(&self) -> Result<&Arc<dyn UserStore>, ApiError> {
        self.users.as_ref().ok_or_else(|| {
            tracing::error!("Database not configured");
            ApiError::Unavailable
        })
    }

    /// Statement executor, or 503 if persistence is not configured
    pub fn writes(&self) -> Result<&Arc<dyn StatementExecutor>, ApiError> {
        self.writes.as_ref().ok_or_else(|| {
            tracing::error!("Database not configured");
            ApiError::Unavailable
        })
    }

    /// Query pool, or 503 if persistence is not configured
    pub fn pool(&self) -> Result<&PgPool, ApiError> {
        self.db_pool.as_ref().ok_or_else(|| {
            tracing::error!("Database not configured");
            ApiError::Unavailable
        })
    }
}

impl FromRef<AppState> for Option<PgPool> {
    fn from_ref(state: &AppState) -> Self {
        state.db_pool.clone()
    }
}

impl FromRef<AppState> for TokenCodec {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}
