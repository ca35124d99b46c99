/**
 * User Model and Store
 *
 * This module defines the user record and the `UserStore` seam used by
 * the signup/login handlers. Production code talks to PostgreSQL via
 * `PgUserStore`; integration tests substitute an in-memory store so the
 * full login flow runs without a database.
 */

use chrono::{DateTime, Utc};
use futures_util::future::BoxFuture;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// A user account row
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address (unique, login key)
    pub email: String,
    /// bcrypt password hash; never serialized into responses
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Avatar URL, already hosted externally
    pub url_photo: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Fields for creating a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub url_photo: Option<String>,
}

/// Credential-lookup and account-creation capability
///
/// The auth handlers depend only on this trait. Methods return boxed
/// futures so the store can live behind `Arc<dyn UserStore>` in the
/// application state.
pub trait UserStore: Send + Sync {
    /// Look up a user by email (the login key)
    fn find_by_email<'a>(
        &'a self,
        email: &'a str,
    ) -> BoxFuture<'a, Result<Option<User>, sqlx::Error>>;

    /// Look up a user by id
    fn find_by_id(&self, id: Uuid) -> BoxFuture<'_, Result<Option<User>, sqlx::Error>>;

    /// Insert a new user and return the stored row
    fn insert(&self, new_user: NewUser) -> BoxFuture<'_, Result<User, sqlx::Error>>;
}

/// PostgreSQL-backed user store
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserStore for PgUserStore {
    fn find_by_email<'a>(
        &'a self,
        email: &'a str,
    ) -> BoxFuture<'a, Result<Option<User>, sqlx::Error>> {
        Box::pin(async move {
            sqlx::query_as::<_, User>(
                r#"
                SELECT id, name, email, password_hash, url_photo, created_at
                FROM users
                WHERE email = $1
                "#,
            )
            .bind(email)
            .fetch_optional(&self.pool)
            .await
        })
    }

    fn find_by_id(&self, id: Uuid) -> BoxFuture<'_, Result<Option<User>, sqlx::Error>> {
        Box::pin(async move {
            sqlx::query_as::<_, User>(
                r#"
                SELECT id, name, email, password_hash, url_photo, created_at
                FROM users
                WHERE id = $1
                "#,
            )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
        })
    }

    fn insert(&self, new_user: NewUser) -> BoxFuture<'_, Result<User, sqlx::Error>> {
        Box::pin(async move {
            let id = Uuid::new_v4();
            let now = Utc::now();

            sqlx::query_as::<_, User>(
                r#"
                INSERT INTO users (id, name, email, password_hash, url_photo, created_at)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING id, name, email, password_hash, url_photo, created_at
                "#,
            )
            .bind(id)
            .bind(&new_user.name)
            .bind(&new_user.email)
            .bind(&new_user.password_hash)
            .bind(&new_user.url_photo)
            .bind(now)
            .fetch_one(&self.pool)
            .await
        })
    }
}
