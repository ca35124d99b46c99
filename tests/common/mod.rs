//! Shared test fixtures
//!
//! In-memory stand-ins for the persistence collaborators so the full
//! HTTP flows (login, gated mutations) run without a database, plus a
//! TestServer builder wired to the real router and middleware.

use std::sync::{Arc, Mutex};

use axum_test::TestServer;
use futures_util::future::BoxFuture;
use uuid::Uuid;

use forkful::auth::credentials::hash_password;
use forkful::auth::tokens::{TokenCodec, TOKEN_TTL};
use forkful::auth::users::{NewUser, User, UserStore};
use forkful::db::{SqlValue, StatementExecutor};
use forkful::routes::create_router;
use forkful::server::state::AppState;

pub const TEST_SECRET: &[u8] = b"integration-test-secret";

/// In-memory user store
#[derive(Default)]
pub struct MockUserStore {
    users: Mutex<Vec<User>>,
}

impl MockUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a user with a bcrypt-hashed password; returns the new id
    pub fn seed(&self, name: &str, email: &str, password: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.users.lock().unwrap().push(User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            password_hash: hash_password(password).unwrap(),
            url_photo: None,
            created_at: chrono::Utc::now(),
        });
        id
    }
}

impl UserStore for MockUserStore {
    fn find_by_email<'a>(
        &'a self,
        email: &'a str,
    ) -> BoxFuture<'a, Result<Option<User>, sqlx::Error>> {
        Box::pin(async move {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.email == email)
                .cloned())
        })
    }

    fn find_by_id(&self, id: Uuid) -> BoxFuture<'_, Result<Option<User>, sqlx::Error>> {
        Box::pin(async move {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.id == id)
                .cloned())
        })
    }

    fn insert(&self, new_user: NewUser) -> BoxFuture<'_, Result<User, sqlx::Error>> {
        Box::pin(async move {
            let user = User {
                id: Uuid::new_v4(),
                name: new_user.name,
                email: new_user.email,
                password_hash: new_user.password_hash,
                url_photo: new_user.url_photo,
                created_at: chrono::Utc::now(),
            };
            self.users.lock().unwrap().push(user.clone());
            Ok(user)
        })
    }
}

/// Records every statement it is asked to execute
///
/// Mutations report one affected row when the trailing (id, owner)
/// parameter pair is in the `owned` set, zero otherwise; inserts (no
/// trailing uuid pair expected) report one row.
#[derive(Default)]
pub struct MockExecutor {
    owned: Mutex<Vec<(Uuid, Uuid)>>,
    calls: Mutex<Vec<(String, Vec<SqlValue>)>>,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant(&self, recipe_id: Uuid, owner_id: Uuid) {
        self.owned.lock().unwrap().push((recipe_id, owner_id));
    }

    pub fn calls(&self) -> Vec<(String, Vec<SqlValue>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl StatementExecutor for MockExecutor {
    fn execute<'a>(
        &'a self,
        statement: &'a str,
        params: &'a [SqlValue],
    ) -> BoxFuture<'a, Result<u64, sqlx::Error>> {
        Box::pin(async move {
            self.calls
                .lock()
                .unwrap()
                .push((statement.to_string(), params.to_vec()));

            if statement.starts_with("INSERT") {
                return Ok(1);
            }

            let matched = match (params.get(params.len().wrapping_sub(2)), params.last()) {
                (Some(SqlValue::Uuid(recipe)), Some(SqlValue::Uuid(owner))) => {
                    self.owned.lock().unwrap().contains(&(*recipe, *owner))
                }
                _ => false,
            };
            Ok(if matched { 1 } else { 0 })
        })
    }
}

/// Everything a test needs: the server plus handles to the mocks
pub struct TestApp {
    pub server: TestServer,
    pub users: Arc<MockUserStore>,
    pub writes: Arc<MockExecutor>,
    pub tokens: TokenCodec,
}

/// Build a TestServer over the real router and middleware, with mock
/// persistence and no database pool (pool-backed glue answers 503).
pub fn spawn_app() -> TestApp {
    let users = Arc::new(MockUserStore::new());
    let writes = Arc::new(MockExecutor::new());
    let tokens = TokenCodec::new(TEST_SECRET, TOKEN_TTL);

    let state = AppState {
        db_pool: None,
        users: Some(users.clone() as _),
        writes: Some(writes.clone() as _),
        tokens: tokens.clone(),
    };

    let server = TestServer::new(create_router(state)).unwrap();
    TestApp {
        server,
        users,
        writes,
        tokens,
    }
}

/// Authorization header value for a token
pub fn bearer(token: &str) -> axum::http::HeaderValue {
    axum::http::HeaderValue::from_str(&format!("Bearer {token}")).unwrap()
}
