/**
 * Persistence Boundary
 *
 * This module defines the minimal capability the mutation layer requires
 * from persistence: execute a parameterized statement and report how many
 * rows it touched. The ownership-checked mutations and the sparse update
 * builder depend only on the `StatementExecutor` trait, never on a
 * concrete storage engine, so integration tests can substitute in-memory
 * mocks and assert that rejected requests issue zero statements.
 *
 * # Configuration
 *
 * `load_database()` reads `DATABASE_URL` and builds a `PgPool`. A missing
 * or unreachable database disables database-backed routes (they answer
 * 503) rather than aborting startup.
 */

use futures_util::future::BoxFuture;
use sqlx::postgres::PgPool;
use uuid::Uuid;

/// A bind parameter crossing the `StatementExecutor` boundary
///
/// Values are always bound positionally; statement text never embeds them.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// Text column value
    Text(String),
    /// UUID key (recipe ids, user ids)
    Uuid(Uuid),
    /// Boolean flag (e.g. `is_active`)
    Bool(bool),
    /// Numeric rating
    Float(f64),
    /// Small integer key (meal-type ids)
    Int(i32),
    /// SQL NULL (nullable text columns)
    Null,
}

/// Capability to execute a single parameterized mutation statement
///
/// The contract mirrors `database/sql`-style `Exec`: one atomic statement,
/// positional parameters, affected-row count back. Implementations must
/// not retry; a failed mutation is terminal for the request.
pub trait StatementExecutor: Send + Sync {
    /// Execute `statement` with `params` bound positionally ($1, $2, ...)
    /// and return the number of affected rows.
    fn execute<'a>(
        &'a self,
        statement: &'a str,
        params: &'a [SqlValue],
    ) -> BoxFuture<'a, Result<u64, sqlx::Error>>;
}

impl StatementExecutor for PgPool {
    fn execute<'a>(
        &'a self,
        statement: &'a str,
        params: &'a [SqlValue],
    ) -> BoxFuture<'a, Result<u64, sqlx::Error>> {
        Box::pin(async move {
            let mut query = sqlx::query(statement);
            for param in params {
                query = match param {
                    SqlValue::Text(v) => query.bind(v.as_str()),
                    SqlValue::Uuid(v) => query.bind(*v),
                    SqlValue::Bool(v) => query.bind(*v),
                    SqlValue::Float(v) => query.bind(*v),
                    SqlValue::Int(v) => query.bind(*v),
                    SqlValue::Null => query.bind(Option::<String>::None),
                };
            }
            let result = query.execute(self).await?;
            Ok(result.rows_affected())
        })
    }
}

/// Load and initialize the database connection pool
///
/// Reads `DATABASE_URL` from the environment. Errors are logged but do
/// not prevent server startup; the function returns `None` and the server
/// runs with database-backed routes disabled.
pub async fn load_database() -> Option<PgPool> {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!("DATABASE_URL not set. Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Connecting to database...");

    match PgPool::connect(&database_url).await {
        Ok(pool) => {
            tracing::info!("Database connection pool created");
            Some(pool)
        }
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Database features will be disabled.");
            None
        }
    }
}
