/**
 * Server Configuration
 *
 * Environment-driven configuration, read once at startup in `main` and
 * injected into the components that need it. Nothing else in the
 * codebase touches these variables; in particular, the token secret is
 * handed to `TokenCodec::new` exactly once and never re-read.
 *
 * # Variables
 *
 * - `SECRET_KEY` - symmetric token-signing secret. A well-known fallback
 *   is kept for compatibility with existing deployments, but it is a
 *   documented security gap: deployments must set their own secret, and
 *   startup logs shout when the fallback is in use.
 * - `SERVER_PORT` - listen port (default 8080)
 * - `DATABASE_URL` - read separately by `db::load_database`
 */

use std::time::Duration;

use crate::auth::tokens::TOKEN_TTL;

/// Fallback signing secret kept for compatibility with existing
/// deployments. MUST NOT be relied on in production.
pub const FALLBACK_SECRET: &str = "other_key";

/// Process-wide server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen port
    pub port: u16,
    /// Token-signing secret
    pub secret: String,
    /// Token lifetime
    pub token_ttl: Duration,
}

impl ServerConfig {
    /// Load configuration from the environment
    pub fn from_env() -> Self {
        let secret = match std::env::var("SECRET_KEY") {
            Ok(value) if !value.is_empty() => value,
            _ => {
                tracing::warn!(
                    "SECRET_KEY not set; using the well-known fallback secret. \
                     All tokens signed with it are forgeable - do not deploy like this."
                );
                FALLBACK_SECRET.to_string()
            }
        };

        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);

        Self {
            port,
            secret,
            token_ttl: TOKEN_TTL,
        }
    }
}
