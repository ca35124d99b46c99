/**
 * API Error Types
 *
 * This module defines the error enum used by HTTP handlers and the core
 * auth/mutation layers. Each variant maps to exactly one HTTP status via
 * `status_code()`, and `message()` yields the plain-text body sent to the
 * client.
 *
 * # Error Categories
 *
 * ## Authentication errors (401)
 *
 * - `MissingToken` - Authorization header absent or not `Bearer `-prefixed
 * - `InvalidToken` - signature, algorithm, or shape check failed
 * - `Expired` - signature fine, expiry in the past
 *
 * `InvalidToken` and `Expired` surface identically to the caller but stay
 * distinguishable in logs and tests.
 *
 * ## Request errors (4xx)
 *
 * - `NoFieldsToUpdate` - sparse edit carried no usable field (400)
 * - `NotFoundOrNotOwned` - mutation matched zero rows (404); deliberately
 *   does not reveal whether the resource exists at all
 * - `Validation` / `Conflict` - malformed input (400) / duplicate (409)
 *
 * ## System faults (5xx)
 *
 * - `Unavailable` - database not configured (503)
 * - `Internal` - opaque 500; detail is logged where the fault occurred
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Backend error taxonomy
///
/// Handlers return `Result<_, ApiError>`; the `IntoResponse` impl in
/// `conversion.rs` turns any variant directly into an HTTP response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Authorization header absent or not prefixed with `Bearer `
    #[error("Missing token")]
    MissingToken,

    /// Token failed signature, algorithm, or shape verification
    #[error("Invalid token")]
    InvalidToken,

    /// Token expired (and only the expiry check failed)
    #[error("Token expired")]
    Expired,

    /// Login failed; deliberately silent on whether email or password
    /// was wrong
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Sparse update carried no present, non-empty field
    #[error("No valid fields to update")]
    NoFieldsToUpdate,

    /// Mutation matched zero rows: missing resource or someone else's
    #[error("Recipe not found or not owned by user")]
    NotFoundOrNotOwned,

    /// Invalid request input
    #[error("{message}")]
    Validation {
        /// Human-readable error message
        message: String,
    },

    /// Request conflicts with existing state (e.g. duplicate email)
    #[error("{message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Database not configured
    #[error("Database not configured")]
    Unavailable,

    /// Internal failure; detail is logged, never returned to the caller
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    /// Create a validation error (400)
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a conflict error (409)
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Log a system fault with full detail and return the opaque variant
    ///
    /// The caller-facing body never includes the underlying error text.
    pub fn internal(context: &str, err: impl std::fmt::Display) -> Self {
        tracing::error!("{}: {}", context, err);
        Self::Internal
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingToken | Self::InvalidToken | Self::Expired | Self::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            Self::NoFieldsToUpdate | Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFoundOrNotOwned => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the plain-text message sent to the client
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::internal("Database error", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_errors_map_to_401() {
        assert_eq!(ApiError::MissingToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::InvalidToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::Expired.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::NoFieldsToUpdate.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFoundOrNotOwned.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::conflict("Email already registered").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Internal.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_message_is_opaque() {
        let err = ApiError::internal("Hashing failed", "bcrypt: cost out of range");
        assert_eq!(err.message(), "Internal server error");
    }

    #[test]
    fn test_validation_message_passthrough() {
        let err = ApiError::validation("Invalid email format");
        assert_eq!(err.message(), "Invalid email format");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
