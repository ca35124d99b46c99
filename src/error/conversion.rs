/**
 * Error Conversion
 *
 * This module converts `ApiError` values into HTTP responses so handlers
 * can return them directly.
 *
 * # Response Format
 *
 * Errors are returned as a plain-text body carrying only the short,
 * user-facing message. Internal detail (SQL text, bcrypt/jsonwebtoken
 * errors, stack traces) never reaches the wire; it is logged at the site
 * where the fault occurred.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            // Detail was logged at the fault site; the body stays opaque.
            (status, "Internal server error".to_string()).into_response()
        } else {
            (status, message).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_response() {
        let response = ApiError::MissingToken.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_not_found_response() {
        let response = ApiError::NotFoundOrNotOwned.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
