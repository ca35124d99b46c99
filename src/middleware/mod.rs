//! Middleware Module
//!
//! HTTP middleware for the backend server. Currently a single concern:
//!
//! - **`auth`** - bearer-token gate for protected routes

pub mod auth;

pub use auth::{auth_middleware, bearer_token, AuthUser, AuthenticatedUser};
