//! Forkful - Recipe Sharing Backend
//!
//! Forkful is a multi-user recipe-sharing backend: user accounts, recipes,
//! comments with ratings, and a meal-type taxonomy, served over HTTP as JSON.
//!
//! # Module Structure
//!
//! - **`auth`** - Password hashing, JWT token codec, user store, auth handlers
//! - **`middleware`** - Request-gating authentication middleware
//! - **`error`** - API error taxonomy and HTTP response conversion
//! - **`db`** - Persistence capability traits and PostgreSQL implementations
//! - **`recipes`** - Recipe endpoints, ownership-checked mutations, sparse updates
//! - **`comments`** - Recipe comments and ratings
//! - **`meals`** - Meal-type taxonomy
//! - **`users`** - Public user directory
//! - **`server`** - Configuration, application state, server assembly
//! - **`routes`** - Router construction and route registration
//!
//! # Authentication Flow
//!
//! 1. **Signup**: name/email/password -> bcrypt hash stored -> JWT returned
//! 2. **Login**: credentials verified -> JWT returned (24h expiry)
//! 3. **Gated routes**: `Authorization: Bearer <token>` verified by the
//!    auth middleware, which injects the authenticated user id
//! 4. **Ownership**: every recipe mutation is filtered by
//!    `id = $recipe AND user_id = $owner` in a single atomic statement

pub mod auth;
pub mod comments;
pub mod db;
pub mod error;
pub mod meals;
pub mod middleware;
pub mod recipes;
pub mod routes;
pub mod server;
pub mod users;
