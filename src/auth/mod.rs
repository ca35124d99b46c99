//! Authentication Module
//!
//! This module handles password credentials, JWT tokens, user storage,
//! and the HTTP handlers for registration and login.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── credentials.rs  - Password hashing and verification (bcrypt)
//! ├── tokens.rs       - TokenCodec: JWT issue/verify (HS256, pinned)
//! ├── users.rs        - User model and UserStore trait
//! └── handlers/       - HTTP handlers
//!     ├── types.rs    - Request/response types
//!     ├── signup.rs   - User registration
//!     ├── login.rs    - User authentication
//!     └── me.rs       - Current user info
//! ```
//!
//! # Security
//!
//! - Passwords are bcrypt-hashed with a per-hash salt; raw passwords are
//!   never stored or logged
//! - Tokens are signed with a single process-wide secret injected at
//!   startup; rotating it invalidates every outstanding token
//! - Verification pins the exact HS256 algorithm, rejecting `none` and
//!   asymmetric headers outright
//! - Invalid credentials always answer 401 with no hint of which part
//!   failed

pub mod credentials;
pub mod handlers;
pub mod tokens;
pub mod users;

pub use handlers::types::{AuthResponse, LoginRequest, SignupRequest, UserResponse};
pub use handlers::{get_me, login, signup};
pub use tokens::{Claims, TokenCodec, TokenError};
pub use users::{NewUser, PgUserStore, User, UserStore};
