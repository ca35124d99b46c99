//! Authentication HTTP Handlers
//!
//! - `POST /api/auth/signup` - registration (`signup`)
//! - `POST /api/auth/login` - authentication (`login`)
//! - `GET  /api/auth/me` - current user, gated (`get_me`)

pub mod login;
pub mod me;
pub mod signup;
pub mod types;

pub use login::login;
pub use me::get_me;
pub use signup::signup;
