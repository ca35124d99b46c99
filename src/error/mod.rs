//! API Error Module
//!
//! This module defines the error taxonomy for the Forkful backend and the
//! conversion of errors into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Propagation Policy
//!
//! User errors (`MissingToken`, `InvalidToken`, `Expired`,
//! `NoFieldsToUpdate`, `NotFoundOrNotOwned`, validation, conflict) map to
//! precise 4xx statuses with short plain-text messages. System faults
//! (hashing, persistence, token signing) are logged with full detail and
//! surfaced as an opaque 500 with no internal detail in the body.

pub mod conversion;
pub mod types;

pub use types::ApiError;
