//! Routes Module
//!
//! Router construction and route registration.
//!
//! - **`router`** - top-level router: public routes, gated routes, tracing
//! - **`api_routes`** - `/api/...` route registration

pub mod api_routes;
pub mod router;

pub use router::create_router;
