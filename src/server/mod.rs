//! Server Module
//!
//! Configuration, application state, and server assembly.
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports
//! ├── config.rs - Environment configuration (read once, injected)
//! ├── state.rs  - AppState and FromRef implementations
//! └── init.rs   - create_app: codec + pool + router assembly
//! ```

pub mod config;
pub mod init;
pub mod state;

pub use config::ServerConfig;
pub use init::create_app;
pub use state::AppState;
