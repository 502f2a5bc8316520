//! Movies Server Library
//!
//! In-memory movie catalogue exposed over a JSON HTTP API, with schema
//! validation and an origin allow-list.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod router;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use middleware::CorsPolicy;
pub use router::create_router;
pub use state::AppState;
