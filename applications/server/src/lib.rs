//! TubeDeck Server Library
//!
//! Thin HTTP adapter over the playlist store: per-user playlists persisted
//! as JSON files, exposed as a small REST API.
//!
//! This library exposes the router and core components for testing.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod router;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use router::create_router;
pub use state::AppState;
