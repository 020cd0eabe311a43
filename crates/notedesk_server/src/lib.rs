//! HTTP front end for notedesk.
//!
//! # Responsibility
//! - Load process configuration.
//! - Expose the note service over JSON/HTTP.
//! - Own the server run loop and graceful shutdown.

pub mod config;
pub mod http;
pub mod server;
pub mod state;

pub use config::{ConfigError, DatabaseLocation, ServerConfig};
pub use http::router;
pub use server::{run, serve, ServerError};
pub use state::AppState;
