//! # Emojivoto Server
//!
//! HTTP front end for voting on emoji: lists the catalog, casts votes and
//! serves the leaderboard, plus health and Prometheus endpoints.

pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod server;
pub mod settings;
pub mod state;

pub use error::{AppError, StartupError};
pub use handlers::health::HealthResponse;
pub use server::{create_router_with_state, run_server_with_state};
pub use settings::ServerConfig;
pub use state::AppState;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
