//! Metrics module for the Emojivoto server.

pub mod http;
pub mod setup;
pub mod votes;

pub use setup::{detached_handle, init_metrics};
pub use votes::VoteMetrics;
