//! HTTP request handlers.

pub mod emoji;
pub mod health;
pub mod metrics;
pub mod votes;
