//! Emojivoto Core - Domain types
//!
//! This crate provides the foundational types shared by the tally, the
//! directory and the HTTP server:
//!
//! - [`Item`]: a catalog entry (shortcode plus its rendering).
//! - [`ItemCatalog`]: the fixed, read-only list of votable items.
//! - [`VoteCount`]: a per-code vote total as reported in results.
//! - [`rank`]: the deterministic ordering applied to every result set.

pub mod catalog;
pub mod error;
pub mod ranking;
pub mod types;

pub use catalog::ItemCatalog;
pub use error::{CatalogError, Result};
pub use ranking::rank;
pub use types::{Item, VoteCount};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
