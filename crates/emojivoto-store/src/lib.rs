//! # Emojivoto Store
//!
//! Storage backends for the Emojivoto services.
//!
//! ## Features
//!
//! - [`VoteTally`] over an in-memory or SQLite [`TallyBackend`]
//! - [`ItemDirectory`]: cache-aside lookups over the fixed item catalog
//! - Pluggable item caches: disabled, Redis, or an in-process Moka store
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use emojivoto_store::{SqliteTally, VoteTally};
//!
//! let backend = SqliteTally::bootstrap("/var/lib/emojivoto/votes.db")?;
//! let tally = VoteTally::new(Arc::new(backend));
//!
//! tally.vote(":joy:").await?;
//! let leaderboard = tally.results().await?;
//! ```

pub mod cache;
pub mod directory;
pub mod error;
pub mod metrics;
pub mod tally;

// Re-exports
pub use crate::cache::{ExternalCache, ItemCache, KeyValueStore, LocalStore, NullCache, RedisStore};
pub use crate::directory::{DEFAULT_CACHE_TTL, ItemDirectory};
pub use crate::error::{CacheError, TallyError};
pub use crate::metrics::{DirectoryMetrics, register_directory_metrics};
pub use crate::tally::{InMemoryTally, SqliteTally, TallyBackend, VoteObserver, VoteTally};

// Re-export emojivoto_core for consumers
pub use emojivoto_core;
