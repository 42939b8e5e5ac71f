//! Error types for tally backends and cache stores.

/// Errors that can occur while recording or reading votes.
///
/// Every variant is surfaced to the caller of
/// [`VoteTally`](crate::VoteTally); none of them is ever swallowed.
#[derive(Debug, thiserror::Error)]
pub enum TallyError {
    /// The backing store could not be reached.
    #[error("tally backend unavailable: {reason}")]
    Unavailable { reason: String },

    /// A SQL statement failed.
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The blocking worker running a storage call panicked or was cancelled.
    #[error("storage worker failed: {0}")]
    Task(String),

    /// The store could not be prepared before first use.
    #[error("bootstrap failed: {reason}")]
    Bootstrap { reason: String },
}

impl TallyError {
    /// Creates a new unavailable error.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Creates a new bootstrap error.
    pub fn bootstrap(reason: impl Into<String>) -> Self {
        Self::Bootstrap {
            reason: reason.into(),
        }
    }

    /// Returns true if this is a transient error that might succeed on retry.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Unavailable { .. } => true,
            Self::Storage(err) => matches!(
                err.sqlite_error_code(),
                Some(rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked)
            ),
            _ => false,
        }
    }
}

impl From<tokio::task::JoinError> for TallyError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Task(err.to_string())
    }
}

/// Errors raised by raw cache stores.
///
/// These never escape [`ItemDirectory::resolve`](crate::ItemDirectory::resolve):
/// the external cache logs them and degrades to a miss.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// The store could not be reached.
    #[error("cache store unavailable: {0}")]
    Unavailable(String),

    /// A Redis command failed.
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// A cached payload could not be encoded or decoded.
    #[error("encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}
