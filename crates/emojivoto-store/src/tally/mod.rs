//! Vote tally and its storage backends.
//!
//! [`VoteTally`] is the only entry point used by callers. It delegates to a
//! [`TallyBackend`] chosen once at construction:
//!
//! - [`InMemoryTally`]: a lock-guarded map, linearizable per instance.
//! - [`SqliteTally`]: a relational table updated with an atomic upsert.

mod memory;
mod sqlite;

use std::sync::Arc;

use async_trait::async_trait;
use emojivoto_core::{VoteCount, rank};
use tracing::{debug, info};

use crate::error::TallyError;

pub use memory::InMemoryTally;
pub use sqlite::SqliteTally;

/// Authoritative storage for vote counts.
///
/// # Implementors
///
/// - `InMemoryTally` - process-local counters
/// - `SqliteTally` - durable counters in a SQLite `votes` table
#[async_trait]
pub trait TallyBackend: Send + Sync {
    /// Adds one vote for `choice` and returns the new total.
    ///
    /// The increment must not be lost under concurrent callers.
    async fn increment(&self, choice: &str) -> Result<u64, TallyError>;

    /// Returns a caller-owned copy of every stored count, in no particular order.
    async fn snapshot(&self) -> Result<Vec<VoteCount>, TallyError>;

    /// Returns the name of this backend.
    ///
    /// This is used for logging and identification purposes.
    fn name(&self) -> &str;

    /// Verifies that the backend can serve requests.
    async fn health_check(&self) -> Result<(), TallyError> {
        Ok(())
    }
}

/// Receives a notification after each committed vote.
///
/// Observers run after the backend has accepted the increment and cannot
/// fail or alter the outcome of the vote.
pub trait VoteObserver: Send + Sync {
    /// Called once per successful vote with the new total for `choice`.
    fn vote_recorded(&self, choice: &str, total: u64);
}

/// Counts votes and reports ranked results.
///
/// Holds no state of its own beyond the backend handle, so clones share the
/// same counters.
///
/// # Example
///
/// ```
/// use emojivoto_store::VoteTally;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), emojivoto_store::TallyError> {
/// let tally = VoteTally::in_memory();
/// tally.vote(":joy:").await?;
/// tally.vote(":joy:").await?;
/// tally.vote(":fire:").await?;
///
/// let results = tally.results().await?;
/// assert_eq!(results[0].code, ":joy:");
/// assert_eq!(results[0].count, 2);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct VoteTally {
    backend: Arc<dyn TallyBackend>,
    observer: Option<Arc<dyn VoteObserver>>,
}

impl VoteTally {
    /// Creates a tally over the given backend.
    pub fn new(backend: Arc<dyn TallyBackend>) -> Self {
        Self {
            backend,
            observer: None,
        }
    }

    /// Creates a tally backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryTally::new()))
    }

    /// Attaches an observer notified after every committed vote.
    pub fn with_observer(mut self, observer: Arc<dyn VoteObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Records one vote for `choice`.
    ///
    /// Any code is accepted; checking it against the catalog is up to the caller.
    pub async fn vote(&self, choice: &str) -> Result<(), TallyError> {
        let total = self.backend.increment(choice).await?;

        info!(
            "Voted for [{}], which now has a total of [{}] votes",
            choice, total
        );

        if let Some(observer) = &self.observer {
            observer.vote_recorded(choice, total);
        }

        Ok(())
    }

    /// Returns every voted code ranked by count descending, ties by code.
    pub async fn results(&self) -> Result<Vec<VoteCount>, TallyError> {
        let snapshot = self.backend.snapshot().await?;
        debug!(
            "Ranking {} vote counts from {} backend",
            snapshot.len(),
            self.backend.name()
        );

        Ok(rank(snapshot))
    }

    /// Returns the backend name.
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Checks the health of the backend.
    pub async fn health_check(&self) -> Result<(), TallyError> {
        self.backend.health_check().await
    }
}

impl std::fmt::Debug for VoteTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoteTally")
            .field("backend", &self.backend.name())
            .field("observed", &self.observer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    struct FailingBackend;

    #[async_trait]
    impl TallyBackend for FailingBackend {
        async fn increment(&self, _choice: &str) -> Result<u64, TallyError> {
            Err(TallyError::unavailable("connection refused"))
        }

        async fn snapshot(&self) -> Result<Vec<VoteCount>, TallyError> {
            Err(TallyError::unavailable("connection refused"))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[derive(Default)]
    struct RecordingObserver {
        seen: Mutex<Vec<(String, u64)>>,
    }

    impl VoteObserver for RecordingObserver {
        fn vote_recorded(&self, choice: &str, total: u64) {
            self.seen.lock().push((choice.to_string(), total));
        }
    }

    #[tokio::test]
    async fn test_vote_and_results() {
        let tally = VoteTally::in_memory();

        for _ in 0..3 {
            tally.vote(":joy:").await.unwrap();
        }
        tally.vote(":fire:").await.unwrap();

        let results = tally.results().await.unwrap();
        assert_eq!(
            results,
            vec![VoteCount::new(":joy:", 3), VoteCount::new(":fire:", 1)]
        );
    }

    #[tokio::test]
    async fn test_results_empty_before_votes() {
        let tally = VoteTally::in_memory();

        assert!(tally.results().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_codes_are_tallied() {
        let tally = VoteTally::in_memory();
        tally.vote(":not-in-any-catalog:").await.unwrap();

        let results = tally.results().await.unwrap();
        assert_eq!(results, vec![VoteCount::new(":not-in-any-catalog:", 1)]);
    }

    #[tokio::test]
    async fn test_backend_failure_is_surfaced() {
        let observer = Arc::new(RecordingObserver::default());
        let tally = VoteTally::new(Arc::new(FailingBackend)).with_observer(observer.clone());

        assert!(matches!(
            tally.vote(":joy:").await,
            Err(TallyError::Unavailable { .. })
        ));
        assert!(tally.results().await.is_err());
        assert!(observer.seen.lock().is_empty());
    }

    #[tokio::test]
    async fn test_observer_sees_committed_totals() {
        let observer = Arc::new(RecordingObserver::default());
        let tally = VoteTally::in_memory().with_observer(observer.clone());

        tally.vote(":taco:").await.unwrap();
        tally.vote(":taco:").await.unwrap();

        assert_eq!(
            *observer.seen.lock(),
            vec![(":taco:".to_string(), 1), (":taco:".to_string(), 2)]
        );
    }

    #[tokio::test]
    async fn test_clones_share_backend() {
        let tally = VoteTally::in_memory();
        let clone = tally.clone();

        clone.vote(":beer:").await.unwrap();

        assert_eq!(tally.results().await.unwrap()[0].count, 1);
        assert_eq!(tally.backend_name(), "memory");
    }
}
