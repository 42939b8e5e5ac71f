//! In-memory tally backend.

use std::collections::HashMap;

use async_trait::async_trait;
use emojivoto_core::VoteCount;
use parking_lot::RwLock;

use super::TallyBackend;
use crate::error::TallyError;

/// Process-local vote counters.
///
/// A single lock guards the whole map: increments take it for writing and
/// snapshots for reading, so a snapshot taken after an increment returned
/// always includes it.
#[derive(Debug, Default)]
pub struct InMemoryTally {
    votes: RwLock<HashMap<String, u64>>,
}

impl InMemoryTally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    fn add_one(&self, choice: &str) -> u64 {
        let mut votes = self.votes.write();
        let count = votes.entry(choice.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    fn copy_all(&self) -> Vec<VoteCount> {
        self.votes
            .read()
            .iter()
            .map(|(code, count)| VoteCount::new(code.clone(), *count))
            .collect()
    }
}

#[async_trait]
impl TallyBackend for InMemoryTally {
    async fn increment(&self, choice: &str) -> Result<u64, TallyError> {
        Ok(self.add_one(choice))
    }

    async fn snapshot(&self) -> Result<Vec<VoteCount>, TallyError> {
        Ok(self.copy_all())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
