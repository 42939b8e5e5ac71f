//! Application state.

use std::sync::Arc;

use emojivoto_store::cache::LocalStoreConfig;
use emojivoto_store::emojivoto_core::ItemCatalog;
use emojivoto_store::{
    ExternalCache, InMemoryTally, ItemCache, ItemDirectory, LocalStore, NullCache, RedisStore,
    SqliteTally, TallyBackend, TallyError, VoteTally,
};
use tracing::info;

use crate::error::StartupError;
use crate::metrics::VoteMetrics;
use crate::settings::{CacheBackendKind, ServerConfig, TallyBackendKind};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Vote counting.
    tally: VoteTally,
    /// Emoji lookups.
    directory: ItemDirectory,
}

impl AppState {
    /// Creates a new AppState from already-built components.
    pub fn new(tally: VoteTally, directory: ItemDirectory) -> Self {
        Self { tally, directory }
    }

    /// Creates an AppState with in-memory votes and no cache.
    pub fn in_memory() -> Self {
        Self::new(
            VoteTally::in_memory(),
            ItemDirectory::uncached(Arc::new(ItemCatalog::standard())),
        )
    }

    /// Builds every backend selected by `config`.
    ///
    /// The SQLite backend drops and recreates its database here and Redis is
    /// pinged; any failure is fatal for startup.
    pub async fn bootstrap(config: &ServerConfig) -> Result<Self, StartupError> {
        let backend: Arc<dyn TallyBackend> = match config.tally_backend {
            TallyBackendKind::Memory => Arc::new(InMemoryTally::new()),
            TallyBackendKind::Sqlite => {
                let path = config.database_path.clone();
                let backend = tokio::task::spawn_blocking(move || SqliteTally::bootstrap(path))
                    .await
                    .map_err(TallyError::from)??;
                Arc::new(backend)
            },
        };

        let cache: Arc<dyn ItemCache> = match config.cache_backend {
            CacheBackendKind::Disabled => Arc::new(NullCache),
            CacheBackendKind::Redis => {
                let store = RedisStore::connect(&config.redis_url).await?;
                Arc::new(ExternalCache::new(Arc::new(store)))
            },
            CacheBackendKind::Local => {
                let store = LocalStore::new(LocalStoreConfig {
                    max_capacity: config.cache_max_capacity,
                });
                Arc::new(ExternalCache::new(Arc::new(store)))
            },
        };

        let tally = VoteTally::new(backend).with_observer(Arc::new(VoteMetrics));
        let directory = ItemDirectory::new(
            Arc::new(ItemCatalog::standard()),
            cache,
            config.cache_ttl(),
        );

        info!(
            "Using {} vote storage and {} emoji cache",
            tally.backend_name(),
            directory.cache_name()
        );

        Ok(Self::new(tally, directory))
    }

    /// Returns the vote tally.
    pub fn tally(&self) -> &VoteTally {
        &self.tally
    }

    /// Returns the emoji directory.
    pub fn directory(&self) -> &ItemDirectory {
        &self.directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bootstrap_sqlite_replaces_existing_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("votes.db");
        std::fs::write(&path, b"not a database").unwrap();

        let config = ServerConfig {
            tally_backend: TallyBackendKind::Sqlite,
            database_path: path,
            ..ServerConfig::default()
        };

        let state = AppState::bootstrap(&config).await.unwrap();
        state.tally().vote(":joy:").await.unwrap();

        assert_eq!(state.tally().backend_name(), "sqlite");
        assert_eq!(state.tally().results().await.unwrap()[0].count, 1);
        assert_eq!(state.directory().cache_name(), "none");
    }

    #[tokio::test]
    async fn test_bootstrap_sqlite_failure_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig {
            tally_backend: TallyBackendKind::Sqlite,
            database_path: dir.path().join("missing").join("votes.db"),
            ..ServerConfig::default()
        };

        let result = AppState::bootstrap(&config).await;

        assert!(matches!(result, Err(StartupError::Tally(TallyError::Bootstrap { .. }))));
    }
}
