//! Item directory: the fixed catalog behind a cache-aside layer.

use std::sync::Arc;
use std::time::Duration;

use emojivoto_core::{Item, ItemCatalog};
use tracing::{debug, info};

use crate::cache::{ItemCache, NullCache};
use crate::metrics::DirectoryMetrics;

/// Default lifetime of cached items.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(120);

/// Resolves item codes against the catalog, consulting a cache first.
///
/// The catalog is authoritative: the cache only saves the scan and never
/// changes what [`resolve`](Self::resolve) returns.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use emojivoto_core::ItemCatalog;
/// use emojivoto_store::ItemDirectory;
///
/// # #[tokio::main]
/// # async fn main() {
/// let directory = ItemDirectory::uncached(Arc::new(ItemCatalog::standard()));
///
/// let doughnut = directory.resolve(":doughnut:").await.unwrap();
/// assert_eq!(doughnut.display(), "🍩");
/// assert!(directory.resolve(":nope:").await.is_none());
/// # }
/// ```
#[derive(Clone)]
pub struct ItemDirectory {
    catalog: Arc<ItemCatalog>,
    cache: Arc<dyn ItemCache>,
    ttl: Duration,
    metrics: DirectoryMetrics,
}

impl ItemDirectory {
    /// Creates a directory over `catalog` using `cache` with entries kept for `ttl`.
    pub fn new(catalog: Arc<ItemCatalog>, cache: Arc<dyn ItemCache>, ttl: Duration) -> Self {
        Self {
            catalog,
            cache,
            ttl,
            metrics: DirectoryMetrics::new(),
        }
    }

    /// Creates a directory with caching disabled.
    pub fn uncached(catalog: Arc<ItemCatalog>) -> Self {
        Self::new(catalog, Arc::new(NullCache), DEFAULT_CACHE_TTL)
    }

    /// Looks up the item for `code`.
    ///
    /// Returns `None` when the catalog has no such code; that is a normal
    /// outcome, not a failure. Unknown codes are never cached.
    pub async fn resolve(&self, code: &str) -> Option<Item> {
        let caching = self.cache.is_enabled();

        if caching {
            if let Some(item) = self.cache.get(code).await {
                self.metrics.record_hit();
                info!("Fetched emoji {} from cache", code);
                return Some(item);
            }
            self.metrics.record_miss();
        }

        self.metrics.record_scan();
        let item = self.catalog.find(code).cloned();

        match &item {
            Some(found) if caching => {
                self.cache.put(code, found, self.ttl).await;
            },
            Some(_) => {},
            None => debug!("No emoji with shortcode {}", code),
        }

        item
    }

    /// Returns every catalog item in display order.
    pub fn list(&self) -> &[Item] {
        self.catalog.items()
    }

    /// Returns the cache name (`none` when caching is disabled).
    pub fn cache_name(&self) -> &str {
        self.cache.name()
    }

    /// Returns the TTL applied to cached items.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the lookup metrics for external access.
    pub fn metrics(&self) -> &DirectoryMetrics {
        &self.metrics
    }
}

impl std::fmt::Debug for ItemDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemDirectory")
            .field("items", &self.catalog.len())
            .field("cache", &self.cache.name())
            .field("ttl", &self.ttl)
            .finish()
    }
}
