//! Cache externo de items sobre un `KeyValueStore`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use emojivoto_core::Item;
use tracing::{debug, warn};

use super::{ItemCache, KeyValueStore};

/// Cache de items serializados como JSON en un almacen con TTL.
///
/// Fallas de lectura, payloads corruptos y fallas de escritura se registran
/// y se tratan como miss; nunca cambian el resultado de una resolucion.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use std::time::Duration;
/// use emojivoto_core::Item;
/// use emojivoto_store::cache::{ExternalCache, ItemCache, LocalStore, LocalStoreConfig};
///
/// # #[tokio::main]
/// # async fn main() {
/// let cache = ExternalCache::new(Arc::new(LocalStore::new(LocalStoreConfig::default())));
/// let item = Item::new(":joy:", "😂");
///
/// cache.put(":joy:", &item, Duration::from_secs(120)).await;
/// assert_eq!(cache.get(":joy:").await, Some(item));
/// # }
/// ```
#[derive(Clone)]
pub struct ExternalCache {
    store: Arc<dyn KeyValueStore>,
}

impl ExternalCache {
    /// Crea un cache sobre el almacen dado.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ItemCache for ExternalCache {
    async fn get(&self, code: &str) -> Option<Item> {
        let payload = match self.store.get(code).await {
            Ok(Some(payload)) => payload,
            Ok(None) => return None,
            Err(e) => {
                warn!("Cache read for {} failed on {}: {}", code, self.store.name(), e);
                return None;
            },
        };

        match Item::from_json(&payload) {
            Ok(item) if item.code() == code => Some(item),
            Ok(item) => {
                warn!(
                    "Discarding cache entry for {} holding foreign item {}",
                    code,
                    item.code()
                );
                None
            },
            Err(e) => {
                warn!("Discarding undecodable cache entry for {}: {}", code, e);
                None
            },
        }
    }

    async fn put(&self, code: &str, item: &Item, ttl: Duration) {
        let payload = match item.to_json() {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Failed to encode {} for caching: {}", code, e);
                return;
            },
        };

        match self.store.set(code, payload, ttl).await {
            Ok(()) => debug!("Successfully cached emoji {}", code),
            Err(e) => warn!("Cache write for {} failed on {}: {}", code, self.store.name(), e),
        }
    }

    fn name(&self) -> &str {
        self.store.name()
    }
}

impl std::fmt::Debug for ExternalCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExternalCache")
            .field("store", &self.store.name())
            .finish()
    }
}
