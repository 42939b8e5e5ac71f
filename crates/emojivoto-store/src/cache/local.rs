//! Almacen en proceso usando Moka.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use metrics::counter;
use moka::Expiry;
use moka::future::Cache;

use super::KeyValueStore;
use crate::error::CacheError;

/// Configuracion del almacen local.
#[derive(Debug, Clone)]
pub struct LocalStoreConfig {
    /// Maximo numero de entries (default: 10000)
    pub max_capacity: u64,
}

impl Default for LocalStoreConfig {
    fn default() -> Self {
        Self {
            max_capacity: 10_000,
        }
    }
}

#[derive(Debug, Clone)]
struct Entry {
    payload: String,
    ttl: Duration,
}

/// Cada entry expira segun el TTL con que fue guardada.
struct EntryTtl;

impl Expiry<String, Entry> for EntryTtl {
    fn expire_after_create(&self, _key: &String, value: &Entry, _created_at: Instant) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &Entry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// Almacen clave-valor con TTL dentro del proceso.
/// Thread-safe y async-friendly; no comparte datos entre instancias.
#[derive(Clone)]
pub struct LocalStore {
    inner: Cache<String, Entry>,
}

impl LocalStore {
    /// Crea un nuevo almacen con la configuracion dada.
    pub fn new(config: LocalStoreConfig) -> Self {
        let inner = Cache::builder()
            .max_capacity(config.max_capacity)
            .expire_after(EntryTtl)
            .eviction_listener(|_key: Arc<String>, _value: Entry, cause| {
                let reason = match cause {
                    moka::notification::RemovalCause::Expired => "ttl",
                    moka::notification::RemovalCause::Size => "capacity",
                    moka::notification::RemovalCause::Explicit => "manual",
                    moka::notification::RemovalCause::Replaced => "replaced",
                };
                counter!("emojivoto_cache_evictions_total", "reason" => reason).increment(1);
            })
            .build();

        Self { inner }
    }

    /// Retorna el numero aproximado de entries.
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }

    /// Fuerza las tareas pendientes de mantenimiento (para tests principalmente).
    pub async fn sync(&self) {
        self.inner.run_pending_tasks().await;
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new(LocalStoreConfig::default())
    }
}

#[async_trait]
impl KeyValueStore for LocalStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.inner.get(key).await.map(|entry| entry.payload))
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError> {
        self.inner
            .insert(key.to_string(), Entry { payload: value, ttl })
            .await;
        Ok(())
    }

    fn name(&self) -> &str {
        "local"
    }
}
