//! Almacen Redis.

use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use tracing::info;

use super::KeyValueStore;
use crate::error::CacheError;

/// Almacen clave-valor en Redis (`GET` / `SETEX`).
///
/// La expiracion la hace Redis; este tipo no implementa eviction activa.
#[derive(Clone)]
pub struct RedisStore {
    connection: ConnectionManager,
    url: String,
}

impl RedisStore {
    /// Conecta a `url` (ej. `redis://127.0.0.1:6379`) y verifica con `PING`.
    pub async fn connect(url: &str) -> Result<Self, CacheError> {
        let client = redis::Client::open(url)?;
        let mut connection = client.get_connection_manager().await?;

        let _: String = redis::cmd("PING").query_async(&mut connection).await?;
        info!("Successfully initialized redis client for {}", url);

        Ok(Self {
            connection,
            url: url.to_string(),
        })
    }
}

/// Redis no acepta `SETEX` con 0 segundos.
fn ttl_seconds(ttl: Duration) -> u64 {
    ttl.as_secs().max(1)
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut connection = self.connection.clone();
        let value: Option<String> = connection.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError> {
        let mut connection = self.connection.clone();
        let _: () = connection.set_ex(key, value, ttl_seconds(ttl)).await?;
        Ok(())
    }

    fn name(&self) -> &str {
        "redis"
    }
}

impl std::fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStore").field("url", &self.url).finish()
    }
}
