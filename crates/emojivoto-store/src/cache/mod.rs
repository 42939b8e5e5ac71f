//! Cache layer for the item directory.
//!
//! Este modulo separa dos niveles:
//! - [`ItemCache`]: cache tipado de `Item` que usa el directorio.
//!   Variantes: [`NullCache`] (siempre miss) y [`ExternalCache`].
//! - [`KeyValueStore`]: almacen crudo con TTL detras de `ExternalCache`.
//!   Variantes: [`RedisStore`] y [`LocalStore`] (Moka, en proceso).
//!
//! Ningun error de cache llega al llamador: el cache es una optimizacion.

mod external;
mod local;
mod null;
mod redis_store;

use std::time::Duration;

use async_trait::async_trait;
use emojivoto_core::Item;

use crate::error::CacheError;

pub use external::ExternalCache;
pub use local::{LocalStore, LocalStoreConfig};
pub use null::NullCache;
pub use redis_store::RedisStore;

/// Cache tipado consultado por [`ItemDirectory`](crate::ItemDirectory).
#[async_trait]
pub trait ItemCache: Send + Sync {
    /// Retorna el item guardado bajo `code`, o `None` si no existe,
    /// expiro o no se pudo leer.
    async fn get(&self, code: &str) -> Option<Item>;

    /// Guarda `item` bajo `code` con el TTL dado. Nunca falla.
    async fn put(&self, code: &str, item: &Item, ttl: Duration);

    /// Indica si el cache almacena algo.
    fn is_enabled(&self) -> bool {
        true
    }

    /// Nombre del cache para logging.
    fn name(&self) -> &str;
}

/// Almacen clave-valor con expiracion pasiva por TTL.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Retorna el valor vigente para `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Guarda `value` bajo `key`; expira despues de `ttl`.
    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError>;

    /// Nombre del almacen para logging.
    fn name(&self) -> &str;
}
