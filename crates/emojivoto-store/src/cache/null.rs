use std::time::Duration;

use async_trait::async_trait;
use emojivoto_core::Item;

use super::ItemCache;

/// Cache deshabilitado: todo es miss y `put` no hace nada.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCache;

#[async_trait]
impl ItemCache for NullCache {
    async fn get(&self, _code: &str) -> Option<Item> {
        None
    }

    async fn put(&self, _code: &str, _item: &Item, _ttl: Duration) {}

    fn is_enabled(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "none"
    }
}
