//! Directory metrics recording.

use metrics::counter;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Registra las descripciones de las metricas del directorio.
/// Llamar una vez al inicio, despues de instalar el recorder.
pub fn register_directory_metrics() {
    metrics::describe_counter!(
        "emojivoto_directory_cache_hits_total",
        "Total number of directory lookups served from cache"
    );
    metrics::describe_counter!(
        "emojivoto_directory_cache_misses_total",
        "Total number of directory lookups not found in cache"
    );
    metrics::describe_counter!(
        "emojivoto_directory_catalog_scans_total",
        "Total number of catalog scans performed by the directory"
    );
    metrics::describe_counter!(
        "emojivoto_cache_evictions_total",
        "Total number of local cache evictions"
    );
}

/// Recorder de metricas del directorio.
/// Usa atomic counters internos para que los tests puedan observar
/// hits, misses y scans sin un recorder global.
#[derive(Debug, Clone, Default)]
pub struct DirectoryMetrics {
    hits: Arc<AtomicU64>,
    misses: Arc<AtomicU64>,
    scans: Arc<AtomicU64>,
}

impl DirectoryMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra un cache hit
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
        counter!("emojivoto_directory_cache_hits_total").increment(1);
    }

    /// Registra un cache miss
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
        counter!("emojivoto_directory_cache_misses_total").increment(1);
    }

    /// Registra un recorrido del catalogo
    pub fn record_scan(&self) {
        self.scans.fetch_add(1, Ordering::Relaxed);
        counter!("emojivoto_directory_catalog_scans_total").increment(1);
    }

    /// Retorna el numero de hits
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Retorna el numero de misses
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Retorna el numero de recorridos del catalogo
    pub fn catalog_scans(&self) -> u64 {
        self.scans.load(Ordering::Relaxed)
    }
}
