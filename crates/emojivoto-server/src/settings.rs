//! Server configuration.
//!
//! Values come from built-in defaults overridden by `EMOJIVOTO_*`
//! environment variables, e.g. `EMOJIVOTO_TALLY_BACKEND=sqlite`.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use config::{Config, Environment};
use serde::Deserialize;
use thiserror::Error;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "EMOJIVOTO";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Storage used for vote counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TallyBackendKind {
    /// Process-local counters, lost on restart.
    Memory,
    /// SQLite database, recreated at startup.
    Sqlite,
}

/// Cache placed in front of the emoji catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackendKind {
    #[serde(rename = "none", alias = "off")]
    Disabled,
    Redis,
    Local,
}

/// Complete server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub tally_backend: TallyBackendKind,
    pub database_path: PathBuf,
    pub cache_backend: CacheBackendKind,
    pub redis_url: String,
    pub cache_ttl_seconds: u64,
    pub cache_max_capacity: u64,
}

impl ServerConfig {
    /// Loads configuration from defaults and the process environment.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(None)
    }

    /// Loads configuration from defaults and the given variables instead of
    /// the process environment. Keys carry the `EMOJIVOTO_` prefix.
    pub fn load_from(vars: Option<config::Map<String, String>>) -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8080)?
            .set_default("tally_backend", "memory")?
            .set_default("database_path", "emojivoto.db")?
            .set_default("cache_backend", "none")?
            .set_default("redis_url", "redis://127.0.0.1:6379")?
            .set_default("cache_ttl_seconds", 120)?
            .set_default("cache_max_capacity", 10_000)?
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(vars),
            )
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.cache_ttl_seconds == 0 {
            return Err(SettingsError::Invalid(
                "cache_ttl_seconds must be greater than zero".to_string(),
            ));
        }
        if self.cache_max_capacity == 0 {
            return Err(SettingsError::Invalid(
                "cache_max_capacity must be greater than zero".to_string(),
            ));
        }
        if self.tally_backend == TallyBackendKind::Sqlite
            && self.database_path.as_os_str().is_empty()
        {
            return Err(SettingsError::Invalid(
                "database_path is required for the sqlite backend".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the socket address to bind.
    pub fn addr(&self) -> Result<SocketAddr, SettingsError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| SettingsError::Invalid(format!("invalid bind address: {e}")))
    }

    /// Returns the TTL applied to cached emoji.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            tally_backend: TallyBackendKind::Memory,
            database_path: PathBuf::from("emojivoto.db"),
            cache_backend: CacheBackendKind::Disabled,
            redis_url: "redis://127.0.0.1:6379".to_string(),
            cache_ttl_seconds: 120,
            cache_max_capacity: 10_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Option<config::Map<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::load_from(vars(&[])).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.tally_backend, TallyBackendKind::Memory);
        assert_eq!(config.cache_backend, CacheBackendKind::Disabled);
        assert_eq!(config.cache_ttl(), Duration::from_secs(120));
        assert_eq!(config.addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_environment_overrides() {
        let config = ServerConfig::load_from(vars(&[
            ("EMOJIVOTO_PORT", "9090"),
            ("EMOJIVOTO_TALLY_BACKEND", "sqlite"),
            ("EMOJIVOTO_DATABASE_PATH", "/tmp/votes.db"),
            ("EMOJIVOTO_CACHE_BACKEND", "redis"),
            ("EMOJIVOTO_REDIS_URL", "redis://cache:6379"),
            ("EMOJIVOTO_CACHE_TTL_SECONDS", "30"),
        ]))
        .unwrap();

        assert_eq!(config.port, 9090);
        assert_eq!(config.tally_backend, TallyBackendKind::Sqlite);
        assert_eq!(config.database_path, PathBuf::from("/tmp/votes.db"));
        assert_eq!(config.cache_backend, CacheBackendKind::Redis);
        assert_eq!(config.redis_url, "redis://cache:6379");
        assert_eq!(config.cache_ttl(), Duration::from_secs(30));
    }

    #[test]
    fn test_cache_disabled_alias() {
        let config = ServerConfig::load_from(vars(&[("EMOJIVOTO_CACHE_BACKEND", "off")])).unwrap();

        assert_eq!(config.cache_backend, CacheBackendKind::Disabled);
    }

    #[test]
    fn test_zero_ttl_rejected() {
        let result = ServerConfig::load_from(vars(&[("EMOJIVOTO_CACHE_TTL_SECONDS", "0")]));

        assert!(matches!(result, Err(SettingsError::Invalid(_))));
    }

    #[test]
    fn test_unknown_backend_rejected() {
        let result = ServerConfig::load_from(vars(&[("EMOJIVOTO_TALLY_BACKEND", "mongodb")]));

        assert!(matches!(result, Err(SettingsError::Load(_))));
    }

    #[test]
    fn test_default_matches_loaded_defaults() {
        let loaded = ServerConfig::load_from(vars(&[])).unwrap();
        let default = ServerConfig::default();

        assert_eq!(loaded.host, default.host);
        assert_eq!(loaded.redis_url, default.redis_url);
        assert_eq!(loaded.cache_max_capacity, default.cache_max_capacity);
        assert!(default.validate().is_ok());
    }
}
