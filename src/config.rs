// src/config.rs
use std::net::IpAddr;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const MEMORY_URL: &str = "memory://";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("missing environment variable '{0}'")]
    Missing(&'static str),
    #[error("invalid value for '{name}': {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum StorageConfig {
    Postgres { url: String, max_connections: u32 },
    Memory,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub storage: StorageConfig,
    /// Allowed CORS origins; empty means any origin.
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup("HOST") {
            Some(raw) => raw.parse::<IpAddr>().map_err(|e| ConfigError::Invalid {
                name: "HOST",
                reason: e.to_string(),
            })?,
            None => IpAddr::from([0, 0, 0, 0]),
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: "PORT",
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let storage = if database_url == MEMORY_URL {
            StorageConfig::Memory
        } else {
            let max_connections = match lookup("DB_MAX_CONNECTIONS") {
                Some(raw) => raw.parse::<u32>().map_err(|e| ConfigError::Invalid {
                    name: "DB_MAX_CONNECTIONS",
                    reason: e.to_string(),
                })?,
                None => DEFAULT_MAX_CONNECTIONS,
            };
            StorageConfig::Postgres { url: database_url, max_connections }
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self { host, port, storage, cors_origins })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let config = load(&[("DATABASE_URL", "postgres://localhost/catalog")]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.host, IpAddr::from([0, 0, 0, 0]));
        assert!(config.cors_origins.is_empty());
        assert_eq!(
            config.storage,
            StorageConfig::Postgres {
                url: "postgres://localhost/catalog".into(),
                max_connections: DEFAULT_MAX_CONNECTIONS,
            }
        );
    }

    #[test]
    fn database_url_is_required() {
        assert_eq!(load(&[("PORT", "5001")]), Err(ConfigError::Missing("DATABASE_URL")));
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = load(&[("DATABASE_URL", MEMORY_URL), ("PORT", "http")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "PORT", .. }));
    }

    #[test]
    fn memory_url_selects_in_memory_store() {
        let config = load(&[
            ("DATABASE_URL", MEMORY_URL),
            ("PORT", "5001"),
            ("CORS_ORIGINS", "http://localhost:3000, http://localhost:5173,"),
        ])
        .unwrap();
        assert_eq!(config.storage, StorageConfig::Memory);
        assert_eq!(config.port, 5001);
        assert_eq!(config.cors_origins, vec!["http://localhost:3000", "http://localhost:5173"]);
    }
}
