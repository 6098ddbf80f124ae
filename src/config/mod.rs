use std::env;

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::with_security_headers;

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/devevents";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Where events are persisted, selected by the connection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Postgres(String),
}

impl StoreBackend {
    pub fn from_url(url: &str) -> Self {
        let url = url.trim();
        if url == "memory" || url.starts_with("memory:") {
            StoreBackend::Memory
        } else {
            StoreBackend::Postgres(url.to_string())
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreBackend,
    pub max_connections: u32,
    pub host: String,
    pub port: u16,
    /// `RUST_ENV=production`; turns on HSTS.
    pub production: bool,
    pub cors_allowed_origins: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid {
                    name: "DATABASE_MAX_CONNECTIONS",
                    value,
                    expected: "a positive integer",
                })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let port = match lookup("PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value,
                expected: "a TCP port number",
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            store: StoreBackend::from_url(&database_url),
            max_connections,
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            production: lookup("RUST_ENV")
                .map(|v| v.to_lowercase() == "production")
                .unwrap_or(false),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS"),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// In-memory, development-mode settings.
    pub fn for_memory_store() -> Self {
        Self {
            store: StoreBackend::Memory,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            production: false,
            cors_allowed_origins: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(
            config.store,
            StoreBackend::Postgres(DEFAULT_DATABASE_URL.to_string())
        );
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.bind_addr(), "0.0.0.0:3001");
        assert!(!config.production);
        assert!(config.cors_allowed_origins.is_none());
    }

    #[test]
    fn test_memory_store_selection() {
        for url in ["memory", "memory://", " memory:// "] {
            let config = config(&[("DATABASE_URL", url)]).unwrap();
            assert_eq!(config.store, StoreBackend::Memory);
        }
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("DATABASE_URL", "postgres://db/events"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("RUST_ENV", "Production"),
        ])
        .unwrap();

        assert_eq!(
            config.store,
            StoreBackend::Postgres("postgres://db/events".to_string())
        );
        assert_eq!(config.max_connections, 12);
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert!(config.production);
    }

    #[test]
    fn test_malformed_numbers_are_rejected() {
        let err = config(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));

        assert!(config(&[("DATABASE_MAX_CONNECTIONS", "0")]).is_err());
        assert!(config(&[("DATABASE_MAX_CONNECTIONS", "-1")]).is_err());
    }
}
