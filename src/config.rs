use std::env;
use std::path::Path;

use anyhow::{bail, Result};
use serde::Deserialize;

use crate::storage::StorageConfig;

/// Version reported when none is configured
pub const DEFAULT_VERSION: &str = "na";

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageSection,
    pub logging: LoggingSection,
    pub version: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            storage: StorageSection::default(),
            logging: LoggingSection::default(),
            version: DEFAULT_VERSION.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from disk and environment.
    pub fn load() -> Result<Self> {
        let config_path = env::var("HELLO_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
        let mut config = Self::load_from(&config_path)?;
        config.apply_legacy_env(|key| env::var(key).ok());
        Ok(config)
    }

    /// Load configuration from `path` (if it exists) and `HELLO__*` variables.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut builder = config::Config::builder();

        if path.exists() {
            builder = builder.add_source(config::File::from(path));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("HELLO")
                .prefix_separator("__")
                .separator("__"),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }
        if config.version.trim().is_empty() {
            config.version = DEFAULT_VERSION.to_string();
        }

        Ok(config)
    }

    /// Apply the unprefixed variables older deployments set
    /// (`POSTGRES_DB_HOST`, `POSTGRES_DB_USER`, `POSTGRES_DB_PASSWORD`, `VERSION`).
    pub fn apply_legacy_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let pg = &mut self.storage.postgres;
        if let Some(host) = lookup("POSTGRES_DB_HOST") {
            pg.host = host;
        }
        if let Some(user) = lookup("POSTGRES_DB_USER") {
            pg.user = user;
        }
        if let Some(password) = lookup("POSTGRES_DB_PASSWORD") {
            pg.password = password;
        }
        if let Some(version) = lookup("VERSION") {
            self.version = version;
        }
    }

    /// Resolve the storage backend configuration.
    pub fn storage_runtime(&self) -> Result<StorageConfig> {
        self.storage.to_runtime()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8081,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct StorageSection {
    pub backend: StorageBackendKind,
    pub postgres: PostgresSection,
}

impl StorageSection {
    pub fn to_runtime(&self) -> Result<StorageConfig> {
        match self.backend {
            StorageBackendKind::Memory => Ok(StorageConfig::Memory),
            StorageBackendKind::Postgres => {
                let pg = &self.postgres;
                if pg.host.trim().is_empty() {
                    bail!("storage.postgres.host must be specified");
                }
                if pg.user.trim().is_empty() {
                    bail!("storage.postgres.user must be specified");
                }
                if pg.database.trim().is_empty() {
                    bail!("storage.postgres.database must be specified");
                }

                Ok(StorageConfig::Postgres {
                    host: pg.host.trim().to_string(),
                    user: pg.user.clone(),
                    password: pg.password.clone(),
                    database: pg.database.clone(),
                    max_connections: pg.max_connections,
                })
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackendKind {
    #[default]
    Postgres,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PostgresSection {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub max_connections: u32,
}

impl Default for PostgresSection {
    fn default() -> Self {
        Self {
            host: "172.17.0.2:5432".to_string(),
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            database: "hello".to_string(),
            max_connections: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Text,
}
