//! Configuration loading for AirAware.
//! Reads airaware.toml from the current directory or the path in AIRAWARE_CONFIG.

use airaware_db::{PoolSettings, SortOrder};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub query: QueryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_host()       -> String { "127.0.0.1".to_string() }
fn default_port()       -> u16    { 5000 }
fn default_static_dir() -> String { "static".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port).parse()?;
        Ok(addr)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default)]
    pub min_connections: u32,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default = "bool_true")]
    pub initialize_schema: bool,
}

fn default_database_url()    -> String { "sqlite://data/air.db".to_string() }
fn default_max_connections() -> u32    { 5 }
fn default_acquire_timeout() -> u64    { 5 }
fn bool_true()               -> bool   { true }

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            min_connections: 0,
            acquire_timeout_secs: default_acquire_timeout(),
            read_only: false,
            initialize_schema: bool_true(),
        }
    }
}

impl DatabaseConfig {
    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_connections: self.max_connections,
            min_connections: self.min_connections,
            acquire_timeout: Duration::from_secs(self.acquire_timeout_secs),
            read_only: self.read_only,
            create_if_missing: !self.read_only,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryConfig {
    #[serde(default)]
    pub sort_order: SortOrder,
}

mod tests;

impl Config {
    /// Load configuration from airaware.toml.
    /// Checks AIRAWARE_CONFIG env var first, then current directory.
    /// A missing file is not an error: every key has a default.
    /// AIRAWARE_DATABASE_URL, from the environment or a .env file,
    /// overrides `database.url`.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let path = std::env::var("AIRAWARE_CONFIG")
            .unwrap_or_else(|_| "airaware.toml".to_string());

        let mut config = if Path::new(&path).exists() {
            let content = std::fs::read_to_string(&path)?;
            Self::from_toml(&content)?
        } else {
            tracing::warn!("Config file not found: {path}, using defaults");
            Self::default()
        };

        if let Ok(url) = std::env::var("AIRAWARE_DATABASE_URL") {
            config.database.url = url;
        }
        Ok(config)
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
