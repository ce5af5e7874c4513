//! Database connection and table management.
//!
//! Wraps a SQLite connection pool. Request handlers take one pooled
//! connection each via [`Database::acquire`] and hand it explicitly to the
//! repositories.

use crate::error::{DbError, Result};
use crate::schema;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Sqlite;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

/// Pool sizing and open-mode options.
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub read_only: bool,
    pub create_if_missing: bool,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 5,
            min_connections: 0,
            acquire_timeout: Duration::from_secs(5),
            read_only: false,
            create_if_missing: true,
        }
    }
}

/// Main database handle.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
    url: String,
}

impl Database {
    /// Open a pool against the database at `url` (e.g. `sqlite://data/air.db`).
    pub async fn open(url: &str, settings: &PoolSettings) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(DbError::Connect)?
            .read_only(settings.read_only)
            .create_if_missing(settings.create_if_missing && !settings.read_only)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(settings.max_connections)
            .min_connections(settings.min_connections)
            .acquire_timeout(settings.acquire_timeout)
            .connect_with(options)
            .await
            .map_err(DbError::Connect)?;

        info!(url, max_connections = settings.max_connections, "Database pool opened");

        Ok(Self { pool, url: url.to_string() })
    }

    /// Single-connection in-memory database.
    ///
    /// Every SQLite connection to `:memory:` is its own database, so the
    /// pool holds exactly one connection and never recycles it.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(DbError::Connect)?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(DbError::Connect)?;

        Ok(Self { pool, url: "sqlite::memory:".to_string() })
    }

    /// Create all tables and indexes if they don't exist.
    pub async fn initialize(&self) -> Result<()> {
        for ddl in schema::SCHEMA_DDL {
            sqlx::query(ddl).execute(&self.pool).await?;
        }
        debug!(url = %self.url, "Schema initialized");
        Ok(())
    }

    /// Take one connection for the duration of a request. It goes back
    /// to the pool when dropped.
    pub async fn acquire(&self) -> Result<PoolConnection<Sqlite>> {
        self.pool.acquire().await.map_err(DbError::Connect)
    }

    /// Close the pool. Later acquisitions fail.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
