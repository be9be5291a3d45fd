use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::{str::FromStr, time::Duration};
use thiserror::Error;
use tokio::sync::OnceCell;

use business::domain::errors::StorageError;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.migration_error")]
    MigrationError,
}

impl From<DatabaseError> for StorageError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::ConnectionError => StorageError::Connection,
            DatabaseError::MigrationError => StorageError::Migration,
        }
    }
}

/// Configuration for the database connection
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    /// Private in-memory database. Every pooled connection would open its
    /// own empty database, so the pool is pinned to a single connection.
    pub fn in_memory() -> Self {
        Self {
            connection_string: "sqlite::memory:".to_string(),
            max_connections: 1,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

/// Creates a SQLite connection pool, creating the database file if needed
pub async fn create_sqlite_pool(config: &DatabaseConfig) -> Result<SqlitePool, DatabaseError> {
    let options = SqliteConnectOptions::from_str(&config.connection_string)
        .map_err(|_| DatabaseError::ConnectionError)?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .map_err(|_| DatabaseError::ConnectionError)?;

    Ok(pool)
}

/// Runs the migrations embedded from `migrations/`
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), DatabaseError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|_| DatabaseError::MigrationError)
}

/// Process-wide handle to the favorites database.
///
/// Built once by the composition root and shared by reference. The pool is
/// opened and migrated on first use; concurrent first callers wait on the
/// same initialization instead of racing to open a second pool.
pub struct Database {
    config: DatabaseConfig,
    pool: OnceCell<SqlitePool>,
}

impl Database {
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            pool: OnceCell::new(),
        }
    }

    pub async fn pool(&self) -> Result<&SqlitePool, DatabaseError> {
        self.pool
            .get_or_try_init(|| async {
                tracing::info!(target: "persistence", "Opening favorites database");
                let pool = create_sqlite_pool(&self.config).await?;
                run_migrations(&pool).await?;
                Ok(pool)
            })
            .await
    }

    pub fn is_initialized(&self) -> bool {
        self.pool.initialized()
    }
}
