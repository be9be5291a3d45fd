use std::env;
use std::sync::Arc;

use persistence::db::{Database, DatabaseConfig};

/// Favorites database settings
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseSettings {
    /// Load database settings from environment variables
    ///
    /// Environment variables:
    /// - DATABASE_URL: SQLite connection string (default: "sqlite://products_database.db")
    /// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
    pub fn from_env() -> Self {
        let url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://products_database.db".to_string());
        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(5);

        Self {
            url,
            max_connections,
        }
    }
}

/// Builds the shared favorites database handle.
///
/// The connection pool itself is opened lazily, on first access.
pub fn init_database(settings: &DatabaseSettings) -> Arc<Database> {
    let mut config = DatabaseConfig::new(settings.url.clone());
    config.max_connections = settings.max_connections;
    Arc::new(Database::new(config))
}
