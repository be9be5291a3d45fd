use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Product catalog service entry point
///
/// Wires the remote catalog and the local favorites store behind the
/// repository, then serves them over HTTP.
/// - config/: Environment-driven configuration (server, CORS, database, catalog API)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers and DTOs
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Build the favorites database handle (opened on first use)
    let database = database_config::init_database(&config.database);

    // 5. Wire dependencies
    let container = DependencyContainer::new(database, &config.products_api).await?;

    // 6. Warm the catalog so the first read usually finds data
    let fetch_products = container.fetch_products_use_case.clone();
    tokio::spawn(async move {
        fetch_products.execute().await;
    });

    // 7. Run server
    Server::run(config, container).await?;

    Ok(())
}
