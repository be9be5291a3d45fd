use super::{
    cors_config, database_config::DatabaseSettings, products_api_config::ProductsApiConfig,
    server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub database: DatabaseSettings,
    pub products_api: ProductsApiConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            database: DatabaseSettings::from_env(),
            products_api: ProductsApiConfig::from_env(),
        }
    }
}
