use std::env;
use std::time::Duration;

use remote::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

/// Configuration for the remote product catalog.
#[derive(Debug, Clone)]
pub struct ProductsApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ProductsApiConfig {
    /// Environment variables:
    /// - PRODUCTS_API_BASE_URL: Catalog base URL (default: "https://dummyjson.com/")
    /// - PRODUCTS_API_TIMEOUT_SECS: Request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        let base_url =
            env::var("PRODUCTS_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout = env::var("PRODUCTS_API_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        Self { base_url, timeout }
    }
}
