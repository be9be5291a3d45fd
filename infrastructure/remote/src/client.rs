use std::time::Duration;

use reqwest::Client;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared HTTP client configuration for the product catalog API.
pub struct ProductsApiClient {
    pub client: Client,
    pub base_url: Url,
}

impl ProductsApiClient {
    /// Builds a client for `base_url`. A missing trailing slash is added so
    /// endpoint paths are appended to the base path instead of replacing its
    /// last segment.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, url::ParseError> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Ok(Self { client, base_url })
    }

    /// Returns the products endpoint URL.
    pub fn products_url(&self) -> Result<Url, url::ParseError> {
        self.base_url.join("products")
    }
}
