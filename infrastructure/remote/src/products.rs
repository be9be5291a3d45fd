use async_trait::async_trait;

use business::domain::product::data_sources::ProductsRemoteDataSource;
use business::domain::product::errors::NetworkError;
use business::domain::product::model::Product;

use crate::client::ProductsApiClient;
use crate::dto::ProductsResponse;

/// Remote catalog over HTTP. One GET per call; no retries, no caching.
pub struct ProductsRemoteDataSourceHttp {
    client: ProductsApiClient,
}

impl ProductsRemoteDataSourceHttp {
    pub fn new(client: ProductsApiClient) -> Self {
        Self { client }
    }

    /// Collapses every transport failure into a [`NetworkError`].
    fn normalize(err: reqwest::Error) -> NetworkError {
        if err.is_timeout() {
            NetworkError::Timeout
        } else if err.is_decode() {
            NetworkError::MalformedBody
        } else if let Some(status) = err.status() {
            NetworkError::Status(status.as_u16())
        } else {
            NetworkError::Transport
        }
    }
}

#[async_trait]
impl ProductsRemoteDataSource for ProductsRemoteDataSourceHttp {
    async fn fetch_products(&self) -> Result<Vec<Product>, NetworkError> {
        let url = self
            .client
            .products_url()
            .map_err(|_| NetworkError::Transport)?;

        let response = self
            .client
            .client
            .get(url.clone())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(target: "remote", %url, error = %err, "Catalog request failed");
                Self::normalize(err)
            })?;

        if !response.status().is_success() {
            tracing::warn!(target: "remote", %url, status = %response.status(), "Catalog returned error status");
            return Err(NetworkError::Status(response.status().as_u16()));
        }

        let data: ProductsResponse = response.json().await.map_err(|err| {
            tracing::warn!(target: "remote", %url, error = %err, "Catalog body could not be read");
            Self::normalize(err)
        })?;

        tracing::debug!(target: "remote", count = data.products.len(), "Catalog fetched");
        Ok(data.products.into_iter().map(Product::from).collect())
    }
}
