use async_trait::async_trait;

use crate::domain::errors::StorageError;
use crate::domain::shared::observable::Observer;

use super::errors::NetworkError;
use super::model::Product;

/// Port for the remote product catalog.
///
/// One attempt per call; implementations must not retry or cache.
#[async_trait]
pub trait ProductsRemoteDataSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, NetworkError>;
}

/// Port for the durable favorites set, keyed by product id.
#[async_trait]
pub trait ProductsLocalDataSource: Send + Sync {
    /// Inserts the product, replacing every field of an existing row with the same id.
    async fn upsert_favorite(&self, product: &Product) -> Result<(), StorageError>;

    /// Deletes the row matching the product id. Absent ids are a no-op.
    async fn remove_favorite(&self, product: &Product) -> Result<(), StorageError>;

    /// Live view of the whole favorites set, starting with the current snapshot.
    fn observe_favorites(&self) -> Observer<Vec<Product>>;
}
