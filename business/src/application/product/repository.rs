use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::data_sources::{ProductsLocalDataSource, ProductsRemoteDataSource};
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductsRepository;
use crate::domain::shared::observable::Observer;

/// Façade over the remote catalog and the local favorites store.
///
/// Holds no data of its own: the catalog is passed through on every call and
/// favorite status is never merged into catalog products.
pub struct ProductsRepositoryImpl {
    pub local: Arc<dyn ProductsLocalDataSource>,
    pub remote: Arc<dyn ProductsRemoteDataSource>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ProductsRepository for ProductsRepositoryImpl {
    async fn get_all_products(&self) -> Result<Vec<Product>, ProductError> {
        self.logger.debug("Fetching products from remote catalog");
        match self.remote.fetch_products().await {
            Ok(products) => {
                self.logger
                    .info(&format!("Fetched {} products", products.len()));
                Ok(products)
            }
            Err(err) => {
                self.logger
                    .warn(&format!("Remote catalog fetch failed: {}", err));
                Err(err.into())
            }
        }
    }

    fn get_favorite_products(&self) -> Observer<Vec<Product>> {
        self.local.observe_favorites()
    }

    async fn add_to_favorites(&self, product: &Product) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Adding product {} to favorites", product.id));
        self.local.upsert_favorite(product).await.map_err(|err| {
            self.logger
                .error(&format!("Could not store favorite {}: {}", product.id, err));
            ProductError::Storage(err)
        })
    }

    async fn remove_from_favorites(&self, product: &Product) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Removing product {} from favorites", product.id));
        self.local.remove_favorite(product).await.map_err(|err| {
            self.logger
                .error(&format!("Could not remove favorite {}: {}", product.id, err));
            ProductError::Storage(err)
        })
    }
}
