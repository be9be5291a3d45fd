use async_trait::async_trait;

use crate::domain::shared::observable::Observer;

use super::errors::ProductError;
use super::model::Product;

/// Single entry point to product data for the presentation layer.
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    async fn get_all_products(&self) -> Result<Vec<Product>, ProductError>;
    fn get_favorite_products(&self) -> Observer<Vec<Product>>;
    async fn add_to_favorites(&self, product: &Product) -> Result<(), ProductError>;
    async fn remove_from_favorites(&self, product: &Product) -> Result<(), ProductError>;
}
