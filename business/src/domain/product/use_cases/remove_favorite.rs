use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct RemoveFavoriteParams {
    pub product: Product,
}

#[async_trait]
pub trait RemoveFavoriteUseCase: Send + Sync {
    async fn execute(&self, params: RemoveFavoriteParams) -> Result<(), ProductError>;
}
