use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductsRepository;
use crate::domain::product::use_cases::remove_favorite::{
    RemoveFavoriteParams, RemoveFavoriteUseCase,
};

pub struct RemoveFavoriteUseCaseImpl {
    pub repository: Arc<dyn ProductsRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveFavoriteUseCase for RemoveFavoriteUseCaseImpl {
    async fn execute(&self, params: RemoveFavoriteParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Removing favorite: {}", params.product.id));
        self.repository
            .remove_from_favorites(&params.product)
            .await?;
        self.logger
            .info(&format!("Favorite removed: {}", params.product.id));
        Ok(())
    }
}
