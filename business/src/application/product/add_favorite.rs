use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductsRepository;
use crate::domain::product::use_cases::add_favorite::{AddFavoriteParams, AddFavoriteUseCase};

pub struct AddFavoriteUseCaseImpl {
    pub repository: Arc<dyn ProductsRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddFavoriteUseCase for AddFavoriteUseCaseImpl {
    async fn execute(&self, params: AddFavoriteParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Marking product as favorite: {}", params.product.id));
        self.repository.add_to_favorites(&params.product).await?;
        self.logger
            .info(&format!("Product marked as favorite: {}", params.product.id));
        Ok(())
    }
}
