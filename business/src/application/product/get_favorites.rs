use std::sync::Arc;

use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductsRepository;
use crate::domain::product::use_cases::get_favorites::GetFavoritesUseCase;
use crate::domain::shared::observable::Observer;

pub struct GetFavoritesUseCaseImpl {
    pub repository: Arc<dyn ProductsRepository>,
    pub logger: Arc<dyn Logger>,
}

impl GetFavoritesUseCase for GetFavoritesUseCaseImpl {
    fn execute(&self) -> Observer<Vec<Product>> {
        let favorites = self.repository.get_favorite_products();
        self.logger.debug(&format!(
            "Observing favorites, {} in current snapshot",
            favorites.current().len()
        ));
        favorites
    }
}
