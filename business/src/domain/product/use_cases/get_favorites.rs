use crate::domain::product::model::Product;
use crate::domain::shared::observable::Observer;

pub trait GetFavoritesUseCase: Send + Sync {
    fn execute(&self) -> Observer<Vec<Product>>;
}
