use sqlx::FromRow;

use business::domain::product::model::Product;

#[derive(Debug, FromRow)]
pub struct FavoriteProductEntity {
    pub id: i64,
    pub price: f64,
    pub thumbnail: Option<String>,
    pub title: String,
    pub brand: String,
    pub description: String,
}

impl FavoriteProductEntity {
    pub fn into_domain(self) -> Product {
        Product {
            id: self.id,
            price: self.price,
            thumbnail: self.thumbnail,
            title: self.title,
            brand: self.brand,
            description: self.description,
        }
    }
}
