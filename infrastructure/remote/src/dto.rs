use serde::Deserialize;

use business::domain::product::model::Product;

/// Body of `GET /products`. Pagination fields such as `total` and `skip`
/// are ignored.
#[derive(Debug, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<ProductDto>,
}

#[derive(Debug, Deserialize)]
pub struct ProductDto {
    pub id: i64,
    pub price: f64,
    #[serde(default)]
    pub thumbnail: Option<String>,
    pub title: String,
    // Some catalog entries (groceries) ship without a brand
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub description: String,
}

impl From<ProductDto> for Product {
    fn from(dto: ProductDto) -> Self {
        Product {
            id: dto.id,
            price: dto.price,
            thumbnail: dto.thumbnail,
            title: dto.title,
            brand: dto.brand,
            description: dto.description,
        }
    }
}
