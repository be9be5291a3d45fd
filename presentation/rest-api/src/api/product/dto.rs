use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;
use business::domain::product::request_state::RequestState;

#[derive(Debug, Clone, Object)]
pub struct ProductRequest {
    /// Catalog product identifier
    pub id: i64,
    /// Unit price
    pub price: f64,
    /// Thumbnail image URL
    #[oai(skip_serializing_if_is_none)]
    pub thumbnail: Option<String>,
    /// Product title
    pub title: String,
    /// Brand name (may be empty)
    #[oai(default)]
    pub brand: String,
    /// Product description
    #[oai(default)]
    pub description: String,
}

impl From<ProductRequest> for Product {
    fn from(request: ProductRequest) -> Self {
        Product {
            id: request.id,
            price: request.price,
            thumbnail: request.thumbnail,
            title: request.title,
            brand: request.brand,
            description: request.description,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Catalog product identifier
    pub id: i64,
    /// Unit price
    pub price: f64,
    /// Thumbnail image URL
    #[oai(skip_serializing_if_is_none)]
    pub thumbnail: Option<String>,
    /// Product title
    pub title: String,
    /// Brand name
    pub brand: String,
    /// Product description
    pub description: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            price: product.price,
            thumbnail: product.thumbnail,
            title: product.title,
            brand: product.brand,
            description: product.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Enum)]
pub enum RequestStatusDto {
    #[oai(rename = "loading")]
    Loading,
    #[oai(rename = "success")]
    Success,
    #[oai(rename = "failure")]
    Failure,
}

/// Outcome of the most recent catalog fetch
#[derive(Debug, Clone, Object)]
pub struct RequestStateResponse {
    /// Fetch status
    pub status: RequestStatusDto,
    /// Fetched products, present on success
    #[oai(skip_serializing_if_is_none)]
    pub products: Option<Vec<ProductResponse>>,
    /// Error code, present on failure
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<String>,
}

impl From<RequestState> for RequestStateResponse {
    fn from(state: RequestState) -> Self {
        match state {
            RequestState::Loading => Self {
                status: RequestStatusDto::Loading,
                products: None,
                error: None,
            },
            RequestState::Success(products) => Self {
                status: RequestStatusDto::Success,
                products: Some(products.into_iter().map(ProductResponse::from).collect()),
                error: None,
            },
            RequestState::Failure(err) => Self {
                status: RequestStatusDto::Failure,
                products: None,
                error: Some(err.code().to_string()),
            },
        }
    }
}
