use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::product::model::Product;
use business::domain::product::use_cases::add_favorite::{AddFavoriteParams, AddFavoriteUseCase};
use business::domain::product::use_cases::get_favorites::GetFavoritesUseCase;
use business::domain::product::use_cases::remove_favorite::{
    RemoveFavoriteParams, RemoveFavoriteUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{ProductRequest, ProductResponse};
use crate::api::tags::ApiTags;

pub struct FavoriteApi {
    get_favorites_use_case: Arc<dyn GetFavoritesUseCase>,
    add_favorite_use_case: Arc<dyn AddFavoriteUseCase>,
    remove_favorite_use_case: Arc<dyn RemoveFavoriteUseCase>,
}

impl FavoriteApi {
    pub fn new(
        get_favorites_use_case: Arc<dyn GetFavoritesUseCase>,
        add_favorite_use_case: Arc<dyn AddFavoriteUseCase>,
        remove_favorite_use_case: Arc<dyn RemoveFavoriteUseCase>,
    ) -> Self {
        Self {
            get_favorites_use_case,
            add_favorite_use_case,
            remove_favorite_use_case,
        }
    }
}

/// Favorites API
///
/// Locally stored favorite products. Favorites are never synced upstream.
#[OpenApi]
impl FavoriteApi {
    /// List favorites
    ///
    /// Returns the current favorites snapshot. Order is unspecified.
    #[oai(path = "/favorites", method = "get", tag = "ApiTags::Favorites")]
    async fn get_favorites(&self) -> Json<Vec<ProductResponse>> {
        let favorites = self.get_favorites_use_case.execute().current();
        Json(favorites.into_iter().map(ProductResponse::from).collect())
    }

    /// Add a favorite
    ///
    /// Stores the product as a favorite, replacing any stored product with
    /// the same id.
    #[oai(path = "/favorites", method = "post", tag = "ApiTags::Favorites")]
    async fn add_favorite(&self, body: Json<ProductRequest>) -> FavoriteWriteResponse {
        let params = AddFavoriteParams {
            product: body.0.into(),
        };

        match self.add_favorite_use_case.execute(params).await {
            Ok(()) => FavoriteWriteResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                FavoriteWriteResponse::InternalError(json)
            }
        }
    }

    /// Remove a favorite
    ///
    /// Removes the favorite with the given product id. Removing a product
    /// that is not a favorite succeeds without changes.
    #[oai(path = "/favorites/:id", method = "delete", tag = "ApiTags::Favorites")]
    async fn remove_favorite(&self, id: Path<i64>) -> FavoriteWriteResponse {
        let params = RemoveFavoriteParams {
            product: favorite_key(id.0),
        };

        match self.remove_favorite_use_case.execute(params).await {
            Ok(()) => FavoriteWriteResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                FavoriteWriteResponse::InternalError(json)
            }
        }
    }
}

// Favorites are removed by id alone; the remaining fields are never read.
fn favorite_key(id: i64) -> Product {
    Product {
        id,
        price: 0.0,
        thumbnail: None,
        title: String::new(),
        brand: String::new(),
        description: String::new(),
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum FavoriteWriteResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
