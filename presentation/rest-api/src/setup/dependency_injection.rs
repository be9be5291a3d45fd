use std::sync::Arc;

use logger::TracingLogger;
use persistence::db::Database;
use persistence::product::repository::FavoriteProductsSqlite;
use remote::client::ProductsApiClient;
use remote::products::ProductsRemoteDataSourceHttp;

use business::application::product::add_favorite::AddFavoriteUseCaseImpl;
use business::application::product::fetch_products::FetchProductsUseCaseImpl;
use business::application::product::get_favorites::GetFavoritesUseCaseImpl;
use business::application::product::remove_favorite::RemoveFavoriteUseCaseImpl;
use business::application::product::repository::ProductsRepositoryImpl;
use business::domain::product::use_cases::fetch_products::FetchProductsUseCase;

use crate::config::products_api_config::ProductsApiConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
    pub favorite_api: crate::api::favorite::routes::FavoriteApi,
    pub fetch_products_use_case: Arc<dyn FetchProductsUseCase>,
}

impl DependencyContainer {
    pub async fn new(
        database: Arc<Database>,
        products_api: &ProductsApiConfig,
    ) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let local = Arc::new(FavoriteProductsSqlite::new(database).await?);
        let client = ProductsApiClient::new(&products_api.base_url, products_api.timeout)?;
        let remote = Arc::new(ProductsRemoteDataSourceHttp::new(client));

        let repository = Arc::new(ProductsRepositoryImpl {
            local,
            remote,
            logger: logger.clone(),
        });

        // Product use cases
        let fetch_products_use_case: Arc<dyn FetchProductsUseCase> = Arc::new(
            FetchProductsUseCaseImpl::new(repository.clone(), logger.clone()),
        );

        // Favorite use cases
        let get_favorites_use_case = Arc::new(GetFavoritesUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let add_favorite_use_case = Arc::new(AddFavoriteUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let remove_favorite_use_case = Arc::new(RemoveFavoriteUseCaseImpl { repository, logger });

        let product_api =
            crate::api::product::routes::ProductApi::new(fetch_products_use_case.clone());

        let favorite_api = crate::api::favorite::routes::FavoriteApi::new(
            get_favorites_use_case,
            add_favorite_use_case,
            remove_favorite_use_case,
        );

        Ok(Self {
            health_api,
            product_api,
            favorite_api,
            fetch_products_use_case,
        })
    }
}
