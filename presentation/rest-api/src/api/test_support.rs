use std::sync::Arc;

use async_trait::async_trait;
use poem::test::TestResponse;

use business::application::product::fetch_products::FetchProductsUseCaseImpl;
use business::application::product::repository::ProductsRepositoryImpl;
use business::domain::product::data_sources::ProductsRemoteDataSource;
use business::domain::product::errors::NetworkError;
use business::domain::product::model::Product;
use business::domain::product::use_cases::fetch_products::FetchProductsUseCase;
use logger::TracingLogger;
use persistence::db::{Database, DatabaseConfig};
use persistence::product::repository::FavoriteProductsSqlite;

pub fn product(id: i64, title: &str) -> Product {
    Product {
        id,
        price: 9.99,
        thumbnail: None,
        title: title.to_string(),
        brand: "Acme".to_string(),
        description: String::new(),
    }
}

/// Remote catalog that always answers with the same outcome.
pub struct FixedCatalog(pub Result<Vec<Product>, NetworkError>);

#[async_trait]
impl ProductsRemoteDataSource for FixedCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, NetworkError> {
        self.0.clone()
    }
}

/// Repository over a fixed remote catalog and an in-memory favorites database.
pub async fn repository(
    catalog: Result<Vec<Product>, NetworkError>,
) -> Arc<ProductsRepositoryImpl> {
    repository_on(Arc::new(Database::new(DatabaseConfig::in_memory())), catalog).await
}

pub async fn repository_on(
    database: Arc<Database>,
    catalog: Result<Vec<Product>, NetworkError>,
) -> Arc<ProductsRepositoryImpl> {
    let local = FavoriteProductsSqlite::new(database).await.unwrap();
    Arc::new(ProductsRepositoryImpl {
        local: Arc::new(local),
        remote: Arc::new(FixedCatalog(catalog)),
        logger: Arc::new(TracingLogger),
    })
}

pub async fn fixed_catalog_use_case(
    catalog: Result<Vec<Product>, NetworkError>,
) -> Arc<dyn FetchProductsUseCase> {
    Arc::new(FetchProductsUseCaseImpl::new(
        repository(catalog).await,
        Arc::new(TracingLogger),
    ))
}

pub async fn read_json(response: TestResponse) -> serde_json::Value {
    let body = response.0.into_body().into_string().await.unwrap();
    serde_json::from_str(&body).unwrap()
}
