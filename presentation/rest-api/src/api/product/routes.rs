use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::product::errors::NetworkError;
use business::domain::product::request_state::RequestState;
use business::domain::product::use_cases::fetch_products::FetchProductsUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::RequestStateResponse;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    fetch_products_use_case: Arc<dyn FetchProductsUseCase>,
}

impl ProductApi {
    pub fn new(fetch_products_use_case: Arc<dyn FetchProductsUseCase>) -> Self {
        Self {
            fetch_products_use_case,
        }
    }
}

/// Product catalog API
///
/// Read-through access to the remote product catalog.
#[OpenApi]
impl ProductApi {
    /// Current catalog state
    ///
    /// Returns the state of the most recent catalog fetch: `loading`,
    /// `success` with the products, or `failure` with an error code.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_products(&self) -> Json<RequestStateResponse> {
        Json(self.fetch_products_use_case.state().current().into())
    }

    /// Refresh the catalog
    ///
    /// Fetches the catalog from the remote API once. There is no retry;
    /// call again to retry after a failure.
    #[oai(path = "/products/refresh", method = "post", tag = "ApiTags::Products")]
    async fn refresh_products(&self) -> RefreshProductsResponse {
        match self.fetch_products_use_case.execute().await {
            RequestState::Failure(err @ NetworkError::Timeout) => {
                let (_status, json) = err.into_error_response();
                RefreshProductsResponse::GatewayTimeout(json)
            }
            RequestState::Failure(err) => {
                let (_status, json) = err.into_error_response();
                RefreshProductsResponse::BadGateway(json)
            }
            state => RefreshProductsResponse::Ok(Json(state.into())),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RefreshProductsResponse {
    #[oai(status = 200)]
    Ok(Json<RequestStateResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 504)]
    GatewayTimeout(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{fixed_catalog_use_case, product, read_json};
    use poem::Route;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;

    fn client(use_case: Arc<dyn FetchProductsUseCase>) -> TestClient<Route> {
        let service = OpenApiService::new(ProductApi::new(use_case), "test", "0.0.0");
        TestClient::new(Route::new().nest("/", service))
    }

    #[tokio::test]
    async fn should_report_loading_before_any_fetch() {
        let client = client(fixed_catalog_use_case(Ok(vec![product(1, "A")])).await);

        let response = client.get("/products").send().await;

        response.assert_status_is_ok();
        let body = read_json(response).await;
        assert_eq!(body["status"], "loading");
    }

    #[tokio::test]
    async fn should_return_products_when_refresh_succeeds() {
        let use_case = fixed_catalog_use_case(Ok(vec![product(1, "A")])).await;
        let client = client(use_case);

        let refreshed = client.post("/products/refresh").send().await;
        refreshed.assert_status_is_ok();
        let current = read_json(client.get("/products").send().await).await;

        assert_eq!(current["status"], "success");
        assert_eq!(current["products"][0]["id"], 1);
        assert_eq!(current["products"][0]["title"], "A");
    }

    #[tokio::test]
    async fn should_answer_bad_gateway_when_refresh_fails() {
        let client = client(fixed_catalog_use_case(Err(NetworkError::Status(500))).await);

        let refreshed = client.post("/products/refresh").send().await;
        refreshed.assert_status(StatusCode::BAD_GATEWAY);
        let current = read_json(client.get("/products").send().await).await;

        assert_eq!(current["status"], "failure");
        assert_eq!(current["error"], "network.status");
    }

    #[tokio::test]
    async fn should_answer_gateway_timeout_when_refresh_times_out() {
        let client = client(fixed_catalog_use_case(Err(NetworkError::Timeout)).await);

        let refreshed = client.post("/products/refresh").send().await;
        refreshed.assert_status(StatusCode::GATEWAY_TIMEOUT);
        let body = read_json(refreshed).await;

        assert_eq!(body["name"], "NetworkError");
        assert_eq!(body["message"], "network.timeout");
    }
}
