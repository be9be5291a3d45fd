use async_trait::async_trait;

use crate::domain::product::request_state::RequestState;
use crate::domain::shared::observable::Observer;

#[async_trait]
pub trait FetchProductsUseCase: Send + Sync {
    /// Observer over the request state, which starts out as `Loading`.
    fn state(&self) -> Observer<RequestState>;

    /// Fetches the catalog and returns the outcome of this request.
    async fn execute(&self) -> RequestState;
}
