use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductsRepository;
use crate::domain::product::request_state::RequestState;
use crate::domain::product::use_cases::fetch_products::FetchProductsUseCase;
use crate::domain::shared::observable::{Observer, StateSlot};

/// Drives the request-state slot from catalog fetches.
///
/// Overlapping fetches run concurrently, but only the most recently started
/// one may publish its outcome; earlier ones finish silently.
pub struct FetchProductsUseCaseImpl {
    repository: Arc<dyn ProductsRepository>,
    logger: Arc<dyn Logger>,
    state: StateSlot<RequestState>,
    // Every write to `state` happens while holding this lock.
    latest_request: Mutex<u64>,
}

impl FetchProductsUseCaseImpl {
    pub fn new(repository: Arc<dyn ProductsRepository>, logger: Arc<dyn Logger>) -> Self {
        Self {
            repository,
            logger,
            state: StateSlot::new(RequestState::Loading),
            latest_request: Mutex::new(0),
        }
    }

    /// Registers a new request and resets the slot to `Loading`.
    ///
    /// Returns the request number and the state it replaced.
    async fn begin(&self) -> (u64, RequestState) {
        let mut latest = self.latest_request.lock().await;
        *latest += 1;
        (*latest, self.state.replace(RequestState::Loading))
    }

    /// Publishes `state` unless a newer request has started since `request`.
    async fn finish(&self, request: u64, state: RequestState) {
        let latest = self.latest_request.lock().await;
        if *latest == request {
            self.state.set(state);
        } else {
            self.logger.debug(&format!(
                "Discarding outcome of superseded fetch #{}",
                request
            ));
        }
    }
}

#[async_trait]
impl FetchProductsUseCase for FetchProductsUseCaseImpl {
    fn state(&self) -> Observer<RequestState> {
        self.state.subscribe()
    }

    async fn execute(&self) -> RequestState {
        let (request, previous) = self.begin().await;

        let outcome = match self.repository.get_all_products().await {
            Ok(products) => RequestState::Success(products),
            Err(ProductError::Network(err)) => RequestState::Failure(err),
            Err(ProductError::Storage(err)) => {
                // get_all_products never touches the local store
                self.logger
                    .error(&format!("Unexpected storage error during fetch: {}", err));
                previous
            }
        };

        self.finish(request, outcome.clone()).await;
        outcome
    }
}
