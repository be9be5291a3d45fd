use super::errors::NetworkError;
use super::model::Product;

/// Outcome of the most recent catalog fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Loading,
    Success(Vec<Product>),
    Failure(NetworkError),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn products(&self) -> Option<&[Product]> {
        match self {
            RequestState::Success(products) => Some(products),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&NetworkError> {
        match self {
            RequestState::Failure(error) => Some(error),
            _ => None,
        }
    }
}
