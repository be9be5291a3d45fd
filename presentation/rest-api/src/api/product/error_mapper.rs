use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::errors::StorageError;
use business::domain::product::errors::{NetworkError, ProductError};

use crate::api::error::{ErrorResponse, IntoErrorResponse};

fn error_response(status: StatusCode, name: &str, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            name: name.to_string(),
            message: message.to_string(),
        }),
    )
}

impl IntoErrorResponse for NetworkError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = match self {
            NetworkError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::BAD_GATEWAY,
        };
        error_response(status, "NetworkError", self.code())
    }
}

impl IntoErrorResponse for StorageError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = match self {
            StorageError::Connection => "storage.connection",
            StorageError::Migration => "storage.migration",
            StorageError::Query => "storage.query",
        };
        error_response(StatusCode::INTERNAL_SERVER_ERROR, "StorageError", message)
    }
}

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            ProductError::Network(err) => err.into_error_response(),
            ProductError::Storage(err) => err.into_error_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_timeout_to_gateway_timeout() {
        let (status, json) = NetworkError::Timeout.into_error_response();

        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(json.0.name, "NetworkError");
        assert_eq!(json.0.message, "network.timeout");
    }

    #[test]
    fn should_map_upstream_status_to_bad_gateway() {
        let (status, json) = ProductError::Network(NetworkError::Status(404)).into_error_response();

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json.0.message, "network.status");
    }

    #[test]
    fn should_map_storage_failure_to_internal_error() {
        let (status, json) = ProductError::Storage(StorageError::Query).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.name, "StorageError");
        assert_eq!(json.0.message, "storage.query");
    }
}
