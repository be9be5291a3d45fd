use crate::domain::errors::StorageError;

/// Failure of a remote catalog fetch, normalized away from the transport.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NetworkError {
    #[error("network.timeout")]
    Timeout,
    #[error("network.status")]
    Status(u16),
    #[error("network.malformed_body")]
    MalformedBody,
    #[error("network.transport")]
    Transport,
}

impl NetworkError {
    /// Stable error code, independent of any payload carried by the variant.
    pub fn code(&self) -> &'static str {
        match self {
            NetworkError::Timeout => "network.timeout",
            NetworkError::Status(_) => "network.status",
            NetworkError::MalformedBody => "network.malformed_body",
            NetworkError::Transport => "network.transport",
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProductError {
    #[error("{0}")]
    Network(#[from] NetworkError),
    #[error("{0}")]
    Storage(#[from] StorageError),
}
