/// Local store errors for the domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("storage.connection")]
    Connection,
    #[error("storage.migration")]
    Migration,
    #[error("storage.query")]
    Query,
}

impl StorageError {
    pub fn connection() -> Self {
        StorageError::Connection
    }
    pub fn migration() -> Self {
        StorageError::Migration
    }
    pub fn query() -> Self {
        StorageError::Query
    }
}
