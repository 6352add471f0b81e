use thiserror::Error;

/// Errors that can occur reading or writing persisted state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Failed to read {key}: {message}")]
    ReadFailed { key: String, message: String },
    #[error("Failed to write {key}: {message}")]
    WriteFailed { key: String, message: String },
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
