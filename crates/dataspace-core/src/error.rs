//! Domain errors

use thiserror::Error;

use crate::repositories::StorageError;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid menu id: {0}")]
    InvalidMenuId(String),

    #[error("Duplicate menu id: {0}")]
    DuplicateMenuId(String),

    #[error("Invalid menu configuration: {0}")]
    InvalidMenuConfig(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("Transient failure: {0}")]
    TransientFailure(String),
}
