//! Application error types for core storage and domain logic.
use std::time::Duration;
use thiserror::Error;

/// Errors raised by the snippet store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] redb::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    /// A row with this id already exists. Retried by the service.
    #[error("Snippet id '{0}' already exists")]
    DuplicateId(String),

    #[error("Store call timed out after {0:?}")]
    Timeout(Duration),

    #[error("Store task failed: {0}")]
    Task(String),
}

impl From<redb::DatabaseError> for StoreError {
    fn from(value: redb::DatabaseError) -> Self {
        Self::Database(value.into())
    }
}

impl From<redb::TransactionError> for StoreError {
    fn from(value: redb::TransactionError) -> Self {
        Self::Database(value.into())
    }
}

impl From<redb::TableError> for StoreError {
    fn from(value: redb::TableError) -> Self {
        Self::Database(value.into())
    }
}

impl From<redb::StorageError> for StoreError {
    fn from(value: redb::StorageError) -> Self {
        Self::Database(value.into())
    }
}

impl From<redb::CommitError> for StoreError {
    fn from(value: redb::CommitError) -> Self {
        Self::Database(value.into())
    }
}

/// User input defects, recoverable by resubmitting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Snippet content is empty")]
    EmptyContent,

    #[error("Snippet size exceeds maximum of {max} bytes")]
    ContentTooLarge { max: usize },
}

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid snippet: {0}")]
    Validation(#[from] ValidationError),

    #[error("Not found")]
    NotFound,

    #[error("Could not allocate a unique snippet id after {attempts} attempts")]
    ServiceUnavailable { attempts: usize },

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}
