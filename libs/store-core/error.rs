use thiserror::Error;

use crate::{ProjectId, StoreState};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage backend unavailable: {0}")]
    StorageUnavailable(String),
    #[error("persisted schema version {found} is newer than supported version {supported}")]
    IncompatibleSchema { found: u32, supported: u32 },
    #[error("migration to schema version {version} failed: {reason}")]
    MigrationFailed { version: u32, reason: String },
    #[error("project '{0}' not found")]
    NotFound(ProjectId),
    #[error("invalid project input: {0}")]
    ValidationError(String),
    #[error("store is not ready (current state: {0})")]
    StoreNotReady(StoreState),
    #[error("couldn't parse store document: {0}")]
    CorruptedDocument(String),
    #[error("operation failed: {0}")]
    OperationFailed(String),
}

impl StoreError {
    pub fn storage_unavailable(err: impl ToString) -> Self {
        Self::StorageUnavailable(err.to_string())
    }

    pub fn corrupted_document(err: impl ToString) -> Self {
        Self::CorruptedDocument(err.to_string())
    }

    pub fn operation_failed(err: impl ToString) -> Self {
        Self::OperationFailed(err.to_string())
    }

    pub fn migration_failed(version: u32, err: impl ToString) -> Self {
        Self::MigrationFailed {
            version,
            reason: err.to_string(),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
