//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("post not found: {0}")]
    PostNotFound(u64),
}

/// Errors writing the persistence document.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write persistence document: {0}")]
    Write(#[from] std::io::Error),

    #[error("failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A single persisted entry could not be reconstructed.
///
/// These never propagate past the load routine: a malformed entry is
/// skipped with a warning and the remaining entries still load.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("entry is not a JSON object")]
    NotAnObject,

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("field `{0}` has the wrong type")]
    InvalidField(&'static str),
}
