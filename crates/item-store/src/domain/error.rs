//! Store Errors

use thiserror::Error;

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures of the persistent slot or the repository on top of it
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backing storage could not be read or written
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// The slot holds something that is not a list of items
    #[error("corrupt slot contents: {0}")]
    Corrupt(String),
    /// No id above the current maximum is representable
    #[error("item ids exhausted")]
    IdsExhausted,
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Corrupt(err.to_string())
    }
}
