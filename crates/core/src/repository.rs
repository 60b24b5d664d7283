//! Error contract shared by all repository ports.
//!
//! A lookup that finds nothing is not an error: ports return `Option` for that.

use thiserror::Error;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The row being added already exists.
    #[error("record already exists: {0}")]
    Conflict(String),

    /// The row being replaced does not exist.
    #[error("record not found: {0}")]
    NotFound(String),

    /// Anything else the backing store reported.
    #[error("storage backend failure: {0}")]
    Backend(String),
}

impl RepositoryError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}
