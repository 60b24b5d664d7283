//! Command/query seams.
//!
//! A **command** is an intent to change state and is handled exactly once; a
//! **query** reads without side effects. Each use case gets its own handler type
//! holding nothing but a repository handle, so handlers are stateless and safe to
//! share across concurrent requests.
//!
//! Cancellation is future-drop: dropping the future returned by `handle` abandons
//! the pending storage call. Domain validation itself is synchronous and always
//! runs to completion.

use async_trait::async_trait;
use thiserror::Error;

use crate::error::DomainError;
use crate::repository::RepositoryError;

/// Marker for state-changing requests.
pub trait Command: core::fmt::Debug + Send + Sync + 'static {}

/// Marker for read-only requests.
pub trait Query: core::fmt::Debug + Send + Sync + 'static {}

/// Failure of a command or query handler.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandlerError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl HandlerError {
    pub fn domain(&self) -> Option<&DomainError> {
        match self {
            HandlerError::Domain(e) => Some(e),
            HandlerError::Repository(_) => None,
        }
    }
}

pub type HandlerResult<T> = Result<T, HandlerError>;

/// Handles one command type.
#[async_trait]
pub trait CommandHandler<C: Command>: Send + Sync {
    /// `()` for commands that produce nothing.
    type Output: Send;

    async fn handle(&self, command: C) -> HandlerResult<Self::Output>;
}

/// Handles one query type.
#[async_trait]
pub trait QueryHandler<Q: Query>: Send + Sync {
    type Output: Send;

    async fn handle(&self, query: Q) -> HandlerResult<Self::Output>;
}
