//! `avalans-core`: shared building blocks for the Items and Locations services.
//!
//! This crate contains **pure domain** primitives plus the command/query seams the
//! feature handlers implement. Nothing here performs IO.

pub mod cqrs;
pub mod entity;
pub mod error;
pub mod guard;
pub mod id;
pub mod repository;
pub mod value_object;

pub use cqrs::{Command, CommandHandler, HandlerError, HandlerResult, Query, QueryHandler};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::AggregateId;
pub use repository::{RepositoryError, RepositoryResult};
pub use value_object::ValueObject;
