//! Key/value table storage: rows addressed by table, partition key and row key,
//! each carrying a flat property bag.

mod in_memory;

pub use in_memory::InMemoryTableStore;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

use avalans_core::RepositoryError;

pub type Properties = Map<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub partition_key: String,
    pub row_key: String,
    pub properties: Properties,
}

impl TableRow {
    pub fn new(
        partition_key: impl Into<String>,
        row_key: impl Into<String>,
        properties: Properties,
    ) -> Self {
        Self {
            partition_key: partition_key.into(),
            row_key: row_key.into(),
            properties,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableStoreError {
    #[error("table not found: {0}")]
    TableNotFound(String),

    #[error("row already exists: {table}/{partition_key}/{row_key}")]
    RowExists {
        table: String,
        partition_key: String,
        row_key: String,
    },

    #[error("row not found: {table}/{partition_key}/{row_key}")]
    RowNotFound {
        table: String,
        partition_key: String,
        row_key: String,
    },

    #[error("table store unavailable: {0}")]
    Unavailable(String),
}

impl From<TableStoreError> for RepositoryError {
    fn from(err: TableStoreError) -> Self {
        match err {
            TableStoreError::RowExists { .. } => RepositoryError::Conflict(err.to_string()),
            TableStoreError::RowNotFound { .. } => RepositoryError::NotFound(err.to_string()),
            other => RepositoryError::Backend(other.to_string()),
        }
    }
}

/// Table storage abstraction.
///
/// A point read that finds nothing is `Ok(None)`; only writes fail on missing or
/// existing rows.
#[async_trait]
pub trait TableStore: Send + Sync {
    async fn create_table_if_not_exists(&self, table: &str) -> Result<(), TableStoreError>;

    async fn get(
        &self,
        table: &str,
        partition_key: &str,
        row_key: &str,
    ) -> Result<Option<TableRow>, TableStoreError>;

    /// Fails with [`TableStoreError::RowExists`] if the key is taken.
    async fn insert(&self, table: &str, row: TableRow) -> Result<(), TableStoreError>;

    /// Fails with [`TableStoreError::RowNotFound`] if there is nothing to replace.
    async fn replace(&self, table: &str, row: TableRow) -> Result<(), TableStoreError>;

    /// Returns whether a row was removed.
    async fn delete(
        &self,
        table: &str,
        partition_key: &str,
        row_key: &str,
    ) -> Result<bool, TableStoreError>;

    /// All rows of one partition, ordered by row key.
    async fn query(&self, table: &str, partition_key: &str)
    -> Result<Vec<TableRow>, TableStoreError>;
}

#[async_trait]
impl<S> TableStore for Arc<S>
where
    S: TableStore + ?Sized,
{
    async fn create_table_if_not_exists(&self, table: &str) -> Result<(), TableStoreError> {
        (**self).create_table_if_not_exists(table).await
    }

    async fn get(
        &self,
        table: &str,
        partition_key: &str,
        row_key: &str,
    ) -> Result<Option<TableRow>, TableStoreError> {
        (**self).get(table, partition_key, row_key).await
    }

    async fn insert(&self, table: &str, row: TableRow) -> Result<(), TableStoreError> {
        (**self).insert(table, row).await
    }

    async fn replace(&self, table: &str, row: TableRow) -> Result<(), TableStoreError> {
        (**self).replace(table, row).await
    }

    async fn delete(
        &self,
        table: &str,
        partition_key: &str,
        row_key: &str,
    ) -> Result<bool, TableStoreError> {
        (**self).delete(table, partition_key, row_key).await
    }

    async fn query(
        &self,
        table: &str,
        partition_key: &str,
    ) -> Result<Vec<TableRow>, TableStoreError> {
        (**self).query(table, partition_key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_conflicts_map_to_repository_errors() {
        let exists = TableStoreError::RowExists {
            table: "Items".into(),
            partition_key: "ITEM".into(),
            row_key: "1".into(),
        };
        assert!(matches!(
            RepositoryError::from(exists),
            RepositoryError::Conflict(msg) if msg.contains("Items/ITEM/1")
        ));

        let missing = TableStoreError::RowNotFound {
            table: "Items".into(),
            partition_key: "ITEM".into(),
            row_key: "1".into(),
        };
        assert!(matches!(RepositoryError::from(missing), RepositoryError::NotFound(_)));

        assert!(matches!(
            RepositoryError::from(TableStoreError::TableNotFound("Items".into())),
            RepositoryError::Backend(_)
        ));
    }
}
