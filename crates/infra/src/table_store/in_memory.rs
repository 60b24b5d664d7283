use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use async_trait::async_trait;

use super::{Properties, TableRow, TableStore, TableStoreError};

type RowKey = (String, String);
type Table = BTreeMap<RowKey, Properties>;

/// In-memory table store.
///
/// Intended for tests/dev. Rows are kept sorted by (partition key, row key).
#[derive(Debug, Default)]
pub struct InMemoryTableStore {
    tables: RwLock<HashMap<String, Table>>,
}

impl InMemoryTableStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read<T>(
        &self,
        table: &str,
        f: impl FnOnce(&Table) -> T,
    ) -> Result<T, TableStoreError> {
        let tables = self
            .tables
            .read()
            .map_err(|_| TableStoreError::Unavailable("lock poisoned".to_string()))?;
        let rows = tables
            .get(table)
            .ok_or_else(|| TableStoreError::TableNotFound(table.to_string()))?;
        Ok(f(rows))
    }

    fn write<T>(
        &self,
        table: &str,
        f: impl FnOnce(&mut Table) -> Result<T, TableStoreError>,
    ) -> Result<T, TableStoreError> {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| TableStoreError::Unavailable("lock poisoned".to_string()))?;
        let rows = tables
            .get_mut(table)
            .ok_or_else(|| TableStoreError::TableNotFound(table.to_string()))?;
        f(rows)
    }
}

fn row_exists(table: &str, row: &TableRow) -> TableStoreError {
    TableStoreError::RowExists {
        table: table.to_string(),
        partition_key: row.partition_key.clone(),
        row_key: row.row_key.clone(),
    }
}

fn row_not_found(table: &str, row: &TableRow) -> TableStoreError {
    TableStoreError::RowNotFound {
        table: table.to_string(),
        partition_key: row.partition_key.clone(),
        row_key: row.row_key.clone(),
    }
}

#[async_trait]
impl TableStore for InMemoryTableStore {
    async fn create_table_if_not_exists(&self, table: &str) -> Result<(), TableStoreError> {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| TableStoreError::Unavailable("lock poisoned".to_string()))?;
        tables.entry(table.to_string()).or_default();
        Ok(())
    }

    async fn get(
        &self,
        table: &str,
        partition_key: &str,
        row_key: &str,
    ) -> Result<Option<TableRow>, TableStoreError> {
        let key = (partition_key.to_string(), row_key.to_string());
        self.read(table, |rows| {
            rows.get(&key)
                .map(|props| TableRow::new(partition_key, row_key, props.clone()))
        })
    }

    async fn insert(&self, table: &str, row: TableRow) -> Result<(), TableStoreError> {
        self.write(table, |rows| {
            let key = (row.partition_key.clone(), row.row_key.clone());
            if rows.contains_key(&key) {
                return Err(row_exists(table, &row));
            }
            rows.insert(key, row.properties);
            Ok(())
        })
    }

    async fn replace(&self, table: &str, row: TableRow) -> Result<(), TableStoreError> {
        self.write(table, |rows| {
            let key = (row.partition_key.clone(), row.row_key.clone());
            match rows.get_mut(&key) {
                Some(existing) => {
                    *existing = row.properties;
                    Ok(())
                }
                None => Err(row_not_found(table, &row)),
            }
        })
    }

    async fn delete(
        &self,
        table: &str,
        partition_key: &str,
        row_key: &str,
    ) -> Result<bool, TableStoreError> {
        let key = (partition_key.to_string(), row_key.to_string());
        self.write(table, |rows| Ok(rows.remove(&key).is_some()))
    }

    async fn query(
        &self,
        table: &str,
        partition_key: &str,
    ) -> Result<Vec<TableRow>, TableStoreError> {
        self.read(table, |rows| {
            rows.iter()
                .filter(|((pk, _), _)| pk == partition_key)
                .map(|((pk, rk), props)| TableRow::new(pk.as_str(), rk.as_str(), props.clone()))
                .collect()
        })
    }
}
