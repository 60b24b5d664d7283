//! Table-backed implementations of the domain repository ports.
//!
//! Rows are serde structs flattened into property bags; entities come back
//! through their `rehydrate` constructors.

mod items;
mod locations;

pub use items::{ITEMS_TABLE, ITEM_PARTITION, ItemRow, TableItemRepository};
pub use locations::{LOCATIONS_TABLE, LOCATION_PARTITION, LocationRow, TableLocationRepository};

use std::str::FromStr;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use avalans_core::{RepositoryError, RepositoryResult};

use crate::table_store::{Properties, TableRow};

fn to_row<T: Serialize>(partition_key: &str, row_key: String, row: &T) -> RepositoryResult<TableRow> {
    match serde_json::to_value(row) {
        Ok(Value::Object(properties)) => Ok(TableRow::new(partition_key, row_key, properties)),
        Ok(other) => Err(RepositoryError::backend(format!(
            "row {row_key} did not serialize to a property bag: {other}"
        ))),
        Err(e) => Err(RepositoryError::backend(format!("encode row {row_key}: {e}"))),
    }
}

fn from_properties<T: DeserializeOwned>(row_key: &str, properties: Properties) -> RepositoryResult<T> {
    serde_json::from_value(Value::Object(properties))
        .map_err(|e| RepositoryError::backend(format!("decode row {row_key}: {e}")))
}

fn parse_row_key<I>(row_key: &str) -> RepositoryResult<I>
where
    I: FromStr,
    I::Err: std::fmt::Display,
{
    row_key
        .parse()
        .map_err(|e| RepositoryError::backend(format!("bad row key {row_key}: {e}")))
}
