//! Infrastructure layer: table storage and the repository adapters built on it.

pub mod repositories;
pub mod table_store;

pub use repositories::{TableItemRepository, TableLocationRepository};
pub use table_store::{InMemoryTableStore, Properties, TableRow, TableStore, TableStoreError};
