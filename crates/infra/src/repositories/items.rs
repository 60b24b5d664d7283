use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use avalans_core::{Entity, RepositoryResult};
use avalans_items::{Item, ItemId, ItemRepository, ItemSnapshot};

use super::{from_properties, parse_row_key, to_row};
use crate::table_store::{TableRow, TableStore};

pub const ITEMS_TABLE: &str = "Items";
pub const ITEM_PARTITION: &str = "ITEM";

/// Stored shape of an item. The id is the row key, not a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemRow {
    pub name: String,
    pub description: Option<String>,
    pub sku: Option<String>,
    pub barcode: Option<String>,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub dimension_unit: Option<String>,
    pub weight: Option<f64>,
    pub weight_unit: Option<String>,
    pub volume: Option<f64>,
    pub volume_unit: Option<String>,
    pub is_fragile: bool,
    pub is_perishable: bool,
    pub shelf_life: Option<i32>,
    pub value: Option<f64>,
    pub currency: Option<String>,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&ItemSnapshot> for ItemRow {
    fn from(s: &ItemSnapshot) -> Self {
        Self {
            name: s.name.clone(),
            description: s.description.clone(),
            sku: s.sku.clone(),
            barcode: s.barcode.clone(),
            length: s.length,
            width: s.width,
            height: s.height,
            dimension_unit: s.dimension_unit.clone(),
            weight: s.weight,
            weight_unit: s.weight_unit.clone(),
            volume: s.volume,
            volume_unit: s.volume_unit.clone(),
            is_fragile: s.is_fragile,
            is_perishable: s.is_perishable,
            shelf_life: s.shelf_life,
            value: s.value,
            currency: s.currency.clone(),
            category: s.category.clone(),
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

impl ItemRow {
    fn into_item(self, id: ItemId) -> Item {
        Item::rehydrate(ItemSnapshot {
            id,
            name: self.name,
            description: self.description,
            sku: self.sku,
            barcode: self.barcode,
            length: self.length,
            width: self.width,
            height: self.height,
            dimension_unit: self.dimension_unit,
            weight: self.weight,
            weight_unit: self.weight_unit,
            volume: self.volume,
            volume_unit: self.volume_unit,
            is_fragile: self.is_fragile,
            is_perishable: self.is_perishable,
            shelf_life: self.shelf_life,
            value: self.value,
            currency: self.currency,
            category: self.category,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn encode(item: &Item) -> RepositoryResult<TableRow> {
    to_row(ITEM_PARTITION, item.id().to_string(), &ItemRow::from(item.snapshot()))
}

fn decode(row: TableRow) -> RepositoryResult<Item> {
    let id = parse_row_key(&row.row_key)?;
    let stored: ItemRow = from_properties(&row.row_key, row.properties)?;
    Ok(stored.into_item(id))
}

/// [`ItemRepository`] over a [`TableStore`].
pub struct TableItemRepository {
    store: Arc<dyn TableStore>,
}

impl TableItemRepository {
    /// Creates the `Items` table when it is missing.
    pub async fn new(store: Arc<dyn TableStore>) -> RepositoryResult<Self> {
        store.create_table_if_not_exists(ITEMS_TABLE).await?;
        Ok(Self { store })
    }
}

#[async_trait]
impl ItemRepository for TableItemRepository {
    async fn get_by_id(&self, id: ItemId) -> RepositoryResult<Option<Item>> {
        let row = self
            .store
            .get(ITEMS_TABLE, ITEM_PARTITION, &id.to_string())
            .await?;
        row.map(decode).transpose()
    }

    async fn get_all(&self) -> RepositoryResult<Vec<Item>> {
        let rows = self.store.query(ITEMS_TABLE, ITEM_PARTITION).await?;
        rows.into_iter().map(decode).collect()
    }

    async fn add(&self, item: &Item) -> RepositoryResult<ItemId> {
        self.store.insert(ITEMS_TABLE, encode(item)?).await?;
        Ok(item.id())
    }

    async fn update(&self, item: &Item) -> RepositoryResult<()> {
        self.store.replace(ITEMS_TABLE, encode(item)?).await?;
        Ok(())
    }

    async fn delete(&self, id: ItemId) -> RepositoryResult<bool> {
        let removed = self
            .store
            .delete(ITEMS_TABLE, ITEM_PARTITION, &id.to_string())
            .await?;
        tracing::debug!(item_id = %id, removed, "Deleted item row");
        Ok(removed)
    }
}
