//! Read-side projection of an [`Item`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use avalans_core::Entity;

use crate::item::{Item, ItemId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDto {
    pub id: ItemId,
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

impl From<&Item> for ItemDto {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id(),
            name: item.name().to_string(),
            description: item.description().map(str::to_string),
            sku: item.sku().map(str::to_string),
            barcode: item.barcode().map(str::to_string),
            length: item.length(),
            width: item.width(),
            height: item.height(),
            dimension_unit: item.dimension_unit().map(str::to_string),
            weight: item.weight(),
            weight_unit: item.weight_unit().map(str::to_string),
            volume: item.volume(),
            volume_unit: item.volume_unit().map(str::to_string),
            is_fragile: item.is_fragile(),
            is_perishable: item.is_perishable(),
            shelf_life: item.shelf_life(),
            value: item.value(),
            currency: item.currency().map(str::to_string),
            category: item.category().map(str::to_string),
            created_at: item.created_at(),
            updated_at: item.updated_at(),
        }
    }
}
