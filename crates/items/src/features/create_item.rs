use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use avalans_core::{Command, CommandHandler, HandlerResult};

use crate::features::missing_shelf_life;
use crate::item::{DEFAULT_CURRENCY, DEFAULT_DIMENSION_UNIT, DEFAULT_WEIGHT_UNIT, Item, ItemId};
use crate::repository::ItemRepository;

/// Command: CreateItem.
///
/// Dimensions are applied only when all three are given. Perishable items must
/// name a shelf life.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateItem {
    pub name: String,
    pub description: Option<String>,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub is_perishable: bool,
    pub shelf_life_days: Option<i32>,
    pub value: Option<f64>,
}

impl Command for CreateItem {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CreateItemResult {
    pub item_id: ItemId,
}

pub struct CreateItemHandler {
    repository: Arc<dyn ItemRepository>,
}

impl CreateItemHandler {
    pub fn new(repository: Arc<dyn ItemRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CommandHandler<CreateItem> for CreateItemHandler {
    type Output = CreateItemResult;

    async fn handle(&self, cmd: CreateItem) -> HandlerResult<CreateItemResult> {
        let mut item = Item::create(cmd.name, cmd.description, None)?;

        if let (Some(l), Some(w), Some(h)) = (cmd.length, cmd.width, cmd.height) {
            item.set_dimensions(Some(l), Some(w), Some(h), DEFAULT_DIMENSION_UNIT)?;
        }

        if let Some(weight) = cmd.weight {
            item.set_weight(weight, DEFAULT_WEIGHT_UNIT)?;
        }

        if cmd.is_perishable {
            let days = cmd.shelf_life_days.ok_or_else(missing_shelf_life)?;
            item.set_perishability(true, Some(days))?;
        }

        if let Some(value) = cmd.value {
            item.set_value(value, DEFAULT_CURRENCY)?;
        }

        let item_id = self.repository.add(&item).await?;
        tracing::info!(item_id = %item_id, "Created item");

        Ok(CreateItemResult { item_id })
    }
}
