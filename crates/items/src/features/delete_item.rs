use std::sync::Arc;

use async_trait::async_trait;

use avalans_core::{Command, CommandHandler, HandlerResult};

use crate::features::item_not_found;
use crate::item::ItemId;
use crate::repository::ItemRepository;

/// Command: DeleteItem (physical delete; items carry no history requirement).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteItem {
    pub id: ItemId,
}

impl Command for DeleteItem {}

pub struct DeleteItemHandler {
    repository: Arc<dyn ItemRepository>,
}

impl DeleteItemHandler {
    pub fn new(repository: Arc<dyn ItemRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CommandHandler<DeleteItem> for DeleteItemHandler {
    type Output = ();

    async fn handle(&self, cmd: DeleteItem) -> HandlerResult<()> {
        if !self.repository.delete(cmd.id).await? {
            tracing::warn!(item_id = %cmd.id, "Item not found for delete");
            return Err(item_not_found(cmd.id).into());
        }
        tracing::info!(item_id = %cmd.id, "Deleted item");
        Ok(())
    }
}
