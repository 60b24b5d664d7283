use std::sync::Arc;

use async_trait::async_trait;

use avalans_core::{HandlerResult, Query, QueryHandler};

use crate::dto::ItemDto;
use crate::item::ItemId;
use crate::repository::ItemRepository;

/// Query: GetItemById. Resolves to `None` when the item does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetItemById {
    pub id: ItemId,
}

impl Query for GetItemById {}

pub struct GetItemByIdHandler {
    repository: Arc<dyn ItemRepository>,
}

impl GetItemByIdHandler {
    pub fn new(repository: Arc<dyn ItemRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl QueryHandler<GetItemById> for GetItemByIdHandler {
    type Output = Option<ItemDto>;

    async fn handle(&self, query: GetItemById) -> HandlerResult<Option<ItemDto>> {
        let item = self.repository.get_by_id(query.id).await?;
        Ok(item.as_ref().map(ItemDto::from))
    }
}
