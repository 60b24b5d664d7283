use std::sync::Arc;

use async_trait::async_trait;

use avalans_core::{HandlerResult, Query, QueryHandler};

use crate::dto::ItemDto;
use crate::repository::ItemRepository;

/// Query: GetAllItems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetAllItems;

impl Query for GetAllItems {}

pub struct GetAllItemsHandler {
    repository: Arc<dyn ItemRepository>,
}

impl GetAllItemsHandler {
    pub fn new(repository: Arc<dyn ItemRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl QueryHandler<GetAllItems> for GetAllItemsHandler {
    type Output = Vec<ItemDto>;

    async fn handle(&self, _query: GetAllItems) -> HandlerResult<Vec<ItemDto>> {
        let items = self.repository.get_all().await?;
        Ok(items.iter().map(ItemDto::from).collect())
    }
}
