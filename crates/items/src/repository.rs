use async_trait::async_trait;

use avalans_core::RepositoryResult;

use crate::item::{Item, ItemId};

/// Persistence port for the [`Item`] aggregate.
///
/// Works with domain entities, not storage rows. A lookup that finds nothing
/// returns `Ok(None)`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn get_by_id(&self, id: ItemId) -> RepositoryResult<Option<Item>>;

    async fn get_all(&self) -> RepositoryResult<Vec<Item>>;

    /// Persist a new item and return its id.
    async fn add(&self, item: &Item) -> RepositoryResult<ItemId>;

    /// Replace the stored state of an existing item.
    async fn update(&self, item: &Item) -> RepositoryResult<()>;

    /// Returns `false` when there was nothing to delete.
    async fn delete(&self, id: ItemId) -> RepositoryResult<bool>;
}
