use std::sync::Arc;

use async_trait::async_trait;

use avalans_core::{Command, CommandHandler, HandlerResult};

use crate::features::{item_not_found, missing_shelf_life};
use crate::item::{DEFAULT_CURRENCY, DEFAULT_DIMENSION_UNIT, DEFAULT_WEIGHT_UNIT, ItemId};
use crate::repository::ItemRepository;

/// Command: UpdateItem.
///
/// Name and description are always overwritten (SKU and barcode are cleared).
/// Dimensions, weight and value follow the same "only if given" rules as
/// creation, while perishability is always set: `is_perishable = false` clears
/// any stored shelf life.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateItem {
    pub id: ItemId,
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

impl Command for UpdateItem {}

pub struct UpdateItemHandler {
    repository: Arc<dyn ItemRepository>,
}

impl UpdateItemHandler {
    pub fn new(repository: Arc<dyn ItemRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CommandHandler<UpdateItem> for UpdateItemHandler {
    type Output = ();

    async fn handle(&self, cmd: UpdateItem) -> HandlerResult<()> {
        let Some(mut item) = self.repository.get_by_id(cmd.id).await? else {
            tracing::warn!(item_id = %cmd.id, "Update rejected: item not found");
            return Err(item_not_found(cmd.id).into());
        };

        item.update_basic_info(cmd.name, cmd.description, None, None)?;

        if let (Some(l), Some(w), Some(h)) = (cmd.length, cmd.width, cmd.height) {
            item.set_dimensions(Some(l), Some(w), Some(h), DEFAULT_DIMENSION_UNIT)?;
        }

        if let Some(weight) = cmd.weight {
            item.set_weight(weight, DEFAULT_WEIGHT_UNIT)?;
        }

        if cmd.is_perishable {
            let days = cmd.shelf_life_days.ok_or_else(missing_shelf_life)?;
            item.set_perishability(true, Some(days))?;
        } else {
            item.set_perishability(false, None)?;
        }

        if let Some(value) = cmd.value {
            item.set_value(value, DEFAULT_CURRENCY)?;
        }

        self.repository.update(&item).await?;
        tracing::info!(item_id = %cmd.id, "Updated item");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;
    use crate::repository::MockItemRepository;
    use avalans_core::{DomainError, Entity, HandlerError};
    use mockall::predicate::eq;
    use std::sync::Mutex;

    fn stored_item() -> Item {
        let mut item = Item::create("Widget", Some("old".into()), Some("SKU-1".into())).unwrap();
        item.set_perishability(true, Some(30)).unwrap();
        item
    }

    fn command(id: ItemId) -> UpdateItem {
        UpdateItem {
            id,
            name: "Widget v2".into(),
            description: Some("new".into()),
            length: None,
            width: None,
            height: None,
            weight: None,
            is_perishable: false,
            shelf_life_days: None,
            value: None,
        }
    }

    fn repo_with(item: Item, saved: Arc<Mutex<Option<Item>>>) -> MockItemRepository {
        let id = item.id();
        let mut repo = MockItemRepository::new();
        repo.expect_get_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(item.clone())));
        repo.expect_update().times(1).returning(move |item| {
            *saved.lock().unwrap() = Some(item.clone());
            Ok(())
        });
        repo
    }

    #[tokio::test]
    async fn updates_basic_info_and_clears_perishability() {
        let item = stored_item();
        let id = item.id();
        let saved = Arc::new(Mutex::new(None));
        let handler = UpdateItemHandler::new(Arc::new(repo_with(item, saved.clone())));

        handler.handle(command(id)).await.unwrap();

        let updated = saved.lock().unwrap().clone().unwrap();
        assert_eq!(updated.name(), "Widget v2");
        assert_eq!(updated.description(), Some("new"));
        assert_eq!(updated.sku(), None);
        assert!(!updated.is_perishable());
        assert_eq!(updated.shelf_life(), None);
        assert!(updated.updated_at().is_some());
    }

    #[tokio::test]
    async fn applies_full_dimensions_weight_and_value() {
        let item = stored_item();
        let id = item.id();
        let saved = Arc::new(Mutex::new(None));
        let handler = UpdateItemHandler::new(Arc::new(repo_with(item, saved.clone())));

        handler
            .handle(UpdateItem {
                length: Some(1.0),
                width: Some(2.0),
                height: Some(3.0),
                weight: Some(4.0),
                is_perishable: true,
                shelf_life_days: Some(14),
                value: Some(50.0),
                ..command(id)
            })
            .await
            .unwrap();

        let updated = saved.lock().unwrap().clone().unwrap();
        assert_eq!(updated.volume(), Some(6.0));
        assert_eq!(updated.weight(), Some(4.0));
        assert_eq!(updated.shelf_life(), Some(14));
        assert_eq!(updated.value(), Some(50.0));
        assert_eq!(updated.currency(), Some("USD"));
    }

    #[tokio::test]
    async fn missing_item_is_not_found_and_never_persisted() {
        let id = ItemId::new();
        let mut repo = MockItemRepository::new();
        repo.expect_get_by_id().with(eq(id)).returning(|_| Ok(None));
        repo.expect_update().never();
        let handler = UpdateItemHandler::new(Arc::new(repo));

        let err = handler.handle(command(id)).await.unwrap_err();
        match err {
            HandlerError::Domain(DomainError::NotFound(msg)) => assert!(msg.contains("not found")),
            other => panic!("Expected not found, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn perishable_without_shelf_life_is_rejected() {
        let item = stored_item();
        let id = item.id();
        let mut repo = MockItemRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(item.clone())));
        repo.expect_update().never();
        let handler = UpdateItemHandler::new(Arc::new(repo));

        let err = handler
            .handle(UpdateItem {
                is_perishable: true,
                ..command(id)
            })
            .await
            .unwrap_err();
        assert_eq!(err, HandlerError::Domain(missing_shelf_life()));
    }
}
