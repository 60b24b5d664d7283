//! One handler per use case.
//!
//! Commands: [`CreateItem`], [`UpdateItem`], [`DeleteItem`].
//! Queries: [`GetItemById`], [`GetAllItems`].

pub mod create_item;
pub mod delete_item;
pub mod get_all_items;
pub mod get_item_by_id;
pub mod update_item;

pub use create_item::{CreateItem, CreateItemHandler, CreateItemResult};
pub use delete_item::{DeleteItem, DeleteItemHandler};
pub use get_all_items::{GetAllItems, GetAllItemsHandler};
pub use get_item_by_id::{GetItemById, GetItemByIdHandler};
pub use update_item::{UpdateItem, UpdateItemHandler};

use avalans_core::DomainError;

use crate::item::ItemId;

pub(crate) fn item_not_found(id: ItemId) -> DomainError {
    DomainError::not_found(format!("Item with ID {id} not found"))
}

pub(crate) fn missing_shelf_life() -> DomainError {
    DomainError::invariant("Perishable items must have a shelf life specified")
}
