//! Items domain module.
//!
//! An [`Item`] is anything that can be shipped between locations. The aggregate
//! guards its own invariants; the handlers in [`features`] orchestrate one use
//! case each against an [`ItemRepository`].

pub mod dto;
pub mod features;
pub mod item;
pub mod repository;

#[cfg(test)]
mod log_capture;

pub use dto::ItemDto;
pub use features::{
    CreateItem, CreateItemHandler, CreateItemResult, DeleteItem, DeleteItemHandler, GetAllItems,
    GetAllItemsHandler, GetItemById, GetItemByIdHandler, UpdateItem, UpdateItemHandler,
};
pub use item::{Item, ItemId, ItemSnapshot};
pub use repository::ItemRepository;
