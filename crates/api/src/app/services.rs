//! Per-service handler sets shared by the route functions.

use std::sync::Arc;

use avalans_items::{
    CreateItemHandler, DeleteItemHandler, GetAllItemsHandler, GetItemByIdHandler, ItemRepository,
    UpdateItemHandler,
};
use avalans_locations::{
    ActivateLocationHandler, CreateLocationHandler, DeactivateLocationHandler,
    GetAllLocationsHandler, GetLocationByIdHandler, LocationRepository, UpdateLocationHandler,
};

pub struct ItemServices {
    pub create: CreateItemHandler,
    pub update: UpdateItemHandler,
    pub delete: DeleteItemHandler,
    pub get_by_id: GetItemByIdHandler,
    pub get_all: GetAllItemsHandler,
}

impl ItemServices {
    pub fn new(repository: Arc<dyn ItemRepository>) -> Self {
        Self {
            create: CreateItemHandler::new(repository.clone()),
            update: UpdateItemHandler::new(repository.clone()),
            delete: DeleteItemHandler::new(repository.clone()),
            get_by_id: GetItemByIdHandler::new(repository.clone()),
            get_all: GetAllItemsHandler::new(repository),
        }
    }
}

pub struct LocationServices {
    pub create: CreateLocationHandler,
    pub update: UpdateLocationHandler,
    pub activate: ActivateLocationHandler,
    pub deactivate: DeactivateLocationHandler,
    pub get_by_id: GetLocationByIdHandler,
    pub get_all: GetAllLocationsHandler,
}

impl LocationServices {
    pub fn new(repository: Arc<dyn LocationRepository>) -> Self {
        Self {
            create: CreateLocationHandler::new(repository.clone()),
            update: UpdateLocationHandler::new(repository.clone()),
            activate: ActivateLocationHandler::new(repository.clone()),
            deactivate: DeactivateLocationHandler::new(repository.clone()),
            get_by_id: GetLocationByIdHandler::new(repository.clone()),
            get_all: GetAllLocationsHandler::new(repository),
        }
    }
}
