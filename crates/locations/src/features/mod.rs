//! One handler per use case.
//!
//! Commands: [`CreateLocation`], [`UpdateLocation`], [`ActivateLocation`],
//! [`DeactivateLocation`]. Queries: [`GetLocationById`], [`GetAllLocations`].

pub mod change_status;
pub mod create_location;
pub mod get_all_locations;
pub mod get_location_by_id;
pub mod update_location;

pub use change_status::{
    ActivateLocation, ActivateLocationHandler, DeactivateLocation, DeactivateLocationHandler,
};
pub use create_location::{CreateLocation, CreateLocationHandler, CreateLocationResult};
pub use get_all_locations::{GetAllLocations, GetAllLocationsHandler};
pub use get_location_by_id::{GetLocationById, GetLocationByIdHandler};
pub use update_location::{UpdateLocation, UpdateLocationHandler};

use avalans_core::DomainError;

use crate::location::LocationId;

pub(crate) fn location_not_found(id: LocationId) -> DomainError {
    DomainError::not_found(format!("Location with ID {id} not found"))
}

pub(crate) fn duplicate_number(number: &str) -> DomainError {
    DomainError::conflict(format!("A location with number '{number}' already exists"))
}
