//! Locations domain module.
//!
//! A [`Location`] is a client site items travel to and from. Locations are never
//! physically deleted: transaction history refers to them, so "removal" is
//! [`Location::deactivate`].

pub mod address;
pub mod dto;
pub mod features;
pub mod location;
pub mod repository;

#[cfg(test)]
mod log_capture;

pub use address::Address;
pub use dto::{AddressDto, LocationDto};
pub use features::{
    ActivateLocation, ActivateLocationHandler, CreateLocation, CreateLocationHandler,
    CreateLocationResult, DeactivateLocation, DeactivateLocationHandler, GetAllLocations,
    GetAllLocationsHandler, GetLocationById, GetLocationByIdHandler, UpdateLocation,
    UpdateLocationHandler,
};
pub use location::{Location, LocationId, LocationSnapshot};
pub use repository::LocationRepository;
