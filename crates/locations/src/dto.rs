//! Read-side projection of a [`Location`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use avalans_core::Entity;

use crate::address::Address;
use crate::location::{Location, LocationId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressDto {
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub state: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationDto {
    pub id: LocationId,
    pub name: String,
    pub number: String,
    pub address: AddressDto,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&Address> for AddressDto {
    fn from(address: &Address) -> Self {
        Self {
            street: address.street().to_string(),
            city: address.city().to_string(),
            postal_code: address.postal_code().to_string(),
            country: address.country().to_string(),
            state: address.state().map(str::to_string),
        }
    }
}

impl From<&Location> for LocationDto {
    fn from(location: &Location) -> Self {
        Self {
            id: location.id(),
            name: location.name().to_string(),
            number: location.number().to_string(),
            address: AddressDto::from(location.address()),
            contact_name: location.contact_name().map(str::to_string),
            contact_email: location.contact_email().map(str::to_string),
            contact_phone: location.contact_phone().map(str::to_string),
            is_active: location.is_active(),
            created_at: location.created_at(),
            updated_at: location.updated_at(),
        }
    }
}
