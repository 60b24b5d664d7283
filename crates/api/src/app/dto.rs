use serde::Deserialize;

use avalans_items::{CreateItem, ItemId, UpdateItem};
use avalans_locations::{CreateLocation, LocationId, UpdateLocation};

// -------------------------
// Items
// -------------------------

/// Body of `POST /items` and `PUT /items/{id}`.
#[derive(Debug, Deserialize)]
pub struct ItemRequest {
    pub name: String,
    pub description: Option<String>,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    #[serde(default)]
    pub is_perishable: bool,
    pub shelf_life_days: Option<i32>,
    pub value: Option<f64>,
}

impl ItemRequest {
    pub fn into_create(self) -> CreateItem {
        CreateItem {
            name: self.name,
            description: self.description,
            length: self.length,
            width: self.width,
            height: self.height,
            weight: self.weight,
            is_perishable: self.is_perishable,
            shelf_life_days: self.shelf_life_days,
            value: self.value,
        }
    }

    pub fn into_update(self, id: ItemId) -> UpdateItem {
        UpdateItem {
            id,
            name: self.name,
            description: self.description,
            length: self.length,
            width: self.width,
            height: self.height,
            weight: self.weight,
            is_perishable: self.is_perishable,
            shelf_life_days: self.shelf_life_days,
            value: self.value,
        }
    }
}

// -------------------------
// Locations
// -------------------------

/// Body of `POST /locations` and `PUT /locations/{id}`.
#[derive(Debug, Deserialize)]
pub struct LocationRequest {
    pub name: String,
    pub number: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub state: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

impl LocationRequest {
    pub fn into_create(self) -> CreateLocation {
        CreateLocation {
            name: self.name,
            number: self.number,
            street: self.street,
            city: self.city,
            postal_code: self.postal_code,
            country: self.country,
            state: self.state,
            contact_name: self.contact_name,
            contact_email: self.contact_email,
            contact_phone: self.contact_phone,
        }
    }

    pub fn into_update(self, id: LocationId) -> UpdateLocation {
        UpdateLocation {
            id,
            name: self.name,
            number: self.number,
            street: self.street,
            city: self.city,
            postal_code: self.postal_code,
            country: self.country,
            state: self.state,
            contact_name: self.contact_name,
            contact_email: self.contact_email,
            contact_phone: self.contact_phone,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListLocationsParams {
    #[serde(default)]
    pub include_inactive: bool,
}
