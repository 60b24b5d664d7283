use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use avalans_core::{Entity, RepositoryError, RepositoryResult};
use avalans_locations::{Address, Location, LocationId, LocationRepository, LocationSnapshot};

use super::{from_properties, parse_row_key, to_row};
use crate::table_store::{TableRow, TableStore};

pub const LOCATIONS_TABLE: &str = "Locations";
pub const LOCATION_PARTITION: &str = "LOCATION";

/// Stored shape of a location, with the address flattened into `Address*` columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LocationRow {
    pub name: String,
    pub number: String,
    pub address_street: String,
    pub address_city: String,
    pub address_postal_code: String,
    pub address_country: String,
    pub address_state: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&LocationSnapshot> for LocationRow {
    fn from(s: &LocationSnapshot) -> Self {
        Self {
            name: s.name.clone(),
            number: s.number.clone(),
            address_street: s.address.street().to_string(),
            address_city: s.address.city().to_string(),
            address_postal_code: s.address.postal_code().to_string(),
            address_country: s.address.country().to_string(),
            address_state: s.address.state().map(str::to_string),
            contact_name: s.contact_name.clone(),
            contact_email: s.contact_email.clone(),
            contact_phone: s.contact_phone.clone(),
            is_active: s.is_active,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

impl LocationRow {
    /// The address goes back through its validating factory; the location
    /// itself is rehydrated as stored.
    fn into_location(self, id: LocationId) -> RepositoryResult<Location> {
        let address = Address::create(
            self.address_street,
            self.address_city,
            self.address_postal_code,
            self.address_country,
            self.address_state,
        )
        .map_err(|e| RepositoryError::backend(format!("stored address of location {id}: {e}")))?;

        Ok(Location::rehydrate(LocationSnapshot {
            id,
            name: self.name,
            number: self.number,
            address,
            contact_name: self.contact_name,
            contact_email: self.contact_email,
            contact_phone: self.contact_phone,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }))
    }
}

fn encode(location: &Location) -> RepositoryResult<TableRow> {
    to_row(
        LOCATION_PARTITION,
        location.id().to_string(),
        &LocationRow::from(location.snapshot()),
    )
}

fn decode(row: TableRow) -> RepositoryResult<Location> {
    let id = parse_row_key(&row.row_key)?;
    let stored: LocationRow = from_properties(&row.row_key, row.properties)?;
    stored.into_location(id)
}

/// [`LocationRepository`] over a [`TableStore`].
///
/// `number` has no secondary index: number lookups and the active filter scan
/// the `LOCATION` partition.
pub struct TableLocationRepository {
    store: Arc<dyn TableStore>,
}

impl TableLocationRepository {
    /// Creates the `Locations` table when it is missing.
    pub async fn new(store: Arc<dyn TableStore>) -> RepositoryResult<Self> {
        store.create_table_if_not_exists(LOCATIONS_TABLE).await?;
        Ok(Self { store })
    }

    async fn scan(&self) -> RepositoryResult<Vec<Location>> {
        let rows = self.store.query(LOCATIONS_TABLE, LOCATION_PARTITION).await?;
        rows.into_iter().map(decode).collect()
    }
}

#[async_trait]
impl LocationRepository for TableLocationRepository {
    async fn get_by_id(&self, id: LocationId) -> RepositoryResult<Option<Location>> {
        let row = self
            .store
            .get(LOCATIONS_TABLE, LOCATION_PARTITION, &id.to_string())
            .await?;
        row.map(decode).transpose()
    }

    async fn get_by_number(&self, number: &str) -> RepositoryResult<Option<Location>> {
        let found = self
            .scan()
            .await?
            .into_iter()
            .find(|location| location.number() == number);
        Ok(found)
    }

    async fn get_all(&self, include_inactive: bool) -> RepositoryResult<Vec<Location>> {
        let mut locations = self.scan().await?;
        if !include_inactive {
            locations.retain(Location::is_active);
        }
        Ok(locations)
    }

    async fn add(&self, location: &Location) -> RepositoryResult<LocationId> {
        self.store.insert(LOCATIONS_TABLE, encode(location)?).await?;
        Ok(location.id())
    }

    async fn update(&self, location: &Location) -> RepositoryResult<()> {
        self.store.replace(LOCATIONS_TABLE, encode(location)?).await?;
        Ok(())
    }
}
