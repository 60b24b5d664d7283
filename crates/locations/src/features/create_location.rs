use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use avalans_core::{Command, CommandHandler, HandlerResult};

use crate::address::Address;
use crate::features::duplicate_number;
use crate::location::{Location, LocationId};
use crate::repository::LocationRepository;

/// Command: CreateLocation.
///
/// Fails with a conflict when any location, active or not, already uses `number`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateLocation {
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

impl Command for CreateLocation {}

impl CreateLocation {
    fn has_contact_info(&self) -> bool {
        [&self.contact_name, &self.contact_email, &self.contact_phone]
            .into_iter()
            .any(|field| field.as_deref().is_some_and(|v| !v.trim().is_empty()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CreateLocationResult {
    pub location_id: LocationId,
}

pub struct CreateLocationHandler {
    repository: Arc<dyn LocationRepository>,
}

impl CreateLocationHandler {
    pub fn new(repository: Arc<dyn LocationRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CommandHandler<CreateLocation> for CreateLocationHandler {
    type Output = CreateLocationResult;

    async fn handle(&self, cmd: CreateLocation) -> HandlerResult<CreateLocationResult> {
        if self.repository.get_by_number(&cmd.number).await?.is_some() {
            tracing::warn!(number = %cmd.number, "Location number already in use");
            return Err(duplicate_number(&cmd.number).into());
        }

        let with_contact = cmd.has_contact_info();
        let address = Address::create(cmd.street, cmd.city, cmd.postal_code, cmd.country, cmd.state)?;
        let mut location = Location::create(cmd.name, cmd.number, address)?;

        if with_contact {
            location.set_contact_info(cmd.contact_name, cmd.contact_email, cmd.contact_phone)?;
        }

        let location_id = self.repository.add(&location).await?;
        tracing::info!(location_id = %location_id, number = %location.number(), "Created location");

        Ok(CreateLocationResult { location_id })
    }
}
