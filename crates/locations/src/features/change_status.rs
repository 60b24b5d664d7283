//! Activation toggles. Deactivation is the soft delete for locations.

use std::sync::Arc;

use async_trait::async_trait;

use avalans_core::{Command, CommandHandler, HandlerResult};

use crate::features::location_not_found;
use crate::location::{Location, LocationId};
use crate::repository::LocationRepository;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivateLocation {
    pub id: LocationId,
}

impl Command for ActivateLocation {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeactivateLocation {
    pub id: LocationId,
}

impl Command for DeactivateLocation {}

async fn apply(
    repository: &dyn LocationRepository,
    id: LocationId,
    change: fn(&mut Location),
) -> HandlerResult<()> {
    let Some(mut location) = repository.get_by_id(id).await? else {
        tracing::warn!(location_id = %id, "Location not found for status change");
        return Err(location_not_found(id).into());
    };
    change(&mut location);
    repository.update(&location).await?;
    Ok(())
}

pub struct ActivateLocationHandler {
    repository: Arc<dyn LocationRepository>,
}

impl ActivateLocationHandler {
    pub fn new(repository: Arc<dyn LocationRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CommandHandler<ActivateLocation> for ActivateLocationHandler {
    type Output = ();

    async fn handle(&self, cmd: ActivateLocation) -> HandlerResult<()> {
        apply(self.repository.as_ref(), cmd.id, Location::activate).await?;
        tracing::info!(location_id = %cmd.id, "Activated location");
        Ok(())
    }
}

pub struct DeactivateLocationHandler {
    repository: Arc<dyn LocationRepository>,
}

impl DeactivateLocationHandler {
    pub fn new(repository: Arc<dyn LocationRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CommandHandler<DeactivateLocation> for DeactivateLocationHandler {
    type Output = ();

    async fn handle(&self, cmd: DeactivateLocation) -> HandlerResult<()> {
        apply(self.repository.as_ref(), cmd.id, Location::deactivate).await?;
        tracing::info!(location_id = %cmd.id, "Deactivated location");
        Ok(())
    }
}
