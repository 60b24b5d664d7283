use std::sync::Arc;

use async_trait::async_trait;

use avalans_core::{Command, CommandHandler, Entity, HandlerResult};

use crate::address::Address;
use crate::features::{duplicate_number, location_not_found};
use crate::location::LocationId;
use crate::repository::LocationRepository;

/// Command: UpdateLocation.
///
/// Address and contact fields are replaced wholesale: omitting every contact
/// field clears the stored contact data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateLocation {
    pub id: LocationId,
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

impl Command for UpdateLocation {}

pub struct UpdateLocationHandler {
    repository: Arc<dyn LocationRepository>,
}

impl UpdateLocationHandler {
    pub fn new(repository: Arc<dyn LocationRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CommandHandler<UpdateLocation> for UpdateLocationHandler {
    type Output = ();

    async fn handle(&self, cmd: UpdateLocation) -> HandlerResult<()> {
        let Some(mut location) = self.repository.get_by_id(cmd.id).await? else {
            tracing::warn!(location_id = %cmd.id, "Location not found for update");
            return Err(location_not_found(cmd.id).into());
        };

        if location.number() != cmd.number {
            let taken = self.repository.get_by_number(&cmd.number).await?;
            if taken.is_some_and(|other| other.id() != cmd.id) {
                tracing::warn!(location_id = %cmd.id, number = %cmd.number, "Location number already in use");
                return Err(duplicate_number(&cmd.number).into());
            }
        }

        location.update_basic_info(cmd.name, cmd.number)?;

        let address = Address::create(cmd.street, cmd.city, cmd.postal_code, cmd.country, cmd.state)?;
        location.update_address(address);

        location.set_contact_info(cmd.contact_name, cmd.contact_email, cmd.contact_phone)?;

        self.repository.update(&location).await?;
        tracing::info!(location_id = %cmd.id, "Updated location");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Location;
    use crate::repository::MockLocationRepository;
    use avalans_core::{DomainError, HandlerError};
    use std::sync::Mutex;

    fn stored() -> Location {
        let address = Address::create("1 St", "City", "00000", "US", None).unwrap();
        let mut location = Location::create("Acme", "LOC1", address).unwrap();
        location
            .set_contact_info(Some("Jane".into()), Some("jane@example.com".into()), None)
            .unwrap();
        location
    }

    fn command(id: LocationId, number: &str) -> UpdateLocation {
        UpdateLocation {
            id,
            name: "Acme West".into(),
            number: number.into(),
            street: "2 Road".into(),
            city: "Town".into(),
            postal_code: "11111".into(),
            country: "NL".into(),
            state: None,
            contact_name: None,
            contact_email: None,
            contact_phone: None,
        }
    }

    #[tokio::test]
    async fn same_number_skips_uniqueness_check_and_replaces_everything() {
        let location = stored();
        let id = location.id();
        let saved = Arc::new(Mutex::new(None));

        let mut repo = MockLocationRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(location.clone())));
        repo.expect_get_by_number().never();
        let sink = saved.clone();
        repo.expect_update().times(1).returning(move |l| {
            *sink.lock().unwrap() = Some(l.clone());
            Ok(())
        });
        let handler = UpdateLocationHandler::new(Arc::new(repo));

        handler.handle(command(id, "LOC1")).await.unwrap();

        let updated = saved.lock().unwrap().clone().unwrap();
        assert_eq!(updated.name(), "Acme West");
        assert_eq!(updated.address().city(), "Town");
        // all-None contact input clears existing contact data
        assert_eq!(updated.contact_name(), None);
        assert_eq!(updated.contact_email(), None);
    }

    #[tokio::test]
    async fn changing_to_a_taken_number_is_rejected() {
        let location = stored();
        let id = location.id();

        let mut repo = MockLocationRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(location.clone())));
        repo.expect_get_by_number()
            .withf(|number| number == "LOC2")
            .times(1)
            .returning(|number| {
                let address = Address::create("3 Ave", "City", "22222", "US", None).unwrap();
                Ok(Some(Location::create("Other", number, address).unwrap()))
            });
        repo.expect_update().never();
        let handler = UpdateLocationHandler::new(Arc::new(repo));

        let err = handler.handle(command(id, "LOC2")).await.unwrap_err();
        assert_eq!(err, HandlerError::Domain(duplicate_number("LOC2")));
    }

    #[tokio::test]
    async fn taken_number_is_logged_as_warning() {
        let logs = crate::log_capture::CapturedLogs::default();
        let _guard = logs.install();
        let location = stored();
        let id = location.id();

        let mut repo = MockLocationRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(location.clone())));
        repo.expect_get_by_number().returning(|number| {
            let address = Address::create("3 Ave", "City", "22222", "US", None).unwrap();
            Ok(Some(Location::create("Other", number, address).unwrap()))
        });
        repo.expect_update().never();
        let handler = UpdateLocationHandler::new(Arc::new(repo));

        assert!(handler.handle(command(id, "LOC2")).await.is_err());

        let output = logs.contents();
        assert!(output.contains("WARN"));
        assert!(output.contains("Location number already in use"));
        assert!(output.contains("LOC2"));
    }

    #[tokio::test]
    async fn changing_to_a_free_number_succeeds() {
        let location = stored();
        let id = location.id();

        let mut repo = MockLocationRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(location.clone())));
        repo.expect_get_by_number().times(1).returning(|_| Ok(None));
        repo.expect_update()
            .withf(|l| l.number() == "LOC2")
            .times(1)
            .returning(|_| Ok(()));
        let handler = UpdateLocationHandler::new(Arc::new(repo));

        handler.handle(command(id, "LOC2")).await.unwrap();
    }

    #[tokio::test]
    async fn missing_location_is_not_found_and_never_persisted() {
        let id = LocationId::new();
        let mut repo = MockLocationRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));
        repo.expect_update().never();
        let handler = UpdateLocationHandler::new(Arc::new(repo));

        let err = handler.handle(command(id, "LOC1")).await.unwrap_err();

        match err {
            HandlerError::Domain(DomainError::NotFound(msg)) => {
                assert_eq!(msg, format!("Location with ID {id} not found"));
            }
            other => panic!("Expected not found, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn invalid_address_is_rejected_before_persisting() {
        let location = stored();
        let id = location.id();

        let mut repo = MockLocationRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(location.clone())));
        repo.expect_update().never();
        let handler = UpdateLocationHandler::new(Arc::new(repo));

        let err = handler
            .handle(UpdateLocation {
                postal_code: "0".repeat(21),
                ..command(id, "LOC1")
            })
            .await
            .unwrap_err();
        assert_eq!(
            err,
            HandlerError::Domain(DomainError::validation("Postal code cannot exceed 20 characters"))
        );
    }
}
