use async_trait::async_trait;

use avalans_core::RepositoryResult;

use crate::location::{Location, LocationId};

/// Persistence port for the [`Location`] aggregate.
///
/// There is no delete: locations are deactivated instead.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn get_by_id(&self, id: LocationId) -> RepositoryResult<Option<Location>>;

    /// Business-key lookup across active and inactive locations.
    async fn get_by_number(&self, number: &str) -> RepositoryResult<Option<Location>>;

    async fn get_all(&self, include_inactive: bool) -> RepositoryResult<Vec<Location>>;

    async fn add(&self, location: &Location) -> RepositoryResult<LocationId>;

    async fn update(&self, location: &Location) -> RepositoryResult<()>;
}
