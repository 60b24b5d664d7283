use std::sync::Arc;

use async_trait::async_trait;

use avalans_core::{HandlerResult, Query, QueryHandler};

use crate::dto::LocationDto;
use crate::repository::LocationRepository;

/// Query: GetAllLocations. Only active locations unless `include_inactive` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetAllLocations {
    pub include_inactive: bool,
}

impl Query for GetAllLocations {}

pub struct GetAllLocationsHandler {
    repository: Arc<dyn LocationRepository>,
}

impl GetAllLocationsHandler {
    pub fn new(repository: Arc<dyn LocationRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl QueryHandler<GetAllLocations> for GetAllLocationsHandler {
    type Output = Vec<LocationDto>;

    async fn handle(&self, query: GetAllLocations) -> HandlerResult<Vec<LocationDto>> {
        let locations = self.repository.get_all(query.include_inactive).await?;
        Ok(locations.iter().map(LocationDto::from).collect())
    }
}
