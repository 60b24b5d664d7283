use std::sync::Arc;

use async_trait::async_trait;

use avalans_core::{HandlerResult, Query, QueryHandler};

use crate::dto::LocationDto;
use crate::location::LocationId;
use crate::repository::LocationRepository;

/// Query: GetLocationById. Inactive locations are returned too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetLocationById {
    pub id: LocationId,
}

impl Query for GetLocationById {}

pub struct GetLocationByIdHandler {
    repository: Arc<dyn LocationRepository>,
}

impl GetLocationByIdHandler {
    pub fn new(repository: Arc<dyn LocationRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl QueryHandler<GetLocationById> for GetLocationByIdHandler {
    type Output = Option<LocationDto>;

    async fn handle(&self, query: GetLocationById) -> HandlerResult<Option<LocationDto>> {
        let location = self.repository.get_by_id(query.id).await?;
        Ok(location.as_ref().map(LocationDto::from))
    }
}
