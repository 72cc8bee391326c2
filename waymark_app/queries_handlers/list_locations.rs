use async_trait::async_trait;
use std::sync::Arc;

use waymark_types::errors::ApplicationError;
use waymark_types::location::LocationFilter;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::ListLocations},
    uow::UnitOfWork,
};

pub struct ListLocationsHandler {}

impl Default for ListLocationsHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ListLocationsHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<ListLocations> for ListLocationsHandler {
    async fn handle(
        &self,
        query: ListLocations,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<ListLocations as Query>::Output, ApplicationError> {
        let filter = match query.added_by {
            Some(author) => LocationFilter::by_author(author),
            None => LocationFilter::default(),
        };

        uow.locations().find(&filter).await
    }
}
