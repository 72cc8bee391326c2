use async_trait::async_trait;
use std::sync::Arc;

use waymark_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetLocation},
    uow::UnitOfWork,
};

pub struct GetLocationHandler {}

impl Default for GetLocationHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl GetLocationHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetLocation> for GetLocationHandler {
    async fn handle(
        &self,
        query: GetLocation,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<GetLocation as Query>::Output, ApplicationError> {
        uow.locations().get_by_id(query.id).await
    }
}
