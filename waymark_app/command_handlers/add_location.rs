use std::sync::Arc;

use waymark_types::errors::ApplicationError;
use waymark_types::location::NewLocation;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::AddLocation},
    uow::UnitOfWork,
};

pub struct AddLocationCommandHandler {}

impl Default for AddLocationCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl AddLocationCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<AddLocation> for AddLocationCommandHandler {
    async fn handle(
        &self,
        command: AddLocation,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<i64, ApplicationError> {
        let location = NewLocation {
            x: command.x,
            y: command.y,
            z: command.z,
            name: command.name,
            added_by: command.added_by,
            screenshot_url: command.screenshot_url,
        };

        uow.locations().add(&location).await
    }
}
