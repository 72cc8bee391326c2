use std::sync::Arc;

use waymark_types::errors::ApplicationError;
use waymark_types::location::LocationChange;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::EditPosition},
    uow::UnitOfWork,
};

pub struct EditPositionCommandHandler {}

impl Default for EditPositionCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EditPositionCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<EditPosition> for EditPositionCommandHandler {
    async fn handle(
        &self,
        command: EditPosition,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        let change = LocationChange::Position {
            x: command.x,
            y: command.y,
            z: command.z,
        };

        uow.locations().update(command.id, &change).await
    }
}
