use std::sync::Arc;

use waymark_types::errors::ApplicationError;
use waymark_types::location::LocationChange;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::EditDescription},
    uow::UnitOfWork,
};

pub struct EditDescriptionCommandHandler {}

impl Default for EditDescriptionCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EditDescriptionCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<EditDescription> for EditDescriptionCommandHandler {
    async fn handle(
        &self,
        command: EditDescription,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        uow.locations()
            .update(command.id, &LocationChange::Description(command.description))
            .await
    }
}
