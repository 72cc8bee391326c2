use std::sync::Arc;

use waymark_types::errors::ApplicationError;
use waymark_types::location::LocationChange;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::EditScreenshot},
    uow::UnitOfWork,
};

pub struct EditScreenshotCommandHandler {}

impl Default for EditScreenshotCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EditScreenshotCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<EditScreenshot> for EditScreenshotCommandHandler {
    async fn handle(
        &self,
        command: EditScreenshot,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        // None clears the stored URL; the formatter then omits the image.
        uow.locations()
            .update(command.id, &LocationChange::Screenshot(command.screenshot_url))
            .await
    }
}
