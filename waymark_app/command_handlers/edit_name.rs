use std::sync::Arc;

use waymark_types::errors::ApplicationError;
use waymark_types::location::LocationChange;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::EditName},
    uow::UnitOfWork,
};

pub struct EditNameCommandHandler {}

impl Default for EditNameCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EditNameCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<EditName> for EditNameCommandHandler {
    async fn handle(
        &self,
        command: EditName,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        uow.locations()
            .update(command.id, &LocationChange::Name(command.name))
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use waymark_types::location::NewLocation;

    use super::*;
    use crate::{config::Config, test_utils::tests::MockUnitOfWork, uow::UnitOfWork};

    #[tokio::test]
    async fn test_renames_an_existing_location() {
        let config = Arc::new(Config::from_env());
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let handler = EditNameCommandHandler::new();

        let id = mock_uow
            .locations()
            .add(&NewLocation {
                x: 0.0,
                y: 64.0,
                z: 0.0,
                name: Some("Old outpost".to_string()),
                added_by: "bob".to_string(),
                screenshot_url: None,
            })
            .await
            .unwrap();

        let command = EditName {
            id,
            name: "New outpost".to_string(),
        };
        handler.handle(command, &mock_uow, &config).await.unwrap();

        let stored = mock_uow.locations().get_by_id(id).await.unwrap();
        assert_eq!(stored.name, Some("New outpost".to_string()));
        assert_eq!(stored.added_by, "bob");
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let config = Arc::new(Config::from_env());
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let handler = EditNameCommandHandler::new();

        let command = EditName {
            id: 7,
            name: "Ghost".to_string(),
        };
        let result = handler.handle(command, &mock_uow, &config).await;

        assert!(result.unwrap_err().is_not_found());
    }
}
