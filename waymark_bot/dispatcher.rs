use std::sync::Arc;

use waymark_app::{
    bus::AppBus,
    command_handlers::{
        AddLocationCommandHandler, EditDescriptionCommandHandler, EditNameCommandHandler,
        EditPositionCommandHandler, EditScreenshotCommandHandler,
    },
    cqrs::{
        commands::{AddLocation, EditDescription, EditName, EditPosition, EditScreenshot},
        queries::{FindNearby, GetLocation, ListLocations},
    },
    queries_handlers::{FindNearbyHandler, GetLocationHandler, ListLocationsHandler},
};
use waymark_types::errors::ApplicationError;

use crate::{
    context::ChatContext,
    format::{location_to_unit, ranked_to_unit},
    paginator::PaginatorSession,
    parser::{self, BotCommand},
};

const GENERIC_ERROR_REPLY: &str = "An error occurred, please see the log for more info";

/// Routes inbound messages: parse, run the matching handler through the
/// bus, format the reply. This is also the single place that apologizes
/// to the user and writes the operator log when anything fails.
pub struct Dispatcher {
    bus: Arc<AppBus>,
}

impl Dispatcher {
    pub fn new(bus: Arc<AppBus>) -> Self {
        Self { bus }
    }

    pub async fn dispatch(&self, ctx: &mut dyn ChatContext, content: &str) {
        let Some(parsed) = parser::parse(&self.bus.config().command_prefix, content) else {
            // Not addressed to the bot.
            return;
        };

        let result = match parsed {
            Ok(command) => self.run(ctx, command).await,
            Err(e) => Err(e.into()),
        };

        if let Err(error) = result {
            tracing::error!(%error, "command failed");
            if let Err(send_error) = ctx.send_text(GENERIC_ERROR_REPLY).await {
                tracing::error!(%send_error, "could not deliver the error reply");
            }
        }
    }

    async fn run(
        &self,
        ctx: &mut dyn ChatContext,
        command: BotCommand,
    ) -> Result<(), ApplicationError> {
        match command {
            BotCommand::ShowAll { by_me_only } => {
                let added_by = by_me_only.then(|| ctx.author_id().to_string());
                let locations = self
                    .bus
                    .query(ListLocations { added_by }, ListLocationsHandler::new())
                    .await?;

                if locations.is_empty() {
                    ctx.send_text("No locations added yet").await?;
                    return Ok(());
                }

                let units = locations.iter().map(location_to_unit).collect();
                PaginatorSession::new(units).run(ctx).await?;
                Ok(())
            }

            BotCommand::Show { id } => {
                match self.bus.query(GetLocation { id }, GetLocationHandler::new()).await {
                    Ok(location) => {
                        ctx.send_unit(&location_to_unit(&location)).await?;
                        Ok(())
                    }
                    Err(e) if e.is_not_found() => {
                        ctx.send_text("No locations with that ID found").await?;
                        Ok(())
                    }
                    Err(e) => Err(e),
                }
            }

            BotCommand::NearMe { origin } => {
                let ranked = self
                    .bus
                    .query(FindNearby { origin }, FindNearbyHandler::new())
                    .await?;

                if ranked.is_empty() {
                    let radius = self.bus.config().search_radius;
                    ctx.send_text(&format!("Nothing within {} blocks of you.", radius))
                        .await?;
                    return Ok(());
                }

                let units = ranked.iter().map(ranked_to_unit).collect();
                PaginatorSession::new(units).run(ctx).await?;
                Ok(())
            }

            BotCommand::Add { x, y, z, name } => {
                let screenshot_url = ctx.attachments().first().map(|a| a.url.clone());
                let command = AddLocation {
                    x,
                    y,
                    z,
                    name: Some(name),
                    added_by: ctx.author_id().to_string(),
                    screenshot_url,
                };

                let id = self
                    .bus
                    .execute(command, AddLocationCommandHandler::new())
                    .await?;
                ctx.send_text(&format!("Added location #{}", id)).await?;
                Ok(())
            }

            BotCommand::EditDescription { id, description } => {
                let result = self
                    .bus
                    .execute(
                        EditDescription { id, description },
                        EditDescriptionCommandHandler::new(),
                    )
                    .await;
                self.confirm_edit(ctx, result, "Description updated!").await
            }

            BotCommand::EditName { id, name } => {
                let result = self
                    .bus
                    .execute(EditName { id, name }, EditNameCommandHandler::new())
                    .await;
                self.confirm_edit(ctx, result, "Name updated!").await
            }

            BotCommand::EditLocation { id, x, y, z } => {
                let result = self
                    .bus
                    .execute(
                        EditPosition { id, x, y, z },
                        EditPositionCommandHandler::new(),
                    )
                    .await;
                self.confirm_edit(ctx, result, "Location updated!").await
            }

            BotCommand::EditScreenshot { id } => {
                // With an attachment the screenshot is replaced; without
                // one it is removed entirely.
                let screenshot_url = ctx.attachments().first().map(|a| a.url.clone());
                let result = self
                    .bus
                    .execute(
                        EditScreenshot { id, screenshot_url },
                        EditScreenshotCommandHandler::new(),
                    )
                    .await;
                self.confirm_edit(ctx, result, "Screenshot updated!").await
            }
        }
    }

    async fn confirm_edit(
        &self,
        ctx: &mut dyn ChatContext,
        result: Result<(), ApplicationError>,
        confirmation: &str,
    ) -> Result<(), ApplicationError> {
        match result {
            Ok(()) => {
                ctx.send_text(confirmation).await?;
                Ok(())
            }
            Err(e) if e.is_not_found() => {
                ctx.send_text("No place found with that ID").await?;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
