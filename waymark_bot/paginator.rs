use waymark_types::errors::ChatError;

use crate::context::{ChatContext, PageAction};
use crate::format::DisplayUnit;

/// A navigable one-unit-at-a-time reply, bound to a single invocation.
/// A lone unit is sent as a plain reply; otherwise the session shows one
/// page and steps on `Next`/`Prev` without wrapping, until `Stop` or the
/// transport runs out of input.
pub struct PaginatorSession {
    units: Vec<DisplayUnit>,
    index: usize,
}

impl PaginatorSession {
    pub fn new(units: Vec<DisplayUnit>) -> Self {
        Self { units, index: 0 }
    }

    pub async fn run(mut self, ctx: &mut dyn ChatContext) -> Result<(), ChatError> {
        match self.units.len() {
            0 => return Ok(()),
            1 => return ctx.send_unit(&self.units[0]).await,
            _ => {}
        }

        let total = self.units.len();
        ctx.send_page(&self.units[self.index], self.index, total)
            .await?;

        while let Some(action) = ctx.next_page_action().await? {
            let moved = match action {
                PageAction::Next if self.index + 1 < total => {
                    self.index += 1;
                    true
                }
                PageAction::Prev if self.index > 0 => {
                    self.index -= 1;
                    true
                }
                PageAction::Stop => break,
                _ => false,
            };

            if moved {
                ctx.send_page(&self.units[self.index], self.index, total)
                    .await?;
            }
        }

        Ok(())
    }
}
