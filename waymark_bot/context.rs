use async_trait::async_trait;

use waymark_types::errors::ChatError;

use crate::format::DisplayUnit;

/// An attachment on the invoking message. Only the URL matters here.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub url: String,
}

/// Navigation input for a paginated reply session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageAction {
    Next,
    Prev,
    Stop,
}

/// The seam between the bot and whatever chat transport carries it.
/// One instance is bound to one command invocation: it knows the author,
/// the attachments of the invoking message, and where replies go.
#[async_trait]
pub trait ChatContext: Send {
    fn author_id(&self) -> &str;

    fn attachments(&self) -> &[Attachment];

    async fn send_text(&mut self, text: &str) -> Result<(), ChatError>;

    async fn send_unit(&mut self, unit: &DisplayUnit) -> Result<(), ChatError>;

    /// Show one page of a session. `page` is zero-based.
    async fn send_page(
        &mut self,
        unit: &DisplayUnit,
        page: usize,
        total: usize,
    ) -> Result<(), ChatError>;

    /// The next navigation action, or `None` when the transport has no
    /// more input for this session.
    async fn next_page_action(&mut self) -> Result<Option<PageAction>, ChatError>;
}
