use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use waymark_bot::{
    context::{Attachment, ChatContext, PageAction},
    dispatcher::Dispatcher,
    format::DisplayUnit,
};
use waymark_types::errors::ChatError;

/// Local stdin/stdout transport. The production chat gateway plugs in
/// behind `ChatContext` the same way; this one exists so the binary can
/// run on its own.
pub struct ConsoleGateway {
    author: String,
}

impl ConsoleGateway {
    pub fn new(author: String) -> Self {
        Self { author }
    }

    pub async fn run(&self, dispatcher: &Dispatcher) -> Result<(), ChatError> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            let line = lines
                .next_line()
                .await
                .map_err(|e| ChatError::Receive(e.to_string()))?;

            let Some(line) = line else {
                // stdin closed
                return Ok(());
            };

            if line.trim().is_empty() {
                continue;
            }

            let mut ctx = ConsoleContext {
                author: &self.author,
                lines: &mut lines,
            };
            dispatcher.dispatch(&mut ctx, &line).await;
        }
    }
}

/// One invocation bound to the console. Pagination input comes from the
/// same stdin; anything that is not a navigation word ends the session.
struct ConsoleContext<'a> {
    author: &'a str,
    lines: &'a mut Lines<BufReader<Stdin>>,
}

#[async_trait]
impl ChatContext for ConsoleContext<'_> {
    fn author_id(&self) -> &str {
        self.author
    }

    fn attachments(&self) -> &[Attachment] {
        // No attachments on a console line.
        &[]
    }

    async fn send_text(&mut self, text: &str) -> Result<(), ChatError> {
        println!("{text}");
        Ok(())
    }

    async fn send_unit(&mut self, unit: &DisplayUnit) -> Result<(), ChatError> {
        println!("{}", render(unit));
        Ok(())
    }

    async fn send_page(
        &mut self,
        unit: &DisplayUnit,
        page: usize,
        total: usize,
    ) -> Result<(), ChatError> {
        println!("{}", render(unit));
        println!("[page {}/{}] type next, prev or stop", page + 1, total);
        Ok(())
    }

    async fn next_page_action(&mut self) -> Result<Option<PageAction>, ChatError> {
        let line = self
            .lines
            .next_line()
            .await
            .map_err(|e| ChatError::Receive(e.to_string()))?;

        Ok(line.map(|input| match input.trim() {
            "next" | "n" => PageAction::Next,
            "prev" | "p" => PageAction::Prev,
            _ => PageAction::Stop,
        }))
    }
}

fn render(unit: &DisplayUnit) -> String {
    let mut out = format!(
        "{}\n{}\nPosition: {}\nAdded by: {}",
        unit.title, unit.description, unit.position, unit.added_by
    );
    if let Some(url) = &unit.image_url {
        out.push_str(&format!("\nScreenshot: {url}"));
    }
    if let Some(footer) = &unit.footer {
        out.push_str(&format!("\n{footer}"));
    }
    out
}
