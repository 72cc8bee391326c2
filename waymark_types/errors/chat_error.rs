use thiserror::Error;

/// Errors from the chat transport itself.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Failed to send reply: {0}")]
    Send(String),

    #[error("Failed to receive from the gateway: {0}")]
    Receive(String),
}
