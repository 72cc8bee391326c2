use thiserror::Error;

use super::{ChatError, CommandError, DbError};

/// Top-level error for the whole application. Everything a handler or the
/// dispatcher can fail with converges here so the central error path can
/// log it and apologize once.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Db(#[from] DbError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Chat(#[from] ChatError),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl ApplicationError {
    /// True when the failure is "the targeted record does not exist" —
    /// reported to the user as an informational reply, not an error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApplicationError::Db(DbError::LocationNotFound(_)))
    }
}
