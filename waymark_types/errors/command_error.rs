use thiserror::Error;

/// Errors raised while parsing a chat message into a command.
#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error("Missing argument '{0}'")]
    MissingArgument(&'static str),

    #[error("Invalid value '{value}' for argument '{name}'")]
    InvalidArgument { name: &'static str, value: String },
}
