mod app_error;
mod chat_error;
mod command_error;
mod db_error;

pub use app_error::ApplicationError;
pub use chat_error::ChatError;
pub use command_error::CommandError;
pub use db_error::DbError;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;
