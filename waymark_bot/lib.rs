pub mod context;
pub mod dispatcher;
pub mod format;
pub mod paginator;
pub mod parser;
