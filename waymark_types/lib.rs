pub mod errors;
pub mod location;

pub use errors::Result;
