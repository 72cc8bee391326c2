mod add_location;
mod edit_description;
mod edit_name;
mod edit_position;
mod edit_screenshot;

pub use add_location::AddLocationCommandHandler;
pub use edit_description::EditDescriptionCommandHandler;
pub use edit_name::EditNameCommandHandler;
pub use edit_position::EditPositionCommandHandler;
pub use edit_screenshot::EditScreenshotCommandHandler;
