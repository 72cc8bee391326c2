mod find_nearby;
mod get_location;
mod list_locations;

pub use find_nearby::FindNearbyHandler;
pub use get_location::GetLocationHandler;
pub use list_locations::ListLocationsHandler;
