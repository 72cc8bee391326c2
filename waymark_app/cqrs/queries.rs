use waymark_types::location::{Location, NearbyOrigin};

use crate::{cqrs::Query, distance::RankedLocation};

/// Point lookup by id.
#[derive(Debug, Clone)]
pub struct GetLocation {
    pub id: i64,
}

impl Query for GetLocation {
    type Output = Location;
}

/// All locations, optionally restricted to one author.
#[derive(Debug, Clone)]
pub struct ListLocations {
    pub added_by: Option<String>,
}

impl Query for ListLocations {
    type Output = Vec<Location>;
}

/// Locations within the configured search radius of an origin, ordered by
/// ascending x/z-plane distance.
#[derive(Debug, Clone)]
pub struct FindNearby {
    pub origin: NearbyOrigin,
}

impl Query for FindNearby {
    type Output = Vec<RankedLocation>;
}
