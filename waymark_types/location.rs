use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named point in world-space, recorded by a channel member.
///
/// Only `id` and `added_by` are guaranteed to be meaningful; every other
/// field may be absent. A missing `screenshot_url` and a cleared one are
/// the same thing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub added_by: String,
    pub screenshot_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Everything the caller supplies when recording a location.
/// The id (and `created_at`) are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewLocation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub name: Option<String>,
    pub added_by: String,
    pub screenshot_url: Option<String>,
}

/// Exclusive bounds on a single axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordRange {
    pub min: f64,
    pub max: f64,
}

impl CoordRange {
    /// A range of half-width `radius` centered on `center`.
    pub fn around(center: f64, radius: f64) -> Self {
        Self {
            min: center - radius,
            max: center + radius,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value > self.min && value < self.max
    }
}

/// Filter for range queries: author equality and/or per-axis bounds.
/// An empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationFilter {
    pub added_by: Option<String>,
    pub x: Option<CoordRange>,
    pub y: Option<CoordRange>,
    pub z: Option<CoordRange>,
}

impl LocationFilter {
    pub fn by_author(added_by: impl Into<String>) -> Self {
        Self {
            added_by: Some(added_by.into()),
            ..Self::default()
        }
    }

    pub fn matches(&self, location: &Location) -> bool {
        if let Some(author) = &self.added_by {
            if location.added_by != *author {
                return false;
            }
        }
        if let Some(range) = &self.x {
            if !range.contains(location.x) {
                return false;
            }
        }
        if let Some(range) = &self.y {
            if !range.contains(location.y) {
                return false;
            }
        }
        if let Some(range) = &self.z {
            if !range.contains(location.z) {
                return false;
            }
        }
        true
    }
}

/// A partial update to a single location. Each variant maps to exactly one
/// statement in the store; `Screenshot(None)` clears the field.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationChange {
    Description(String),
    Name(String),
    Position { x: f64, y: f64, z: f64 },
    Screenshot(Option<String>),
}

impl LocationChange {
    /// Applies the change to an in-memory record (used by the mock store).
    pub fn apply(&self, location: &mut Location) {
        match self {
            LocationChange::Description(description) => {
                location.description = Some(description.clone());
            }
            LocationChange::Name(name) => {
                location.name = Some(name.clone());
            }
            LocationChange::Position { x, y, z } => {
                location.x = *x;
                location.y = *y;
                location.z = *z;
            }
            LocationChange::Screenshot(url) => {
                location.screenshot_url = url.clone();
            }
        }
    }
}

/// Where a `near-me` search starts from. The two shapes are distinct on
/// purpose: with only x/z the y axis plays no part in filtering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NearbyOrigin {
    Planar { x: f64, z: f64 },
    Spatial { x: f64, y: f64, z: f64 },
}

impl NearbyOrigin {
    pub fn x(&self) -> f64 {
        match self {
            NearbyOrigin::Planar { x, .. } | NearbyOrigin::Spatial { x, .. } => *x,
        }
    }

    pub fn z(&self) -> f64 {
        match self {
            NearbyOrigin::Planar { z, .. } | NearbyOrigin::Spatial { z, .. } => *z,
        }
    }

    pub fn y(&self) -> Option<f64> {
        match self {
            NearbyOrigin::Planar { .. } => None,
            NearbyOrigin::Spatial { y, .. } => Some(*y),
        }
    }

    /// Distance on the x/z plane. The y axis is ignored by the metric even
    /// when it was part of the pre-filter.
    pub fn distance_to(&self, location: &Location) -> f64 {
        let dx = location.x - self.x();
        let dz = location.z - self.z();
        (dx * dx + dz * dz).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(id: i64, x: f64, y: f64, z: f64, added_by: &str) -> Location {
        Location {
            id,
            x,
            y,
            z,
            name: None,
            description: None,
            added_by: added_by.to_string(),
            screenshot_url: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_coord_range_bounds_are_exclusive() {
        let range = CoordRange::around(0.0, 100.0);
        assert!(range.contains(99.9));
        assert!(!range.contains(100.0));
        assert!(!range.contains(-100.0));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = LocationFilter::default();
        assert!(filter.matches(&location(1, 10.0, 64.0, -30.0, "alice")));
    }

    #[test]
    fn test_filter_by_author() {
        let filter = LocationFilter::by_author("alice");
        assert!(filter.matches(&location(1, 0.0, 0.0, 0.0, "alice")));
        assert!(!filter.matches(&location(2, 0.0, 0.0, 0.0, "bob")));
    }

    #[test]
    fn test_filter_by_axis_ranges() {
        let filter = LocationFilter {
            x: Some(CoordRange::around(0.0, 50.0)),
            z: Some(CoordRange::around(0.0, 50.0)),
            ..Default::default()
        };
        assert!(filter.matches(&location(1, 10.0, 900.0, -10.0, "alice")));
        assert!(!filter.matches(&location(2, 60.0, 0.0, 0.0, "alice")));
    }

    #[test]
    fn test_change_apply_clears_screenshot() {
        let mut loc = location(1, 0.0, 0.0, 0.0, "alice");
        loc.screenshot_url = Some("https://example.com/a.png".to_string());

        LocationChange::Screenshot(None).apply(&mut loc);
        assert_eq!(loc.screenshot_url, None);
    }

    #[test]
    fn test_planar_distance_ignores_y() {
        let origin = NearbyOrigin::Spatial {
            x: 0.0,
            y: 64.0,
            z: 0.0,
        };
        let loc = location(1, 3.0, 1000.0, 4.0, "alice");
        assert_eq!(origin.distance_to(&loc), 5.0);
    }
}
