use std::cmp::Ordering;

use waymark_types::location::{Location, NearbyOrigin};

/// A location paired with its x/z-plane distance from a search origin.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedLocation {
    pub location: Location,
    pub distance: f64,
}

/// Attaches the planar distance from `origin` to every candidate and
/// returns them in ascending-distance order. The sort is stable, so equal
/// distances keep the candidates' incoming order.
pub fn rank_by_distance(origin: &NearbyOrigin, candidates: Vec<Location>) -> Vec<RankedLocation> {
    let mut ranked: Vec<RankedLocation> = candidates
        .into_iter()
        .map(|location| RankedLocation {
            distance: origin.distance_to(&location),
            location,
        })
        .collect();

    ranked.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(Ordering::Equal));
    ranked
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn location(id: i64, x: f64, y: f64, z: f64) -> Location {
        Location {
            id,
            x,
            y,
            z,
            name: None,
            description: None,
            added_by: "tester".to_string(),
            screenshot_url: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_orders_by_ascending_planar_distance() {
        let origin = NearbyOrigin::Planar { x: 0.0, z: 0.0 };
        let ranked = rank_by_distance(
            &origin,
            vec![
                location(1, 30.0, 0.0, 40.0),
                location(2, 3.0, 0.0, 4.0),
                location(3, 6.0, 0.0, 8.0),
            ],
        );

        let ids: Vec<i64> = ranked.iter().map(|r| r.location.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert_eq!(ranked[0].distance, 5.0);
        assert_eq!(ranked[2].distance, 50.0);
    }

    #[test]
    fn test_y_axis_does_not_affect_distance() {
        let origin = NearbyOrigin::Spatial {
            x: 0.0,
            y: 64.0,
            z: 0.0,
        };
        let ranked = rank_by_distance(
            &origin,
            vec![location(1, 3.0, 4000.0, 4.0), location(2, 0.0, 64.0, 100.0)],
        );

        assert_eq!(ranked[0].location.id, 1);
        assert_eq!(ranked[0].distance, 5.0);
    }

    #[test]
    fn test_equal_distances_keep_insertion_order() {
        let origin = NearbyOrigin::Planar { x: 0.0, z: 0.0 };
        let ranked = rank_by_distance(
            &origin,
            vec![
                location(7, 0.0, 0.0, 10.0),
                location(3, 10.0, 0.0, 0.0),
                location(5, -10.0, 0.0, 0.0),
            ],
        );

        let ids: Vec<i64> = ranked.iter().map(|r| r.location.id).collect();
        assert_eq!(ids, vec![7, 3, 5]);
    }
}
