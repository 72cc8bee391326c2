use async_trait::async_trait;
use std::sync::Arc;

use waymark_types::errors::ApplicationError;
use waymark_types::location::{CoordRange, LocationFilter};

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::FindNearby},
    distance::rank_by_distance,
    uow::UnitOfWork,
};

pub struct FindNearbyHandler {}

impl Default for FindNearbyHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl FindNearbyHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<FindNearby> for FindNearbyHandler {
    async fn handle(
        &self,
        query: FindNearby,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        config: &Arc<Config>,
    ) -> Result<<FindNearby as Query>::Output, ApplicationError> {
        let origin = query.origin;
        let radius = config.search_radius;

        // Bounding box on x and z; y participates only when the caller
        // supplied it. Distance itself never uses y.
        let filter = LocationFilter {
            added_by: None,
            x: Some(CoordRange::around(origin.x(), radius)),
            y: origin.y().map(|y| CoordRange::around(y, radius)),
            z: Some(CoordRange::around(origin.z(), radius)),
        };

        let candidates = uow.locations().find(&filter).await?;
        Ok(rank_by_distance(&origin, candidates))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use waymark_types::location::{NearbyOrigin, NewLocation};

    use super::*;
    use crate::{config::Config, test_utils::tests::MockUnitOfWork, uow::UnitOfWork};

    async fn seed(uow: &Box<dyn UnitOfWork<'_> + '_>, x: f64, y: f64, z: f64) -> i64 {
        uow.locations()
            .add(&NewLocation {
                x,
                y,
                z,
                name: None,
                added_by: "alice".to_string(),
                screenshot_url: None,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_planar_origin_ignores_y_when_filtering() {
        let config = Arc::new(Config::from_env());
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let handler = FindNearbyHandler::new();

        // Far outside any sane y-box, but y must not matter here.
        seed(&mock_uow, 100.0, 90000.0, 100.0).await;

        let found = handler
            .handle(
                FindNearby {
                    origin: NearbyOrigin::Planar { x: 0.0, z: 0.0 },
                },
                &mock_uow,
                &config,
            )
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn test_spatial_origin_bounds_y_too() {
        let config = Arc::new(Config::from_env());
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let handler = FindNearbyHandler::new();

        seed(&mock_uow, 100.0, 90000.0, 100.0).await;
        let near_id = seed(&mock_uow, 200.0, 70.0, 200.0).await;

        let found = handler
            .handle(
                FindNearby {
                    origin: NearbyOrigin::Spatial {
                        x: 0.0,
                        y: 64.0,
                        z: 0.0,
                    },
                },
                &mock_uow,
                &config,
            )
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].location.id, near_id);
    }

    #[tokio::test]
    async fn test_results_are_distance_ascending() {
        let config = Arc::new(Config::from_env());
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let handler = FindNearbyHandler::new();

        let far = seed(&mock_uow, 3000.0, 64.0, 4000.0).await;
        let near = seed(&mock_uow, 30.0, 64.0, 40.0).await;

        let found = handler
            .handle(
                FindNearby {
                    origin: NearbyOrigin::Planar { x: 0.0, z: 0.0 },
                },
                &mock_uow,
                &config,
            )
            .await
            .unwrap();

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].location.id, near);
        assert_eq!(found[0].distance, 50.0);
        assert_eq!(found[1].location.id, far);
        assert_eq!(found[1].distance, 5000.0);
    }

    #[tokio::test]
    async fn test_outside_the_box_is_excluded() {
        let config = Arc::new(Config::from_env());
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let handler = FindNearbyHandler::new();

        seed(&mock_uow, 6000.0, 64.0, 0.0).await;

        let found = handler
            .handle(
                FindNearby {
                    origin: NearbyOrigin::Planar { x: 0.0, z: 0.0 },
                },
                &mock_uow,
                &config,
            )
            .await
            .unwrap();

        assert!(found.is_empty());
    }
}
