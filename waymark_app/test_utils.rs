#[cfg(any(test, feature = "test-utils"))]
pub mod tests {
    use async_trait::async_trait;
    use chrono::Utc;
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
    };

    use waymark_types::{
        errors::{ApplicationError, DbError},
        location::{Location, LocationChange, LocationFilter, NewLocation},
    };

    use crate::{
        repository::LocationRepository,
        uow::{UnitOfWork, UnitOfWorkProvider},
    };

    /// In-memory stand-in for the Postgres repository. Assigns ids as
    /// `max + 1` under a lock, which matches the sequence semantics of the
    /// real store (no deletion, so no gaps).
    #[derive(Default, Clone)]
    pub struct MockLocationRepository {
        locations: Arc<Mutex<HashMap<i64, Location>>>,
    }

    impl MockLocationRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn count(&self) -> usize {
            self.locations.lock().unwrap().len()
        }

        pub fn snapshot(&self) -> Vec<Location> {
            let mut all: Vec<Location> = self.locations.lock().unwrap().values().cloned().collect();
            all.sort_by_key(|l| l.id);
            all
        }
    }

    #[async_trait]
    impl LocationRepository for MockLocationRepository {
        async fn add(&self, location: &NewLocation) -> Result<i64, ApplicationError> {
            let mut locations = self.locations.lock().unwrap();
            let id = locations.keys().max().copied().unwrap_or(0) + 1;

            locations.insert(
                id,
                Location {
                    id,
                    x: location.x,
                    y: location.y,
                    z: location.z,
                    name: location.name.clone(),
                    description: None,
                    added_by: location.added_by.clone(),
                    screenshot_url: location.screenshot_url.clone(),
                    created_at: Utc::now(),
                },
            );

            Ok(id)
        }

        async fn get_by_id(&self, id: i64) -> Result<Location, ApplicationError> {
            let locations = self.locations.lock().unwrap();
            locations
                .get(&id)
                .cloned()
                .ok_or_else(|| ApplicationError::Db(DbError::LocationNotFound(id)))
        }

        async fn find(&self, filter: &LocationFilter) -> Result<Vec<Location>, ApplicationError> {
            let locations = self.locations.lock().unwrap();
            let mut matched: Vec<Location> = locations
                .values()
                .filter(|l| filter.matches(l))
                .cloned()
                .collect();

            matched.sort_by_key(|l| l.id);
            Ok(matched)
        }

        async fn update(&self, id: i64, change: &LocationChange) -> Result<(), ApplicationError> {
            let mut locations = self.locations.lock().unwrap();
            match locations.get_mut(&id) {
                Some(location) => {
                    change.apply(location);
                    Ok(())
                }
                None => Err(ApplicationError::Db(DbError::LocationNotFound(id))),
            }
        }
    }

    #[derive(Default, Clone)]
    pub struct MockUnitOfWork {
        locations: MockLocationRepository,
    }

    impl MockUnitOfWork {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_repository(locations: MockLocationRepository) -> Self {
            Self { locations }
        }
    }

    #[async_trait]
    impl<'a> UnitOfWork<'a> for MockUnitOfWork {
        fn locations(&self) -> Arc<dyn LocationRepository + 'a> {
            Arc::new(self.locations.clone())
        }

        async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
            Ok(())
        }

        async fn rollback(self: Box<Self>) -> Result<(), ApplicationError> {
            Ok(())
        }
    }

    /// Provider handing out units of work that all share one repository,
    /// so state persists across bus calls in tests.
    #[derive(Default, Clone)]
    pub struct MockUnitOfWorkProvider {
        repository: MockLocationRepository,
    }

    impl MockUnitOfWorkProvider {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn repository(&self) -> &MockLocationRepository {
            &self.repository
        }
    }

    #[async_trait]
    impl UnitOfWorkProvider for MockUnitOfWorkProvider {
        async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError> {
            Ok(Box::new(MockUnitOfWork::with_repository(
                self.repository.clone(),
            )))
        }
    }
}
