use waymark_types::errors::ApplicationError;
use waymark_types::location::{Location, LocationChange, LocationFilter, NewLocation};

#[async_trait::async_trait]
pub trait LocationRepository: Send + Sync {
    /// Insert a new location and return the assigned id. Id assignment is
    /// atomic in the store (sequence), so concurrent adds cannot collide.
    async fn add(&self, location: &NewLocation) -> Result<i64, ApplicationError>;

    /// Point lookup by id. `DbError::LocationNotFound` when absent.
    async fn get_by_id(&self, id: i64) -> Result<Location, ApplicationError>;

    /// All locations matching the filter, in ascending id order.
    async fn find(&self, filter: &LocationFilter) -> Result<Vec<Location>, ApplicationError>;

    /// Apply a partial update to one location.
    /// `DbError::LocationNotFound` when no record matched.
    async fn update(&self, id: i64, change: &LocationChange) -> Result<(), ApplicationError>;
}
