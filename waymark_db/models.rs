use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Row shape of the `locations` table. NULL columns map to `None`; an
/// absent screenshot and a cleared one are the same NULL.
#[derive(Debug, Clone, FromRow)]
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
