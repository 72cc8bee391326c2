use waymark_types::location as domain;

use crate::models as db_models;

impl From<db_models::Location> for domain::Location {
    fn from(row: db_models::Location) -> Self {
        domain::Location {
            id: row.id,
            x: row.x,
            y: row.y,
            z: row.z,
            name: row.name,
            description: row.description,
            added_by: row.added_by,
            screenshot_url: row.screenshot_url,
            created_at: row.created_at,
        }
    }
}
