use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;

use waymark_app::repository::LocationRepository;
use waymark_types::errors::{ApplicationError, DbError, Result};
use waymark_types::location::{Location, LocationChange, LocationFilter, NewLocation};

use crate::models as db_models;

/// Implements LocationRepository and operates on transactions.
#[derive(Clone)]
pub struct PostgresLocationRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresLocationRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
        Self { tx }
    }
}

#[async_trait::async_trait]
impl<'a> LocationRepository for PostgresLocationRepository<'a> {
    async fn add(&self, location: &NewLocation) -> Result<i64, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        // The identity column assigns the id; with no deletion this is
        // exactly max(id) + 1, without the read-then-write race.
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO locations (x, y, z, name, added_by, screenshot_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(location.x)
        .bind(location.y)
        .bind(location.z)
        .bind(&location.name)
        .bind(&location.added_by)
        .bind(&location.screenshot_url)
        .fetch_one(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(id)
    }

    async fn get_by_id(&self, id: i64) -> Result<Location, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let row = sqlx::query_as::<_, db_models::Location>(
            r#"
            SELECT id, x, y, z, name, description, added_by, screenshot_url, created_at
            FROM locations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        row.map(Into::into)
            .ok_or(ApplicationError::Db(DbError::LocationNotFound(id)))
    }

    async fn find(&self, filter: &LocationFilter) -> Result<Vec<Location>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let rows = sqlx::query_as::<_, db_models::Location>(
            r#"
            SELECT id, x, y, z, name, description, added_by, screenshot_url, created_at
            FROM locations
            WHERE ($1::text IS NULL OR added_by = $1)
              AND ($2::double precision IS NULL OR x > $2)
              AND ($3::double precision IS NULL OR x < $3)
              AND ($4::double precision IS NULL OR y > $4)
              AND ($5::double precision IS NULL OR y < $5)
              AND ($6::double precision IS NULL OR z > $6)
              AND ($7::double precision IS NULL OR z < $7)
            ORDER BY id
            "#,
        )
        .bind(&filter.added_by)
        .bind(filter.x.map(|r| r.min))
        .bind(filter.x.map(|r| r.max))
        .bind(filter.y.map(|r| r.min))
        .bind(filter.y.map(|r| r.max))
        .bind(filter.z.map(|r| r.min))
        .bind(filter.z.map(|r| r.max))
        .fetch_all(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i64, change: &LocationChange) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let result = match change {
            LocationChange::Description(description) => {
                sqlx::query("UPDATE locations SET description = $2 WHERE id = $1")
                    .bind(id)
                    .bind(description)
                    .execute(&mut *tx_guard.as_mut())
                    .await
            }
            LocationChange::Name(name) => {
                sqlx::query("UPDATE locations SET name = $2 WHERE id = $1")
                    .bind(id)
                    .bind(name)
                    .execute(&mut *tx_guard.as_mut())
                    .await
            }
            LocationChange::Position { x, y, z } => {
                sqlx::query("UPDATE locations SET x = $2, y = $3, z = $4 WHERE id = $1")
                    .bind(id)
                    .bind(x)
                    .bind(y)
                    .bind(z)
                    .execute(&mut *tx_guard.as_mut())
                    .await
            }
            // A None bind writes NULL, which clears the field.
            LocationChange::Screenshot(url) => {
                sqlx::query("UPDATE locations SET screenshot_url = $2 WHERE id = $1")
                    .bind(id)
                    .bind(url)
                    .execute(&mut *tx_guard.as_mut())
                    .await
            }
        }
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        if result.rows_affected() == 0 {
            return Err(ApplicationError::Db(DbError::LocationNotFound(id)));
        }

        Ok(())
    }
}
