//! Repository for the `events` table.

use reportage_core::types::DbId;
use sqlx::PgPool;

use crate::models::event::{CreateEvent, Event, UpdateEvent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, place, city, date, duration, danger, type, extra_metadata";

/// Provides CRUD operations for events.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events (place, city, date, duration, danger, type, extra_metadata)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.place)
            .bind(&input.city)
            .bind(input.date)
            .bind(input.duration)
            .bind(&input.danger)
            .bind(&input.kind)
            .bind(&input.extra_metadata)
            .fetch_one(pool)
            .await
    }

    /// Find an event by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List events in natural (id) order with offset/limit pagination.
    pub async fn list(pool: &PgPool, offset: i64, limit: i64) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events ORDER BY id OFFSET $1 LIMIT $2");
        sqlx::query_as::<_, Event>(&query)
            .bind(offset)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Replace-update an event. Returns `None` if no row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEvent,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET
                place = $2, city = $3, date = $4, duration = $5,
                danger = $6, type = $7, extra_metadata = $8
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(&input.place)
            .bind(&input.city)
            .bind(input.date)
            .bind(input.duration)
            .bind(&input.danger)
            .bind(&input.kind)
            .bind(&input.extra_metadata)
            .fetch_optional(pool)
            .await
    }

    /// Delete an event by ID. Dependent reportages are removed by the
    /// ON DELETE CASCADE constraint. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
