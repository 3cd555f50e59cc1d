//! Repository for the `reportages` table.
//!
//! Foreign-key existence checks live in the handler layer (the service
//! validates references before mutating); this repository only issues the
//! statements.

use reportage_core::types::DbId;
use sqlx::PgPool;

use crate::models::reportage::{CreateReportage, Reportage, UpdateReportage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, date, quality, time, video, event_id, correspondent_id";

/// Provides CRUD operations for reportages.
pub struct ReportageRepo;

impl ReportageRepo {
    /// Insert a new reportage, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateReportage) -> Result<Reportage, sqlx::Error> {
        let query = format!(
            "INSERT INTO reportages (date, quality, time, video, event_id, correspondent_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reportage>(&query)
            .bind(input.date)
            .bind(&input.quality)
            .bind(input.time)
            .bind(input.video)
            .bind(input.event_id)
            .bind(input.correspondent_id)
            .fetch_one(pool)
            .await
    }

    /// Find a reportage by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Reportage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reportages WHERE id = $1");
        sqlx::query_as::<_, Reportage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List reportages in natural (id) order with offset/limit pagination.
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Reportage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reportages ORDER BY id OFFSET $1 LIMIT $2");
        sqlx::query_as::<_, Reportage>(&query)
            .bind(offset)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Replace-update a reportage. Returns `None` if no row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateReportage,
    ) -> Result<Option<Reportage>, sqlx::Error> {
        let query = format!(
            "UPDATE reportages SET
                date = $2, quality = $3, time = $4, video = $5,
                event_id = $6, correspondent_id = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reportage>(&query)
            .bind(id)
            .bind(input.date)
            .bind(&input.quality)
            .bind(input.time)
            .bind(input.video)
            .bind(input.event_id)
            .bind(input.correspondent_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a reportage by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reportages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
