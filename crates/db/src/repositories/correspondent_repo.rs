//! Repository for the `correspondents` table.

use reportage_core::types::DbId;
use sqlx::PgPool;

use crate::models::correspondent::{Correspondent, CreateCorrespondent, UpdateCorrespondent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, country, city, specification, operator, price";

/// Provides CRUD operations for correspondents.
pub struct CorrespondentRepo;

impl CorrespondentRepo {
    /// Insert a new correspondent, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCorrespondent,
    ) -> Result<Correspondent, sqlx::Error> {
        let query = format!(
            "INSERT INTO correspondents (name, country, city, specification, operator, price)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Correspondent>(&query)
            .bind(&input.name)
            .bind(&input.country)
            .bind(&input.city)
            .bind(&input.specification)
            .bind(input.operator)
            .bind(input.price)
            .fetch_one(pool)
            .await
    }

    /// Find a correspondent by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Correspondent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM correspondents WHERE id = $1");
        sqlx::query_as::<_, Correspondent>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List correspondents in natural (id) order with offset/limit pagination.
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Correspondent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM correspondents ORDER BY id OFFSET $1 LIMIT $2");
        sqlx::query_as::<_, Correspondent>(&query)
            .bind(offset)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Replace-update a correspondent. Returns `None` if no row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCorrespondent,
    ) -> Result<Option<Correspondent>, sqlx::Error> {
        let query = format!(
            "UPDATE correspondents SET
                name = $2, country = $3, city = $4,
                specification = $5, operator = $6, price = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Correspondent>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.country)
            .bind(&input.city)
            .bind(&input.specification)
            .bind(input.operator)
            .bind(input.price)
            .fetch_optional(pool)
            .await
    }

    /// Delete a correspondent by ID. Dependent reportages are removed by the
    /// ON DELETE CASCADE constraint. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM correspondents WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
