//! Repository for the analytical `/queries` endpoints: filtered search,
//! the three-way join view, the bulk operator price update, per-city
//! aggregation, dynamic sorting, and metadata search.

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::event::Event;
use crate::models::query::{CityStats, ReportageDetails, SortKey, SortOrder};

/// Event column list shared across queries.
const EVENT_COLUMNS: &str = "id, place, city, date, duration, danger, type, extra_metadata";

/// Provides the analytical read and bulk-write operations.
pub struct QueryRepo;

impl QueryRepo {
    /// Events matching `city` and `danger` exactly, optionally constrained
    /// to `duration >= min_duration`. Predicates are conjunctive; no
    /// ordering is guaranteed beyond the store's natural order.
    pub async fn events_by_city_and_danger(
        pool: &PgPool,
        city: &str,
        danger: &str,
        min_duration: Option<i32>,
    ) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {EVENT_COLUMNS} FROM events
             WHERE city = $1 AND danger = $2
               AND ($3::integer IS NULL OR duration >= $3)"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(city)
            .bind(danger)
            .bind(min_duration)
            .fetch_all(pool)
            .await
    }

    /// Flattened inner join of reportages with their event and correspondent.
    ///
    /// A reportage whose parent rows do not resolve is excluded; with the
    /// FK constraints in place that situation cannot arise, the inner join
    /// is the residual safety net.
    pub async fn reportages_with_details(
        pool: &PgPool,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<ReportageDetails>, sqlx::Error> {
        sqlx::query_as::<_, ReportageDetails>(
            "SELECT r.id AS reportage_id, r.date AS reportage_date, r.quality,
                    e.place AS event_place, e.city AS event_city,
                    c.name AS correspondent_name, c.specification AS correspondent_spec
             FROM reportages r
             JOIN events e ON r.event_id = e.id
             JOIN correspondents c ON r.correspondent_id = c.id
             ORDER BY r.id
             OFFSET $1 LIMIT $2",
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Multiply the price of every operator correspondent at/above the
    /// optional floor by `1 + percentage/100`, rounded to 2 decimal places.
    ///
    /// A single UPDATE statement, so the whole adjustment is atomic and
    /// there is no read-modify-write window. Returns the number of rows
    /// matched; with `percentage = 0` the statement still touches (and
    /// counts) every matched row.
    pub async fn increase_operator_prices(
        pool: &PgPool,
        percentage: Decimal,
        min_price: Option<Decimal>,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE correspondents
             SET price = ROUND(price * (1 + $1::numeric / 100), 2)
             WHERE operator = TRUE
               AND ($2::numeric IS NULL OR price >= $2)",
        )
        .bind(percentage)
        .bind(min_price)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Per-city count and duration aggregates over the full event set.
    ///
    /// `AVG` is coerced to 0 when undefined; cities only appear once they
    /// have at least one event, so the per-city counts always sum to the
    /// total event count.
    pub async fn events_stats_by_city(pool: &PgPool) -> Result<Vec<CityStats>, sqlx::Error> {
        sqlx::query_as::<_, CityStats>(
            "SELECT city,
                    COUNT(id) AS total_events,
                    COALESCE(AVG(duration), 0)::double precision AS avg_duration,
                    MIN(duration) AS min_duration,
                    MAX(duration) AS max_duration
             FROM events
             GROUP BY city",
        )
        .fetch_all(pool)
        .await
    }

    /// Events ordered by a whitelisted sort key and direction.
    ///
    /// `key.column()` and `order.keyword()` are static strings, so the
    /// interpolation below never carries raw user input into the SQL text.
    pub async fn sorted_events(
        pool: &PgPool,
        key: SortKey,
        order: SortOrder,
        limit: i64,
    ) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {EVENT_COLUMNS} FROM events ORDER BY {} {} LIMIT $1",
            key.column(),
            order.keyword()
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring match against the serialized attribute
    /// bag. `needle` must already be escaped via
    /// [`reportage_core::search::escape_like`]. Returns the page plus the
    /// total match count.
    pub async fn search_metadata_substring(
        pool: &PgPool,
        needle: &str,
        offset: i64,
        limit: i64,
    ) -> Result<(i64, Vec<Event>), sqlx::Error> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM events
             WHERE extra_metadata IS NOT NULL
               AND extra_metadata::text ILIKE '%' || $1 || '%'",
        )
        .bind(needle)
        .fetch_one(pool)
        .await?;

        let query = format!(
            "SELECT {EVENT_COLUMNS} FROM events
             WHERE extra_metadata IS NOT NULL
               AND extra_metadata::text ILIKE '%' || $1 || '%'
             ORDER BY id
             OFFSET $2 LIMIT $3"
        );
        let items = sqlx::query_as::<_, Event>(&query)
            .bind(needle)
            .bind(offset)
            .bind(limit)
            .fetch_all(pool)
            .await?;

        Ok((total, items))
    }

    /// POSIX regex match against the serialized attribute bag.
    ///
    /// The pattern must already have passed
    /// [`reportage_core::search::validate_regex_pattern`]. Returns the page
    /// plus the total match count.
    pub async fn search_metadata_regex(
        pool: &PgPool,
        pattern: &str,
        case_sensitive: bool,
        offset: i64,
        limit: i64,
    ) -> Result<(i64, Vec<Event>), sqlx::Error> {
        let op = if case_sensitive { "~" } else { "~*" };

        let count_query = format!(
            "SELECT COUNT(*) FROM events
             WHERE extra_metadata IS NOT NULL
               AND extra_metadata::text {op} $1"
        );
        let total: i64 = sqlx::query_scalar(&count_query)
            .bind(pattern)
            .fetch_one(pool)
            .await?;

        let query = format!(
            "SELECT {EVENT_COLUMNS} FROM events
             WHERE extra_metadata IS NOT NULL
               AND extra_metadata::text {op} $1
             ORDER BY id
             OFFSET $2 LIMIT $3"
        );
        let items = sqlx::query_as::<_, Event>(&query)
            .bind(pattern)
            .bind(offset)
            .bind(limit)
            .fetch_all(pool)
            .await?;

        Ok((total, items))
    }

    /// Legacy case-insensitive regex containment search, kept for
    /// compatibility with the original `/queries/search_events_json` shape.
    pub async fn search_events_json(
        pool: &PgPool,
        pattern: &str,
        limit: i64,
    ) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {EVENT_COLUMNS} FROM events
             WHERE extra_metadata IS NOT NULL
               AND extra_metadata::text ~* $1
             LIMIT $2"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(pattern)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
