//! Handlers for the analytical `/queries` endpoints.

use axum::extract::{Query, State};
use axum::Json;
use reportage_core::error::CoreError;
use reportage_core::pagination::{
    clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT,
};
use reportage_core::search::{
    escape_like, validate_regex_pattern, validate_substring_query, DEFAULT_SEARCH_LIMIT,
    MAX_SEARCH_LIMIT,
};
use reportage_db::models::event::Event;
use reportage_db::models::query::{
    CityStats, PriceIncreaseResult, ReportageDetails, SearchPage, SortKey, SortOrder,
};
use reportage_db::repositories::QueryRepo;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::state::AppState;

/// Default number of rows for the sorted-events endpoint.
const DEFAULT_SORT_LIMIT: i64 = 50;

// ---------------------------------------------------------------------------
// Filtered search
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CityDangerParams {
    pub city: String,
    pub danger_level: String,
    pub min_duration: Option<i32>,
}

/// GET /api/v1/queries/events_by_city_and_danger
///
/// Conjunctive filter: exact city, exact danger level, optional inclusive
/// minimum duration. An empty result is a normal response, not an error.
pub async fn events_by_city_and_danger(
    State(state): State<AppState>,
    Query(params): Query<CityDangerParams>,
) -> AppResult<Json<Vec<Event>>> {
    let events = QueryRepo::events_by_city_and_danger(
        &state.pool,
        &params.city,
        &params.danger_level,
        params.min_duration,
    )
    .await?;
    Ok(Json(events))
}

// ---------------------------------------------------------------------------
// Join view
// ---------------------------------------------------------------------------

/// GET /api/v1/queries/reportages_with_details
///
/// Paginated flattened view of reportages joined with their event and
/// correspondent.
pub async fn reportages_with_details(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<ReportageDetails>>> {
    let offset = clamp_offset(params.skip);
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
    let details = QueryRepo::reportages_with_details(&state.pool, offset, limit).await?;
    Ok(Json(details))
}

// ---------------------------------------------------------------------------
// Bulk price update
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct PriceIncreaseParams {
    /// Percentage increase in [0, 100]. Defaults to 10.
    pub percentage: Option<f64>,
    /// Only update correspondents at/above this price. No floor by default.
    pub min_price: Option<f64>,
}

/// PUT /api/v1/queries/increase_operator_prices
///
/// Applies `price = round(price * (1 + percentage/100), 2)` to every
/// operator correspondent at/above the optional floor, as one atomic
/// statement. `percentage = 0` is a valid no-op that still reports the
/// full matched count.
pub async fn increase_operator_prices(
    State(state): State<AppState>,
    Query(params): Query<PriceIncreaseParams>,
) -> AppResult<Json<PriceIncreaseResult>> {
    let percentage = params.percentage.unwrap_or(10.0);
    if !(0.0..=100.0).contains(&percentage) {
        return Err(AppError::Core(CoreError::Validation(
            "percentage must be between 0 and 100".to_string(),
        )));
    }

    let pct = Decimal::from_f64_retain(percentage).ok_or_else(|| {
        AppError::Core(CoreError::Validation(
            "percentage is not a finite number".to_string(),
        ))
    })?;
    let min_price = match params.min_price {
        Some(floor) => Some(Decimal::from_f64_retain(floor).ok_or_else(|| {
            AppError::Core(CoreError::Validation(
                "min_price is not a finite number".to_string(),
            ))
        })?),
        None => None,
    };

    let updated_count = QueryRepo::increase_operator_prices(&state.pool, pct, min_price).await?;

    tracing::info!(updated_count, percentage, "Operator prices adjusted");

    Ok(Json(PriceIncreaseResult {
        updated_count,
        percentage_increase: percentage,
        multiplier: 1.0 + percentage / 100.0,
    }))
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// GET /api/v1/queries/events_stats_by_city
///
/// Per-city count and duration aggregates over the full event set.
pub async fn events_stats_by_city(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CityStats>>> {
    let stats = QueryRepo::events_stats_by_city(&state.pool).await?;
    Ok(Json(stats))
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct SortParams {
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub limit: Option<i64>,
}

/// GET /api/v1/queries/sorted_events
///
/// Sort key is restricted to {date, duration, city} with fallback to date;
/// direction defaults to descending; the limit is hard-capped at 100.
pub async fn sorted_events(
    State(state): State<AppState>,
    Query(params): Query<SortParams>,
) -> AppResult<Json<Vec<Event>>> {
    let key = SortKey::parse(params.sort_by.as_deref().unwrap_or("date"));
    let order = SortOrder::parse(params.order.as_deref().unwrap_or("desc"));
    let limit = clamp_limit(params.limit, DEFAULT_SORT_LIMIT, MAX_LIST_LIMIT);

    let events = QueryRepo::sorted_events(&state.pool, key, order, limit).await?;
    Ok(Json(events))
}

// ---------------------------------------------------------------------------
// Metadata search
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct SubstringSearchParams {
    pub q: String,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// GET /api/v1/queries/fulltext_search_events
///
/// Case-insensitive substring search over the serialized attribute bag.
/// Queries shorter than 2 trimmed characters are rejected with a 400.
pub async fn fulltext_search_events(
    State(state): State<AppState>,
    Query(params): Query<SubstringSearchParams>,
) -> AppResult<Json<SearchPage>> {
    let trimmed = validate_substring_query(&params.q).map_err(AppError::Core)?;
    let needle = escape_like(trimmed);

    let limit = clamp_limit(params.limit, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT);
    let offset = clamp_offset(params.offset);

    let (total, items) =
        QueryRepo::search_metadata_substring(&state.pool, &needle, offset, limit).await?;

    Ok(Json(SearchPage {
        total,
        limit,
        offset,
        items,
    }))
}

#[derive(Debug, Deserialize)]
pub struct RegexSearchParams {
    pub pattern: String,
    #[serde(default)]
    pub case_sensitive: bool,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// GET /api/v1/queries/regex_search_events
///
/// Regex search over the serialized attribute bag. The pattern is compiled
/// locally first, so an invalid expression surfaces as a PATTERN_ERROR 400
/// rather than a store failure.
pub async fn regex_search_events(
    State(state): State<AppState>,
    Query(params): Query<RegexSearchParams>,
) -> AppResult<Json<SearchPage>> {
    validate_regex_pattern(&params.pattern).map_err(AppError::Core)?;

    let limit = clamp_limit(params.limit, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT);
    let offset = clamp_offset(params.offset);

    let (total, items) = QueryRepo::search_metadata_regex(
        &state.pool,
        &params.pattern,
        params.case_sensitive,
        offset,
        limit,
    )
    .await?;

    Ok(Json(SearchPage {
        total,
        limit,
        offset,
        items,
    }))
}

#[derive(Debug, Deserialize)]
pub struct JsonSearchParams {
    pub q: String,
    pub limit: Option<i64>,
}

/// GET /api/v1/queries/search_events_json
///
/// Legacy case-insensitive regex containment search; returns matching
/// events directly without a count envelope.
pub async fn search_events_json(
    State(state): State<AppState>,
    Query(params): Query<JsonSearchParams>,
) -> AppResult<Json<Vec<Event>>> {
    validate_regex_pattern(&params.q).map_err(AppError::Core)?;

    let limit = clamp_limit(params.limit, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT);
    let events = QueryRepo::search_events_json(&state.pool, &params.q, limit).await?;
    Ok(Json(events))
}
