//! Route definitions for the analytical `/queries` endpoints.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::queries;
use crate::state::AppState;

/// Routes mounted at `/queries`.
///
/// ```text
/// GET /events_by_city_and_danger    filtered search
/// GET /reportages_with_details      three-way join view
/// PUT /increase_operator_prices     bulk price update
/// GET /events_stats_by_city         per-city aggregates
/// GET /sorted_events                dynamic sorting
/// GET /fulltext_search_events       substring metadata search
/// GET /regex_search_events          regex metadata search
/// GET /search_events_json           legacy regex metadata search
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/events_by_city_and_danger",
            get(queries::events_by_city_and_danger),
        )
        .route(
            "/reportages_with_details",
            get(queries::reportages_with_details),
        )
        .route(
            "/increase_operator_prices",
            put(queries::increase_operator_prices),
        )
        .route("/events_stats_by_city", get(queries::events_stats_by_city))
        .route("/sorted_events", get(queries::sorted_events))
        .route(
            "/fulltext_search_events",
            get(queries::fulltext_search_events),
        )
        .route("/regex_search_events", get(queries::regex_search_events))
        .route("/search_events_json", get(queries::search_events_json))
}
