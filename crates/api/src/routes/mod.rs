//! Route definitions.

pub mod correspondent;
pub mod event;
pub mod health;
pub mod queries;
pub mod reportage;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /events                    list, create
/// /events/{id}               get, update, delete
/// /correspondents            list, create
/// /correspondents/{id}       get, update, delete
/// /reportages                list, create
/// /reportages/{id}           get, update, delete
/// /queries/...               analytical endpoints
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/events", event::router())
        .nest("/correspondents", correspondent::router())
        .nest("/reportages", reportage::router())
        .nest("/queries", queries::router())
}
