//! Route definitions for the `/reportages` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::reportage;
use crate::state::AppState;

/// Routes mounted at `/reportages`.
///
/// ```text
/// GET    /          list
/// POST   /          create
/// GET    /{id}      get_by_id
/// PUT    /{id}      update
/// DELETE /{id}      delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(reportage::list).post(reportage::create))
        .route(
            "/{id}",
            get(reportage::get_by_id)
                .put(reportage::update)
                .delete(reportage::delete),
        )
}
