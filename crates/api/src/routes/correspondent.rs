//! Route definitions for the `/correspondents` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::correspondent;
use crate::state::AppState;

/// Routes mounted at `/correspondents`.
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
        .route(
            "/",
            get(correspondent::list).post(correspondent::create),
        )
        .route(
            "/{id}",
            get(correspondent::get_by_id)
                .put(correspondent::update)
                .delete(correspondent::delete),
        )
}
