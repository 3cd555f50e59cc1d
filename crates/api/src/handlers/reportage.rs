//! Handlers for the `/reportages` resource.
//!
//! Both foreign keys are validated against their parent tables before any
//! insert or update, so a dangling reference is reported as a 404 for the
//! missing parent instead of a constraint violation from the store.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use reportage_core::error::CoreError;
use reportage_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use reportage_core::types::DbId;
use reportage_db::models::reportage::{CreateReportage, Reportage, UpdateReportage};
use reportage_db::repositories::{CorrespondentRepo, EventRepo, ReportageRepo};

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::state::AppState;

/// Ensure both referenced parent rows exist.
async fn check_references(
    pool: &reportage_db::DbPool,
    event_id: DbId,
    correspondent_id: DbId,
) -> AppResult<()> {
    if EventRepo::find_by_id(pool, event_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id: event_id,
        }));
    }
    if CorrespondentRepo::find_by_id(pool, correspondent_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Correspondent",
            id: correspondent_id,
        }));
    }
    Ok(())
}

/// POST /api/v1/reportages
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateReportage>,
) -> AppResult<(StatusCode, Json<Reportage>)> {
    check_references(&state.pool, input.event_id, input.correspondent_id).await?;
    let reportage = ReportageRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(reportage)))
}

/// GET /api/v1/reportages
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Reportage>>> {
    let offset = clamp_offset(params.skip);
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
    let reportages = ReportageRepo::list(&state.pool, offset, limit).await?;
    Ok(Json(reportages))
}

/// GET /api/v1/reportages/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Reportage>> {
    let reportage = ReportageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Reportage",
            id,
        }))?;
    Ok(Json(reportage))
}

/// PUT /api/v1/reportages/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateReportage>,
) -> AppResult<Json<Reportage>> {
    check_references(&state.pool, input.event_id, input.correspondent_id).await?;
    let reportage = ReportageRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Reportage",
            id,
        }))?;
    Ok(Json(reportage))
}

/// DELETE /api/v1/reportages/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ReportageRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Reportage",
            id,
        }))
    }
}
