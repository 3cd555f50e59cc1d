//! Handlers for the `/correspondents` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use reportage_core::error::CoreError;
use reportage_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use reportage_core::types::DbId;
use reportage_db::models::correspondent::{
    Correspondent, CreateCorrespondent, UpdateCorrespondent,
};
use reportage_db::repositories::CorrespondentRepo;
use rust_decimal::Decimal;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::state::AppState;

fn validate_price(price: Decimal) -> Result<(), CoreError> {
    if price.is_sign_negative() {
        return Err(CoreError::Validation(
            "price must be non-negative".to_string(),
        ));
    }
    Ok(())
}

/// POST /api/v1/correspondents
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCorrespondent>,
) -> AppResult<(StatusCode, Json<Correspondent>)> {
    validate_price(input.price)?;
    let correspondent = CorrespondentRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(correspondent)))
}

/// GET /api/v1/correspondents
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Correspondent>>> {
    let offset = clamp_offset(params.skip);
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
    let correspondents = CorrespondentRepo::list(&state.pool, offset, limit).await?;
    Ok(Json(correspondents))
}

/// GET /api/v1/correspondents/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Correspondent>> {
    let correspondent = CorrespondentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Correspondent",
            id,
        }))?;
    Ok(Json(correspondent))
}

/// PUT /api/v1/correspondents/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCorrespondent>,
) -> AppResult<Json<Correspondent>> {
    validate_price(input.price)?;
    let correspondent = CorrespondentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Correspondent",
            id,
        }))?;
    Ok(Json(correspondent))
}

/// DELETE /api/v1/correspondents/{id}
///
/// Cascades to any reportages referencing this correspondent.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CorrespondentRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Correspondent",
            id,
        }))
    }
}
