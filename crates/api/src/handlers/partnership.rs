//! Handlers for the `/partnerships` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use livegene_core::error::CoreError;
use livegene_core::types::DbId;
use livegene_db::models::partnership::{CreatePartnership, Partnership, UpdatePartnership};
use livegene_db::repositories::PartnershipRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::{DataResponse, Labeled};
use crate::state::AppState;

/// POST /api/v1/partnerships
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePartnership>,
) -> AppResult<(StatusCode, Json<DataResponse<Labeled<Partnership>>>)> {
    let partnership = PartnershipRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: Labeled::new(partnership) })))
}

/// GET /api/v1/partnerships
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Labeled<Partnership>>>>> {
    let rows = PartnershipRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(DataResponse {
        data: Labeled::all(rows),
    }))
}

/// GET /api/v1/partnerships/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Labeled<Partnership>>>> {
    let partnership = PartnershipRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Partnership",
            id,
        }))?;
    Ok(Json(DataResponse { data: Labeled::new(partnership) }))
}

/// PUT /api/v1/partnerships/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePartnership>,
) -> AppResult<Json<DataResponse<Labeled<Partnership>>>> {
    let partnership = PartnershipRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Partnership",
            id,
        }))?;
    Ok(Json(DataResponse { data: Labeled::new(partnership) }))
}

/// DELETE /api/v1/partnerships/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = PartnershipRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(partnership_id = id, "Partnership deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Partnership",
            id,
        }))
    }
}
