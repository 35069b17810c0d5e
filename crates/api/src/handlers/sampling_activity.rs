//! Handlers for the `/sampling-activities` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use livegene_core::error::CoreError;
use livegene_core::types::DbId;
use livegene_db::models::sampling_activity::{
    CreateSamplingActivity, SamplingActivity, UpdateSamplingActivity,
};
use livegene_db::models::sampling_document::SamplingDocument;
use livegene_db::repositories::{SamplingActivityRepo, SamplingDocumentRepo};

use crate::error::{AppError, AppResult};
use crate::query::ProjectFilterParams;
use crate::response::{DataResponse, Labeled};
use crate::state::AppState;

/// POST /api/v1/sampling-activities
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSamplingActivity>,
) -> AppResult<(StatusCode, Json<DataResponse<Labeled<SamplingActivity>>>)> {
    input.validate()?;
    let activity = SamplingActivityRepo::create(&state.pool, &input).await?;
    tracing::info!(activity_id = activity.id, "Sampling activity created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: Labeled::new(activity) })))
}

/// GET /api/v1/sampling-activities
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProjectFilterParams>,
) -> AppResult<Json<DataResponse<Vec<Labeled<SamplingActivity>>>>> {
    let rows = SamplingActivityRepo::list(
        &state.pool,
        params.project_id,
        params.limit,
        params.offset,
    )
    .await?;
    Ok(Json(DataResponse {
        data: Labeled::all(rows),
    }))
}

/// GET /api/v1/sampling-activities/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Labeled<SamplingActivity>>>> {
    let activity = SamplingActivityRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SamplingActivity",
            id,
        }))?;
    Ok(Json(DataResponse { data: Labeled::new(activity) }))
}

/// GET /api/v1/sampling-activities/{id}/documents
pub async fn documents(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Labeled<SamplingDocument>>>>> {
    SamplingActivityRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SamplingActivity",
            id,
        }))?;
    let rows = SamplingDocumentRepo::list_by_activity(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: Labeled::all(rows),
    }))
}

/// PUT /api/v1/sampling-activities/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSamplingActivity>,
) -> AppResult<Json<DataResponse<Labeled<SamplingActivity>>>> {
    input.validate()?;
    let activity = SamplingActivityRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SamplingActivity",
            id,
        }))?;
    Ok(Json(DataResponse { data: Labeled::new(activity) }))
}

/// DELETE /api/v1/sampling-activities/{id}
///
/// Returns 409 while documents are attached to the activity.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = SamplingActivityRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(activity_id = id, "Sampling activity deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "SamplingActivity",
            id,
        }))
    }
}
