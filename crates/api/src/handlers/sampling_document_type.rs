//! Handlers for the `/sampling-document-types` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use livegene_core::error::CoreError;
use livegene_core::types::DbId;
use livegene_db::models::sampling_document::{
    CreateSamplingDocumentType, SamplingDocumentType, UpdateSamplingDocumentType,
};
use livegene_db::repositories::SamplingDocumentTypeRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::{DataResponse, Labeled};
use crate::state::AppState;

/// POST /api/v1/sampling-document-types
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSamplingDocumentType>,
) -> AppResult<(StatusCode, Json<DataResponse<Labeled<SamplingDocumentType>>>)> {
    input.validate()?;
    let doc_type = SamplingDocumentTypeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: Labeled::new(doc_type) })))
}

/// GET /api/v1/sampling-document-types
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Labeled<SamplingDocumentType>>>>> {
    let rows = SamplingDocumentTypeRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(DataResponse {
        data: Labeled::all(rows),
    }))
}

/// GET /api/v1/sampling-document-types/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Labeled<SamplingDocumentType>>>> {
    let doc_type = SamplingDocumentTypeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SamplingDocumentType",
            id,
        }))?;
    Ok(Json(DataResponse { data: Labeled::new(doc_type) }))
}

/// PUT /api/v1/sampling-document-types/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSamplingDocumentType>,
) -> AppResult<Json<DataResponse<Labeled<SamplingDocumentType>>>> {
    input.validate()?;
    let doc_type = SamplingDocumentTypeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SamplingDocumentType",
            id,
        }))?;
    Ok(Json(DataResponse { data: Labeled::new(doc_type) }))
}

/// DELETE /api/v1/sampling-document-types/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = SamplingDocumentTypeRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "SamplingDocumentType",
            id,
        }))
    }
}
