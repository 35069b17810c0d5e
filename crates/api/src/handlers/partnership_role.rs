//! Handlers for the `/partnership-roles` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use livegene_core::error::CoreError;
use livegene_core::types::DbId;
use livegene_db::models::partnership_role::{
    CreatePartnershipRole, PartnershipRole, UpdatePartnershipRole,
};
use livegene_db::repositories::PartnershipRoleRepo;

use crate::error::{AppError, AppResult};
use crate::query::ProjectFilterParams;
use crate::response::{DataResponse, Labeled};
use crate::state::AppState;

/// POST /api/v1/partnership-roles
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePartnershipRole>,
) -> AppResult<(StatusCode, Json<DataResponse<Labeled<PartnershipRole>>>)> {
    let role = PartnershipRoleRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: Labeled::new(role) })))
}

/// GET /api/v1/partnership-roles
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProjectFilterParams>,
) -> AppResult<Json<DataResponse<Vec<Labeled<PartnershipRole>>>>> {
    let rows = PartnershipRoleRepo::list(
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

/// GET /api/v1/partnership-roles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Labeled<PartnershipRole>>>> {
    let role = PartnershipRoleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PartnershipRole",
            id,
        }))?;
    Ok(Json(DataResponse { data: Labeled::new(role) }))
}

/// PUT /api/v1/partnership-roles/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePartnershipRole>,
) -> AppResult<Json<DataResponse<Labeled<PartnershipRole>>>> {
    let role = PartnershipRoleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PartnershipRole",
            id,
        }))?;
    Ok(Json(DataResponse { data: Labeled::new(role) }))
}

/// DELETE /api/v1/partnership-roles/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = PartnershipRoleRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "PartnershipRole",
            id,
        }))
    }
}
