//! Handlers for the `/partnership-role-types` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use livegene_core::error::CoreError;
use livegene_core::types::DbId;
use livegene_db::models::partnership::{
    CreatePartnershipRoleType, PartnershipRoleType, UpdatePartnershipRoleType,
};
use livegene_db::repositories::PartnershipRoleTypeRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::{DataResponse, Labeled};
use crate::state::AppState;

/// POST /api/v1/partnership-role-types
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePartnershipRoleType>,
) -> AppResult<(StatusCode, Json<DataResponse<Labeled<PartnershipRoleType>>>)> {
    input.validate()?;
    let role_type = PartnershipRoleTypeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: Labeled::new(role_type) })))
}

/// GET /api/v1/partnership-role-types
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Labeled<PartnershipRoleType>>>>> {
    let rows = PartnershipRoleTypeRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(DataResponse {
        data: Labeled::all(rows),
    }))
}

/// GET /api/v1/partnership-role-types/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Labeled<PartnershipRoleType>>>> {
    let role_type = PartnershipRoleTypeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PartnershipRoleType",
            id,
        }))?;
    Ok(Json(DataResponse { data: Labeled::new(role_type) }))
}

/// PUT /api/v1/partnership-role-types/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePartnershipRoleType>,
) -> AppResult<Json<DataResponse<Labeled<PartnershipRoleType>>>> {
    input.validate()?;
    let role_type = PartnershipRoleTypeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PartnershipRoleType",
            id,
        }))?;
    Ok(Json(DataResponse { data: Labeled::new(role_type) }))
}

/// DELETE /api/v1/partnership-role-types/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = PartnershipRoleTypeRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "PartnershipRoleType",
            id,
        }))
    }
}
