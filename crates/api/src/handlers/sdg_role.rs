//! Handlers for the `/sdg-roles` resource.
//!
//! Details carry `total_percentage` for the role's project.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use livegene_core::error::CoreError;
use livegene_core::types::DbId;
use livegene_db::models::sdg_role::{CreateSdgRole, SdgRole, UpdateSdgRole};
use livegene_db::repositories::{SdgRepo, SdgRoleRepo};

use super::role_label::{label_map, project_labels, role_label, unique_ids};
use crate::error::{AppError, AppResult};
use crate::query::ProjectFilterParams;
use crate::response::{DataResponse, Labeled, RoleDetail};
use crate::state::AppState;

/// Label roles with the names of their project and SDG.
async fn label_roles(
    state: &AppState,
    roles: Vec<SdgRole>,
) -> AppResult<Vec<Labeled<SdgRole>>> {
    let projects = project_labels(&state.pool, roles.iter().map(|role| role.project_id)).await?;
    let ids = unique_ids(roles.iter().map(|role| role.sdg_id));
    let sdgs = label_map(SdgRepo::find_by_ids(&state.pool, &ids).await?, |row| row.id);
    Ok(roles
        .into_iter()
        .map(|role| {
            let label = role_label(&projects, &sdgs, role.project_id, role.sdg_id, &role);
            Labeled::with_label(role, label)
        })
        .collect())
}

/// Attach the label and the project's current percentage total to a role.
async fn detail(state: &AppState, role: SdgRole) -> AppResult<RoleDetail<SdgRole>> {
    let total_percentage =
        SdgRoleRepo::total_percent_for_project(&state.pool, role.project_id).await?;
    let mut labeled = label_roles(state, vec![role]).await?;
    let role = labeled
        .pop()
        .ok_or_else(|| AppError::InternalError("role label lookup lost a row".into()))?;
    Ok(RoleDetail {
        role,
        total_percentage,
    })
}

/// POST /api/v1/sdg-roles
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSdgRole>,
) -> AppResult<(StatusCode, Json<DataResponse<RoleDetail<SdgRole>>>)> {
    input.validate()?;
    let role = SdgRoleRepo::create(&state.pool, &input).await?;
    tracing::info!(role_id = role.id, "SDG role created");
    let data = detail(&state, role).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data })))
}

/// GET /api/v1/sdg-roles
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProjectFilterParams>,
) -> AppResult<Json<DataResponse<Vec<Labeled<SdgRole>>>>> {
    let rows = SdgRoleRepo::list(
        &state.pool,
        params.project_id,
        params.limit,
        params.offset,
    )
    .await?;
    Ok(Json(DataResponse {
        data: label_roles(&state, rows).await?,
    }))
}

/// GET /api/v1/sdg-roles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<RoleDetail<SdgRole>>>> {
    let role = SdgRoleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SdgRole",
            id,
        }))?;
    let data = detail(&state, role).await?;
    Ok(Json(DataResponse { data }))
}

/// PUT /api/v1/sdg-roles/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSdgRole>,
) -> AppResult<Json<DataResponse<RoleDetail<SdgRole>>>> {
    input.validate()?;
    let role = SdgRoleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SdgRole",
            id,
        }))?;
    let data = detail(&state, role).await?;
    Ok(Json(DataResponse { data }))
}

/// DELETE /api/v1/sdg-roles/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = SdgRoleRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "SdgRole",
            id,
        }))
    }
}
