//! Handlers for the `/person-roles` resource.
//!
//! Details carry `total_percentage`: the sum of `percent` over every person
//! role of the same project. The total is reported, never enforced.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use livegene_core::error::CoreError;
use livegene_core::types::DbId;
use livegene_db::models::person_role::{CreatePersonRole, PersonRole, UpdatePersonRole};
use livegene_db::repositories::{PersonRepo, PersonRoleRepo};

use super::role_label::{label_map, project_labels, role_label, unique_ids};
use crate::error::{AppError, AppResult};
use crate::query::ProjectFilterParams;
use crate::response::{DataResponse, Labeled, RoleDetail};
use crate::state::AppState;

/// Label roles with the names of their project and person.
async fn label_roles(
    state: &AppState,
    roles: Vec<PersonRole>,
) -> AppResult<Vec<Labeled<PersonRole>>> {
    let projects = project_labels(&state.pool, roles.iter().map(|role| role.project_id)).await?;
    let ids = unique_ids(roles.iter().map(|role| role.person_id));
    let people = label_map(PersonRepo::find_by_ids(&state.pool, &ids).await?, |row| row.id);
    Ok(roles
        .into_iter()
        .map(|role| {
            let label = role_label(&projects, &people, role.project_id, role.person_id, &role);
            Labeled::with_label(role, label)
        })
        .collect())
}

/// Attach the label and the project's current percentage total to a role.
async fn detail(state: &AppState, role: PersonRole) -> AppResult<RoleDetail<PersonRole>> {
    let total_percentage =
        PersonRoleRepo::total_percent_for_project(&state.pool, role.project_id).await?;
    let mut labeled = label_roles(state, vec![role]).await?;
    let role = labeled
        .pop()
        .ok_or_else(|| AppError::InternalError("role label lookup lost a row".into()))?;
    Ok(RoleDetail {
        role,
        total_percentage,
    })
}

/// POST /api/v1/person-roles
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePersonRole>,
) -> AppResult<(StatusCode, Json<DataResponse<RoleDetail<PersonRole>>>)> {
    input.validate()?;
    let role = PersonRoleRepo::create(&state.pool, &input).await?;
    tracing::info!(role_id = role.id, "Person role created");
    let data = detail(&state, role).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data })))
}

/// GET /api/v1/person-roles
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProjectFilterParams>,
) -> AppResult<Json<DataResponse<Vec<Labeled<PersonRole>>>>> {
    let rows = PersonRoleRepo::list(
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

/// GET /api/v1/person-roles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<RoleDetail<PersonRole>>>> {
    let role = PersonRoleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PersonRole",
            id,
        }))?;
    let data = detail(&state, role).await?;
    Ok(Json(DataResponse { data }))
}

/// PUT /api/v1/person-roles/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePersonRole>,
) -> AppResult<Json<DataResponse<RoleDetail<PersonRole>>>> {
    input.validate()?;
    let role = PersonRoleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PersonRole",
            id,
        }))?;
    let data = detail(&state, role).await?;
    Ok(Json(DataResponse { data }))
}

/// DELETE /api/v1/person-roles/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = PersonRoleRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(role_id = id, "Person role deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "PersonRole",
            id,
        }))
    }
}
