//! Handlers for the `/projects` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use livegene_core::allocation::{AllocationSummary, ProjectAllocations};
use livegene_core::error::CoreError;
use livegene_core::types::DbId;
use livegene_db::models::project::{CreateProject, Project, UpdateProject};
use livegene_db::repositories::{CountryRoleRepo, PersonRoleRepo, ProjectRepo, SdgRoleRepo};

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::{DataResponse, Labeled};
use crate::state::AppState;

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<DataResponse<Labeled<Project>>>)> {
    input.validate()?;
    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = project.id, "Project created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: Labeled::new(project) })))
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Labeled<Project>>>>> {
    let rows = ProjectRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(DataResponse {
        data: Labeled::all(rows),
    }))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Labeled<Project>>>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(DataResponse { data: Labeled::new(project) }))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<DataResponse<Labeled<Project>>>> {
    input.validate()?;
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(DataResponse { data: Labeled::new(project) }))
}

/// DELETE /api/v1/projects/{id}
///
/// Role rows go with the project; expenditures, sampling activities and
/// partnership roles block the delete (409).
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(project_id = id, "Project deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}

/// GET /api/v1/projects/{id}/allocations
///
/// How the project's person, country and SDG percentages add up.
pub async fn allocations(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ProjectAllocations>>> {
    ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    let people: Vec<i16> = PersonRoleRepo::list_by_project(&state.pool, id)
        .await?
        .iter()
        .map(|role| role.percent)
        .collect();
    let countries: Vec<i16> = CountryRoleRepo::list_by_project(&state.pool, id)
        .await?
        .iter()
        .map(|role| role.percent)
        .collect();
    let sdgs: Vec<i16> = SdgRoleRepo::list_by_project(&state.pool, id)
        .await?
        .iter()
        .map(|role| role.percent)
        .collect();

    Ok(Json(DataResponse {
        data: ProjectAllocations {
            project_id: id,
            people: AllocationSummary::from_percents(&people),
            countries: AllocationSummary::from_percents(&countries),
            sdgs: AllocationSummary::from_percents(&sdgs),
        },
    }))
}
