//! Handlers for the `/organisations` resource.
//!
//! Details carry the read-only `logo` preview rendered from `logo_url`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use livegene_core::admin::render_logo;
use livegene_core::error::CoreError;
use livegene_core::types::DbId;
use livegene_db::models::organisation::{CreateOrganisation, Organisation, UpdateOrganisation};
use livegene_db::repositories::OrganisationRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::{DataResponse, Labeled, LogoDetail};
use crate::state::AppState;

fn detail(organisation: Organisation) -> LogoDetail<Organisation> {
    let logo = render_logo(organisation.logo_url.as_deref());
    LogoDetail {
        row: Labeled::new(organisation),
        logo,
    }
}

/// POST /api/v1/organisations
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateOrganisation>,
) -> AppResult<(StatusCode, Json<DataResponse<LogoDetail<Organisation>>>)> {
    input.validate()?;
    let organisation = OrganisationRepo::create(&state.pool, &input).await?;
    tracing::info!(organisation_id = organisation.id, "Organisation created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: detail(organisation) })))
}

/// GET /api/v1/organisations
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Labeled<Organisation>>>>> {
    let rows = OrganisationRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(DataResponse {
        data: Labeled::all(rows),
    }))
}

/// GET /api/v1/organisations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<LogoDetail<Organisation>>>> {
    let organisation = OrganisationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Organisation",
            id,
        }))?;
    Ok(Json(DataResponse { data: detail(organisation) }))
}

/// PUT /api/v1/organisations/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOrganisation>,
) -> AppResult<Json<DataResponse<LogoDetail<Organisation>>>> {
    input.validate()?;
    let organisation = OrganisationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Organisation",
            id,
        }))?;
    Ok(Json(DataResponse { data: detail(organisation) }))
}

/// DELETE /api/v1/organisations/{id}
///
/// Returns 409 while projects, partnerships or contact persons reference it.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = OrganisationRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(organisation_id = id, "Organisation deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Organisation",
            id,
        }))
    }
}
