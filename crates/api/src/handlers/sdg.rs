//! Handlers for the `/sdgs` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use livegene_core::admin::render_logo;
use livegene_core::error::CoreError;
use livegene_core::types::DbId;
use livegene_db::models::sdg::{CreateSdg, Sdg, UpdateSdg};
use livegene_db::repositories::SdgRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::{DataResponse, Labeled, LogoDetail};
use crate::state::AppState;

fn detail(sdg: Sdg) -> LogoDetail<Sdg> {
    let logo = render_logo(Some(&sdg.logo_url));
    LogoDetail {
        row: Labeled::new(sdg),
        logo,
    }
}

/// POST /api/v1/sdgs
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSdg>,
) -> AppResult<(StatusCode, Json<DataResponse<LogoDetail<Sdg>>>)> {
    input.validate()?;
    let sdg = SdgRepo::create(&state.pool, &input).await?;
    tracing::info!(sdg_id = sdg.id, "SDG created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: detail(sdg) })))
}

/// GET /api/v1/sdgs
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Labeled<Sdg>>>>> {
    let rows = SdgRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(DataResponse {
        data: Labeled::all(rows),
    }))
}

/// GET /api/v1/sdgs/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<LogoDetail<Sdg>>>> {
    let sdg = SdgRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Sdg",
            id,
        }))?;
    Ok(Json(DataResponse { data: detail(sdg) }))
}

/// PUT /api/v1/sdgs/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSdg>,
) -> AppResult<Json<DataResponse<LogoDetail<Sdg>>>> {
    input.validate()?;
    let sdg = SdgRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Sdg",
            id,
        }))?;
    Ok(Json(DataResponse { data: detail(sdg) }))
}

/// DELETE /api/v1/sdgs/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = SdgRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(sdg_id = id, "SDG deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Sdg",
            id,
        }))
    }
}
