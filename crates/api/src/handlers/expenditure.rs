//! Handlers for the `/expenditures` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use livegene_core::error::CoreError;
use livegene_core::types::DbId;
use livegene_db::models::expenditure::{CreateExpenditure, Expenditure, UpdateExpenditure};
use livegene_db::repositories::ExpenditureRepo;

use crate::error::{AppError, AppResult};
use crate::query::ProjectFilterParams;
use crate::response::{DataResponse, Labeled};
use crate::state::AppState;

/// POST /api/v1/expenditures
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateExpenditure>,
) -> AppResult<(StatusCode, Json<DataResponse<Labeled<Expenditure>>>)> {
    input.validate()?;
    let expenditure = ExpenditureRepo::create(&state.pool, &input).await?;
    tracing::info!(expenditure_id = expenditure.id, "Expenditure created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: Labeled::new(expenditure) })))
}

/// GET /api/v1/expenditures
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProjectFilterParams>,
) -> AppResult<Json<DataResponse<Vec<Labeled<Expenditure>>>>> {
    let rows = ExpenditureRepo::list(
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

/// GET /api/v1/expenditures/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Labeled<Expenditure>>>> {
    let expenditure = ExpenditureRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Expenditure",
            id,
        }))?;
    Ok(Json(DataResponse { data: Labeled::new(expenditure) }))
}

/// PUT /api/v1/expenditures/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateExpenditure>,
) -> AppResult<Json<DataResponse<Labeled<Expenditure>>>> {
    input.validate()?;
    let expenditure = ExpenditureRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Expenditure",
            id,
        }))?;
    Ok(Json(DataResponse { data: Labeled::new(expenditure) }))
}

/// DELETE /api/v1/expenditures/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ExpenditureRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(expenditure_id = id, "Expenditure deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Expenditure",
            id,
        }))
    }
}
