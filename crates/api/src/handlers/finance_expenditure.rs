//! Handlers for the `/finance/expenditures` resource.
//!
//! Lines reported by the finance system, keyed by ILRI code and report date.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use livegene_core::error::CoreError;
use livegene_core::types::DbId;
use livegene_db::models::finance_expenditure::{
    CreateFinanceExpenditure, FinanceExpenditure, UpdateFinanceExpenditure,
};
use livegene_db::repositories::FinanceExpenditureRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::{DataResponse, Labeled};
use crate::state::AppState;

/// POST /api/v1/finance/expenditures
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateFinanceExpenditure>,
) -> AppResult<(StatusCode, Json<DataResponse<Labeled<FinanceExpenditure>>>)> {
    input.validate()?;
    let line = FinanceExpenditureRepo::create(&state.pool, &input).await?;
    tracing::info!(line_id = line.id, "Finance expenditure created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: Labeled::new(line) })))
}

/// GET /api/v1/finance/expenditures
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Labeled<FinanceExpenditure>>>>> {
    let rows = FinanceExpenditureRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(DataResponse {
        data: Labeled::all(rows),
    }))
}

/// GET /api/v1/finance/expenditures/by-ilri-code/{ilri_code}
///
/// Every line reported for the code, oldest report first. Unknown codes give
/// an empty list because finance data is not tied to a project row.
pub async fn list_by_ilri_code(
    State(state): State<AppState>,
    Path(ilri_code): Path<String>,
) -> AppResult<Json<DataResponse<Vec<Labeled<FinanceExpenditure>>>>> {
    let rows = FinanceExpenditureRepo::list_by_ilri_code(&state.pool, &ilri_code).await?;
    Ok(Json(DataResponse {
        data: Labeled::all(rows),
    }))
}

/// GET /api/v1/finance/expenditures/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Labeled<FinanceExpenditure>>>> {
    let line = FinanceExpenditureRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FinanceExpenditure",
            id,
        }))?;
    Ok(Json(DataResponse { data: Labeled::new(line) }))
}

/// PUT /api/v1/finance/expenditures/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFinanceExpenditure>,
) -> AppResult<Json<DataResponse<Labeled<FinanceExpenditure>>>> {
    input.validate()?;
    let line = FinanceExpenditureRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FinanceExpenditure",
            id,
        }))?;
    Ok(Json(DataResponse { data: Labeled::new(line) }))
}

/// DELETE /api/v1/finance/expenditures/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = FinanceExpenditureRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "FinanceExpenditure",
            id,
        }))
    }
}
