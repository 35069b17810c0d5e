//! Handlers for the `/countries` resource.
//!
//! Codes are accepted in any case and stored upper-cased; the label is the
//! country's English short name.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use livegene_core::countries::normalize_code;
use livegene_core::error::CoreError;
use livegene_core::types::DbId;
use livegene_db::models::country::{Country, CreateCountry, UpdateCountry};
use livegene_db::repositories::CountryRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::{DataResponse, Labeled};
use crate::state::AppState;

/// POST /api/v1/countries
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCountry>,
) -> AppResult<(StatusCode, Json<DataResponse<Labeled<Country>>>)> {
    let code = input.normalized_code()?;
    let country = CountryRepo::create(&state.pool, &code).await?;
    tracing::info!(country_id = country.id, code = %country.code, "Country created");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: Labeled::new(country),
        }),
    ))
}

/// GET /api/v1/countries
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Labeled<Country>>>>> {
    let countries = CountryRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(DataResponse {
        data: Labeled::all(countries),
    }))
}

/// GET /api/v1/countries/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Labeled<Country>>>> {
    let country = CountryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Country",
            id,
        }))?;
    Ok(Json(DataResponse {
        data: Labeled::new(country),
    }))
}

/// GET /api/v1/countries/by-code/{code}
pub async fn get_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<DataResponse<Labeled<Country>>>> {
    let normalized = normalize_code(&code)?;
    let country = CountryRepo::find_by_code(&state.pool, &normalized)
        .await?
        .ok_or(AppError::Core(CoreError::NotFoundByKey {
            entity: "Country",
            key: normalized,
        }))?;
    Ok(Json(DataResponse {
        data: Labeled::new(country),
    }))
}

/// PUT /api/v1/countries/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCountry>,
) -> AppResult<Json<DataResponse<Labeled<Country>>>> {
    let code = input.normalized_code()?;
    let country = CountryRepo::update(&state.pool, id, code.as_deref())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Country",
            id,
        }))?;
    Ok(Json(DataResponse {
        data: Labeled::new(country),
    }))
}

/// DELETE /api/v1/countries/{id}
///
/// Removes the country's project roles; returns 409 while organisations
/// reference it.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = CountryRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Country",
            id,
        }))
    }
}
