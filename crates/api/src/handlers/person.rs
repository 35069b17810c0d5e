//! Handlers for the `/people` resource.
//!
//! Usernames and emails must be lower case; mixed-case input is rejected
//! rather than folded.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use livegene_core::error::CoreError;
use livegene_core::types::DbId;
use livegene_db::models::person::{CreatePerson, Person, UpdatePerson};
use livegene_db::repositories::PersonRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::{DataResponse, Labeled};
use crate::state::AppState;

/// POST /api/v1/people
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePerson>,
) -> AppResult<(StatusCode, Json<DataResponse<Labeled<Person>>>)> {
    input.validate()?;
    let person = PersonRepo::create(&state.pool, &input).await?;
    tracing::info!(person_id = person.id, username = %person.username, "Person created");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: Labeled::new(person),
        }),
    ))
}

/// GET /api/v1/people
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Labeled<Person>>>>> {
    let people = PersonRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(DataResponse {
        data: Labeled::all(people),
    }))
}

/// GET /api/v1/people/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Labeled<Person>>>> {
    let person = PersonRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Person",
            id,
        }))?;
    Ok(Json(DataResponse {
        data: Labeled::new(person),
    }))
}

/// GET /api/v1/people/by-username/{username}
pub async fn get_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<DataResponse<Labeled<Person>>>> {
    let person = PersonRepo::find_by_username(&state.pool, &username)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "Person",
                key: username.clone(),
            })
        })?;
    Ok(Json(DataResponse {
        data: Labeled::new(person),
    }))
}

/// PUT /api/v1/people/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePerson>,
) -> AppResult<Json<DataResponse<Labeled<Person>>>> {
    input.validate()?;
    let person = PersonRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Person",
            id,
        }))?;
    Ok(Json(DataResponse {
        data: Labeled::new(person),
    }))
}

/// DELETE /api/v1/people/{id}
///
/// Removes the person's project roles; returns 409 while the person is a
/// principal investigator or partnership contact.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = PersonRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(person_id = id, "Person deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Person",
            id,
        }))
    }
}
