//! Handlers for the `/contact-persons` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use livegene_core::error::CoreError;
use livegene_core::types::DbId;
use livegene_db::models::contact_person::{CreateContactPerson, ContactPerson, UpdateContactPerson};
use livegene_db::repositories::ContactPersonRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::{DataResponse, Labeled};
use crate::state::AppState;

/// POST /api/v1/contact-persons
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateContactPerson>,
) -> AppResult<(StatusCode, Json<DataResponse<Labeled<ContactPerson>>>)> {
    input.validate()?;
    let contact = ContactPersonRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: Labeled::new(contact) })))
}

/// GET /api/v1/contact-persons
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Labeled<ContactPerson>>>>> {
    let rows = ContactPersonRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(DataResponse {
        data: Labeled::all(rows),
    }))
}

/// GET /api/v1/contact-persons/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Labeled<ContactPerson>>>> {
    let contact = ContactPersonRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ContactPerson",
            id,
        }))?;
    Ok(Json(DataResponse { data: Labeled::new(contact) }))
}

/// PUT /api/v1/contact-persons/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateContactPerson>,
) -> AppResult<Json<DataResponse<Labeled<ContactPerson>>>> {
    input.validate()?;
    let contact = ContactPersonRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ContactPerson",
            id,
        }))?;
    Ok(Json(DataResponse { data: Labeled::new(contact) }))
}

/// DELETE /api/v1/contact-persons/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ContactPersonRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ContactPerson",
            id,
        }))
    }
}
