//! Handlers for the model-admin registry under `/admin/models`.
//!
//! The registry tells an admin UI which columns to list, which fields to
//! edit and which of those are computed by the API.

use axum::extract::Path;
use axum::Json;
use livegene_core::admin::{find_model, registered_models, ModelAdmin};
use livegene_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;

/// GET /api/v1/admin/models
pub async fn list_models() -> Json<DataResponse<&'static [ModelAdmin]>> {
    Json(DataResponse {
        data: registered_models(),
    })
}

/// GET /api/v1/admin/models/{name}
pub async fn get_model(
    Path(name): Path<String>,
) -> AppResult<Json<DataResponse<&'static ModelAdmin>>> {
    let model = find_model(&name).ok_or_else(|| {
        AppError::Core(CoreError::NotFoundByKey {
            entity: "ModelAdmin",
            key: name.clone(),
        })
    })?;
    Ok(Json(DataResponse { data: model }))
}
