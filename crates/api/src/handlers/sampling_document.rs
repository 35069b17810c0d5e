//! Handlers for the `/sampling-documents` resource.
//!
//! Documents are created by multipart upload. The file is written under the
//! configured storage directory and the row keeps its relative path, size and
//! SHA-256 digest.

use std::path::Path as FsPath;

use axum::extract::{Multipart, Path, Query, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use livegene_core::documents::{
    content_type_for, sanitize_filename, sha256_hex, stored_file_name, validate_upload_size,
};
use livegene_core::error::CoreError;
use livegene_core::types::DbId;
use livegene_db::models::sampling_document::{
    NewSamplingDocument, SamplingDocument, UpdateSamplingDocument,
};
use livegene_db::repositories::SamplingDocumentRepo;

use crate::error::{AppError, AppResult};
use crate::query::ActivityFilterParams;
use crate::response::{DataResponse, Labeled};
use crate::state::AppState;

/// Uploaded file as read from the multipart body.
struct UploadedFile {
    filename: String,
    content_type: Option<String>,
    data: Vec<u8>,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "SamplingDocument",
        id,
    })
}

fn parse_id_field(name: &str, text: &str) -> AppResult<DbId> {
    text.trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("'{name}' must be an integer id")))
}

/// POST /api/v1/sampling-documents
///
/// Accepts a multipart form with a required `file` field and the
/// `sampling_activity_id` and `document_type_id` fields.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<Labeled<SamplingDocument>>>)> {
    let mut file: Option<UploadedFile> = None;
    let mut sampling_activity_id: Option<DbId> = None;
    let mut document_type_id: Option<DbId> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let content_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file = Some(UploadedFile {
                    filename,
                    content_type,
                    data: data.to_vec(),
                });
            }
            "sampling_activity_id" | "document_type_id" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                let id = parse_id_field(&name, &text)?;
                if name == "sampling_activity_id" {
                    sampling_activity_id = Some(id);
                } else {
                    document_type_id = Some(id);
                }
            }
            _ => {}
        }
    }

    let file = file.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;
    let sampling_activity_id = sampling_activity_id.ok_or_else(|| {
        AppError::BadRequest("Missing required 'sampling_activity_id' field".into())
    })?;
    let document_type_id = document_type_id
        .ok_or_else(|| AppError::BadRequest("Missing required 'document_type_id' field".into()))?;

    validate_upload_size(file.data.len(), state.config.max_upload_bytes)?;
    let safe_name = sanitize_filename(&file.filename).ok_or_else(|| {
        CoreError::Validation(format!("filename '{}' is not usable", file.filename))
    })?;

    let digest = sha256_hex(&file.data);
    let stored_name = stored_file_name(sampling_activity_id, &digest, &safe_name);
    let storage_dir = &state.config.document_storage_dir;
    let file_path = storage_dir.join(&stored_name);

    tokio::fs::create_dir_all(storage_dir)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let content_type = file
        .content_type
        .filter(|ct| !ct.is_empty() && ct != "application/octet-stream")
        .unwrap_or_else(|| content_type_for(&safe_name).to_string());

    let input = NewSamplingDocument {
        sampling_activity_id,
        document_type_id,
        document: stored_name,
        original_filename: file.filename,
        content_type,
        file_size_bytes: file.data.len() as i64,
        sha256: digest,
    };

    // The lock is held until commit, so a concurrent delete of the last row
    // sharing this file cannot remove it between the check and the insert.
    let mut tx = state.pool.begin().await?;
    SamplingDocumentRepo::lock_document(&mut *tx, &input.document).await?;

    let existed = tokio::fs::try_exists(&file_path).await.unwrap_or(false);
    if !existed {
        tokio::fs::write(&file_path, &file.data)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;
    }

    let created = match SamplingDocumentRepo::create(&mut *tx, &input).await {
        Ok(document) => tx.commit().await.map(|()| document),
        Err(err) => Err(err),
    };
    let document = match created {
        Ok(document) => document,
        Err(err) => {
            if !existed {
                remove_stored_file(&file_path).await;
            }
            return Err(err.into());
        }
    };

    tracing::info!(
        document_id = document.id,
        sampling_activity_id,
        size_bytes = document.file_size_bytes,
        "Sampling document uploaded"
    );
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: Labeled::new(document),
        }),
    ))
}

/// GET /api/v1/sampling-documents
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ActivityFilterParams>,
) -> AppResult<Json<DataResponse<Vec<Labeled<SamplingDocument>>>>> {
    let documents = SamplingDocumentRepo::list(
        &state.pool,
        params.sampling_activity_id,
        params.limit,
        params.offset,
    )
    .await?;
    Ok(Json(DataResponse {
        data: Labeled::all(documents),
    }))
}

/// GET /api/v1/sampling-documents/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Labeled<SamplingDocument>>>> {
    let document = SamplingDocumentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse {
        data: Labeled::new(document),
    }))
}

/// GET /api/v1/sampling-documents/{id}/file
///
/// Stream the stored file back as an attachment.
pub async fn download(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let document = SamplingDocumentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let file_path = state.config.document_storage_dir.join(&document.document);
    let data = tokio::fs::read(&file_path).await.map_err(|e| {
        tracing::error!(
            document_id = id,
            path = %file_path.display(),
            error = %e,
            "Stored document file is unreadable"
        );
        AppError::InternalError(format!("document file for id {id} is unavailable"))
    })?;

    let download_name =
        sanitize_filename(&document.original_filename).unwrap_or_else(|| "document".to_string());

    Ok((
        StatusCode::OK,
        [
            (CONTENT_TYPE, document.content_type),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{download_name}\""),
            ),
        ],
        data,
    ))
}

/// PUT /api/v1/sampling-documents/{id}
///
/// Re-link a document to another activity or type. The file is unchanged.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSamplingDocument>,
) -> AppResult<Json<DataResponse<Labeled<SamplingDocument>>>> {
    let document = SamplingDocumentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse {
        data: Labeled::new(document),
    }))
}

/// DELETE /api/v1/sampling-documents/{id}
///
/// Deletes the row, then the stored file unless another row shares it.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;
    let document = SamplingDocumentRepo::delete(&mut *tx, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    SamplingDocumentRepo::lock_document(&mut *tx, &document.document).await?;
    if !SamplingDocumentRepo::is_document_referenced(&mut *tx, &document.document).await? {
        let file_path = state.config.document_storage_dir.join(&document.document);
        remove_stored_file(&file_path).await;
    }
    tx.commit().await?;

    tracing::info!(document_id = id, "Sampling document deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Best-effort removal; a missing file is not an error.
async fn remove_stored_file(path: &FsPath) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!(path = %path.display(), error = %e, "Failed to remove stored document");
        }
    }
}
