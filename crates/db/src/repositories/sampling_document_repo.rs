//! Repository for the `sampling_documents` table.

use livegene_core::pagination::{clamp_limit, clamp_offset};
use livegene_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::sampling_document::{
    NewSamplingDocument, SamplingDocument, UpdateSamplingDocument,
};

const COLUMNS: &str = "id, sampling_activity_id, document_type_id, document, \
                       original_filename, content_type, file_size_bytes, sha256, \
                       created_at, updated_at";

/// Provides persistence for uploaded sampling documents. The files
/// themselves live on disk; rows only hold their relative path.
pub struct SamplingDocumentRepo;

impl SamplingDocumentRepo {
    /// Hold a transaction-scoped advisory lock on one stored file name.
    ///
    /// Uploads and deletes touching the same file serialize on this lock, so
    /// a delete never removes a file that a concurrent upload has just
    /// attached a row to.
    pub async fn lock_document(
        executor: impl PgExecutor<'_>,
        document: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))")
            .bind(document)
            .execute(executor)
            .await?;
        Ok(())
    }

    pub async fn create(
        executor: impl PgExecutor<'_>,
        input: &NewSamplingDocument,
    ) -> Result<SamplingDocument, sqlx::Error> {
        let query = format!(
            "INSERT INTO sampling_documents
                (sampling_activity_id, document_type_id, document, original_filename,
                 content_type, file_size_bytes, sha256)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SamplingDocument>(&query)
            .bind(input.sampling_activity_id)
            .bind(input.document_type_id)
            .bind(&input.document)
            .bind(&input.original_filename)
            .bind(&input.content_type)
            .bind(input.file_size_bytes)
            .bind(&input.sha256)
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SamplingDocument>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sampling_documents WHERE id = $1");
        sqlx::query_as::<_, SamplingDocument>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List documents in upload order, optionally restricted to one activity.
    pub async fn list(
        pool: &PgPool,
        sampling_activity_id: Option<DbId>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<SamplingDocument>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sampling_documents
             WHERE ($1::BIGINT IS NULL OR sampling_activity_id = $1)
             ORDER BY id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, SamplingDocument>(&query)
            .bind(sampling_activity_id)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    /// Every document attached to one activity, unpaginated.
    pub async fn list_by_activity(
        pool: &PgPool,
        sampling_activity_id: DbId,
    ) -> Result<Vec<SamplingDocument>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sampling_documents WHERE sampling_activity_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, SamplingDocument>(&query)
            .bind(sampling_activity_id)
            .fetch_all(pool)
            .await
    }

    /// Move a document to another activity or type.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSamplingDocument,
    ) -> Result<Option<SamplingDocument>, sqlx::Error> {
        let query = format!(
            "UPDATE sampling_documents SET
                sampling_activity_id = COALESCE($2, sampling_activity_id),
                document_type_id = COALESCE($3, document_type_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SamplingDocument>(&query)
            .bind(id)
            .bind(input.sampling_activity_id)
            .bind(input.document_type_id)
            .fetch_optional(pool)
            .await
    }

    /// Whether any row still points at the stored file `document`.
    pub async fn is_document_referenced(
        executor: impl PgExecutor<'_>,
        document: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM sampling_documents WHERE document = $1)",
        )
        .bind(document)
        .fetch_one(executor)
        .await
    }

    /// Delete a document row, returning it so the caller can remove the file.
    pub async fn delete(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<SamplingDocument>, sqlx::Error> {
        let query = format!("DELETE FROM sampling_documents WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, SamplingDocument>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }
}
