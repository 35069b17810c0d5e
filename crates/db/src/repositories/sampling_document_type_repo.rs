//! Repository for the `sampling_document_types` table.

use livegene_core::pagination::{clamp_limit, clamp_offset};
use livegene_core::types::DbId;
use sqlx::PgPool;

use crate::models::sampling_document::{
    CreateSamplingDocumentType, SamplingDocumentType, UpdateSamplingDocumentType,
};

const COLUMNS: &str = "id, short_name, long_name, created_at, updated_at";

/// Provides CRUD operations for sampling document types.
pub struct SamplingDocumentTypeRepo;

impl SamplingDocumentTypeRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateSamplingDocumentType,
    ) -> Result<SamplingDocumentType, sqlx::Error> {
        let query = format!(
            "INSERT INTO sampling_document_types (short_name, long_name)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SamplingDocumentType>(&query)
            .bind(&input.short_name)
            .bind(&input.long_name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SamplingDocumentType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sampling_document_types WHERE id = $1");
        sqlx::query_as::<_, SamplingDocumentType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<SamplingDocumentType>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sampling_document_types
             ORDER BY long_name, id
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, SamplingDocumentType>(&query)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSamplingDocumentType,
    ) -> Result<Option<SamplingDocumentType>, sqlx::Error> {
        let query = format!(
            "UPDATE sampling_document_types SET
                short_name = COALESCE($2, short_name),
                long_name = COALESCE($3, long_name)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SamplingDocumentType>(&query)
            .bind(id)
            .bind(&input.short_name)
            .bind(&input.long_name)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sampling_document_types WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
