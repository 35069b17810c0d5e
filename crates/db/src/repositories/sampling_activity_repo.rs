//! Repository for the `sampling_activities` table.

use livegene_core::pagination::{clamp_limit, clamp_offset};
use livegene_core::types::DbId;
use sqlx::PgPool;

use crate::models::sampling_activity::{
    CreateSamplingActivity, SamplingActivity, UpdateSamplingActivity,
};

const COLUMNS: &str = "id, project_id, partnership_id, description, start_date, end_date, \
                       created_at, updated_at";

/// Provides CRUD operations for sampling activities.
pub struct SamplingActivityRepo;

impl SamplingActivityRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateSamplingActivity,
    ) -> Result<SamplingActivity, sqlx::Error> {
        let query = format!(
            "INSERT INTO sampling_activities
                (project_id, partnership_id, description, start_date, end_date)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SamplingActivity>(&query)
            .bind(input.project_id)
            .bind(input.partnership_id)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SamplingActivity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sampling_activities WHERE id = $1");
        sqlx::query_as::<_, SamplingActivity>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List activities, most recently ending first, optionally restricted
    /// to one project.
    pub async fn list(
        pool: &PgPool,
        project_id: Option<DbId>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<SamplingActivity>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sampling_activities
             WHERE ($1::BIGINT IS NULL OR project_id = $1)
             ORDER BY end_date DESC, start_date DESC, id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, SamplingActivity>(&query)
            .bind(project_id)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSamplingActivity,
    ) -> Result<Option<SamplingActivity>, sqlx::Error> {
        let query = format!(
            "UPDATE sampling_activities SET
                project_id = COALESCE($2, project_id),
                partnership_id = COALESCE($3, partnership_id),
                description = COALESCE($4, description),
                start_date = COALESCE($5, start_date),
                end_date = COALESCE($6, end_date)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SamplingActivity>(&query)
            .bind(id)
            .bind(input.project_id)
            .bind(input.partnership_id)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete an activity. Rejected while documents are attached to it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sampling_activities WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
