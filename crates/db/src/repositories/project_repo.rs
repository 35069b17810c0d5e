//! Repository for the `projects` table.

use livegene_core::pagination::{clamp_limit, clamp_offset};
use livegene_core::types::DbId;
use livegene_core::validators::percent_to_smallint;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, ilri_code, full_name, short_name, principal_investigator_id, \
                       group_name, donor_id, donor_reference, donor_project_name, \
                       start_date, end_date, status, capacity_development, \
                       created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (ilri_code, full_name, short_name, principal_investigator_id,
                                   group_name, donor_id, donor_reference, donor_project_name,
                                   start_date, end_date, status, capacity_development)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.ilri_code)
            .bind(&input.full_name)
            .bind(&input.short_name)
            .bind(input.principal_investigator_id)
            .bind(&input.group_name)
            .bind(input.donor_id)
            .bind(&input.donor_reference)
            .bind(&input.donor_project_name)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(percent_to_smallint(input.status))
            .bind(percent_to_smallint(input.capacity_development))
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Batch lookup used to label rows that reference this table.
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = ANY($1)");
        sqlx::query_as::<_, Project>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// List projects ordered by ILRI code.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY ilri_code LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Project>(&query)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                ilri_code = COALESCE($2, ilri_code),
                full_name = COALESCE($3, full_name),
                short_name = COALESCE($4, short_name),
                principal_investigator_id = COALESCE($5, principal_investigator_id),
                group_name = COALESCE($6, group_name),
                donor_id = COALESCE($7, donor_id),
                donor_reference = COALESCE($8, donor_reference),
                donor_project_name = COALESCE($9, donor_project_name),
                start_date = COALESCE($10, start_date),
                end_date = COALESCE($11, end_date),
                status = COALESCE($12, status),
                capacity_development = COALESCE($13, capacity_development)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.ilri_code)
            .bind(&input.full_name)
            .bind(&input.short_name)
            .bind(input.principal_investigator_id)
            .bind(&input.group_name)
            .bind(input.donor_id)
            .bind(&input.donor_reference)
            .bind(&input.donor_project_name)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.status.map(percent_to_smallint))
            .bind(input.capacity_development.map(percent_to_smallint))
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a project. Cascades to person, country and SDG
    /// roles; rejected while expenditures, partnership roles or sampling
    /// activities reference it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
