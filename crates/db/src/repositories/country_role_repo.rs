//! Repository for the `country_roles` table.

use livegene_core::pagination::{clamp_limit, clamp_offset};
use livegene_core::types::DbId;
use livegene_core::validators::percent_to_smallint;
use sqlx::PgPool;

use crate::models::country_role::{CreateCountryRole, CountryRole, UpdateCountryRole};

const COLUMNS: &str = "id, project_id, country_id, percent, created_at, updated_at";

/// Provides CRUD operations and per-project totals for country roles.
pub struct CountryRoleRepo;

impl CountryRoleRepo {
    /// Insert a country role. A second role for the same (project, country)
    /// violates `uq_country_roles_project_country`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCountryRole,
    ) -> Result<CountryRole, sqlx::Error> {
        let query = format!(
            "INSERT INTO country_roles (project_id, country_id, percent)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CountryRole>(&query)
            .bind(input.project_id)
            .bind(input.country_id)
            .bind(percent_to_smallint(input.percent))
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CountryRole>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM country_roles WHERE id = $1");
        sqlx::query_as::<_, CountryRole>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List roles in insertion order, optionally restricted to one project.
    pub async fn list(
        pool: &PgPool,
        project_id: Option<DbId>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<CountryRole>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM country_roles
             WHERE ($1::BIGINT IS NULL OR project_id = $1)
             ORDER BY id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, CountryRole>(&query)
            .bind(project_id)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    /// Every role of one project, unpaginated.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<CountryRole>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM country_roles WHERE project_id = $1 ORDER BY id");
        sqlx::query_as::<_, CountryRole>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Sum of the role percentages for a project (0 when it has none).
    pub async fn total_percent_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(SUM(percent), 0)::BIGINT FROM country_roles WHERE project_id = $1",
        )
        .bind(project_id)
        .fetch_one(pool)
        .await
    }

    /// Update a role. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCountryRole,
    ) -> Result<Option<CountryRole>, sqlx::Error> {
        let query = format!(
            "UPDATE country_roles SET
                project_id = COALESCE($2, project_id),
                country_id = COALESCE($3, country_id),
                percent = COALESCE($4, percent)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CountryRole>(&query)
            .bind(id)
            .bind(input.project_id)
            .bind(input.country_id)
            .bind(input.percent.map(percent_to_smallint))
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM country_roles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
