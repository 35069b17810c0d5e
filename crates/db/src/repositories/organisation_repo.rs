//! Repository for the `organisations` table.

use livegene_core::pagination::{clamp_limit, clamp_offset};
use livegene_core::types::DbId;
use sqlx::PgPool;

use crate::models::organisation::{CreateOrganisation, Organisation, UpdateOrganisation};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, short_name, full_name, logo_url, country_id, created_at, updated_at";

/// Provides CRUD operations for organisations.
pub struct OrganisationRepo;

impl OrganisationRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateOrganisation,
    ) -> Result<Organisation, sqlx::Error> {
        let query = format!(
            "INSERT INTO organisations (short_name, full_name, logo_url, country_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Organisation>(&query)
            .bind(&input.short_name)
            .bind(&input.full_name)
            .bind(&input.logo_url)
            .bind(input.country_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Organisation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM organisations WHERE id = $1");
        sqlx::query_as::<_, Organisation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List organisations ordered by full name.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Organisation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM organisations ORDER BY full_name LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Organisation>(&query)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    /// Update an organisation. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOrganisation,
    ) -> Result<Option<Organisation>, sqlx::Error> {
        let query = format!(
            "UPDATE organisations SET
                short_name = COALESCE($2, short_name),
                full_name = COALESCE($3, full_name),
                logo_url = COALESCE($4, logo_url),
                country_id = COALESCE($5, country_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Organisation>(&query)
            .bind(id)
            .bind(&input.short_name)
            .bind(&input.full_name)
            .bind(&input.logo_url)
            .bind(input.country_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an organisation. Rejected while projects, partnerships or
    /// contact persons reference it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM organisations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
