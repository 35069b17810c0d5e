//! Repository for the `sdgs` table.

use livegene_core::pagination::{clamp_limit, clamp_offset};
use livegene_core::types::DbId;
use sqlx::PgPool;

use crate::models::sdg::{CreateSdg, Sdg, UpdateSdg};

const COLUMNS: &str = "id, headline, full_name, color, link, logo_url, created_at, updated_at";

/// Provides CRUD operations for Sustainable Development Goals.
pub struct SdgRepo;

impl SdgRepo {
    /// Insert an SDG. `link` and `logo_url` are each unique across goals.
    pub async fn create(pool: &PgPool, input: &CreateSdg) -> Result<Sdg, sqlx::Error> {
        let query = format!(
            "INSERT INTO sdgs (headline, full_name, color, link, logo_url)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sdg>(&query)
            .bind(&input.headline)
            .bind(&input.full_name)
            .bind(&input.color)
            .bind(&input.link)
            .bind(&input.logo_url)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Sdg>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sdgs WHERE id = $1");
        sqlx::query_as::<_, Sdg>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Batch lookup used to label rows that reference this table.
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Sdg>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sdgs WHERE id = ANY($1)");
        sqlx::query_as::<_, Sdg>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Sdg>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sdgs
             ORDER BY headline, full_name
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Sdg>(&query)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSdg,
    ) -> Result<Option<Sdg>, sqlx::Error> {
        let query = format!(
            "UPDATE sdgs SET
                headline = COALESCE($2, headline),
                full_name = COALESCE($3, full_name),
                color = COALESCE($4, color),
                link = COALESCE($5, link),
                logo_url = COALESCE($6, logo_url)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sdg>(&query)
            .bind(id)
            .bind(&input.headline)
            .bind(&input.full_name)
            .bind(&input.color)
            .bind(&input.link)
            .bind(&input.logo_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete an SDG together with its role rows.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sdgs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
