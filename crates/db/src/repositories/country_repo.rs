//! Repository for the `countries` table.

use livegene_core::pagination::{clamp_limit, clamp_offset};
use livegene_core::types::DbId;
use sqlx::PgPool;

use crate::models::country::Country;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, code, created_at, updated_at";

/// Provides CRUD operations for countries.
pub struct CountryRepo;

impl CountryRepo {
    /// Insert a country. `code` must already be normalized.
    pub async fn create(pool: &PgPool, code: &str) -> Result<Country, sqlx::Error> {
        let query = format!("INSERT INTO countries (code) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Country>(&query)
            .bind(code)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Country>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM countries WHERE id = $1");
        sqlx::query_as::<_, Country>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Batch lookup used to label rows that reference this table.
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Country>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM countries WHERE id = ANY($1)");
        sqlx::query_as::<_, Country>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Natural-key lookup by alpha-2 code.
    pub async fn find_by_code(pool: &PgPool, code: &str) -> Result<Option<Country>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM countries WHERE code = $1");
        sqlx::query_as::<_, Country>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// List countries ordered by code.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Country>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM countries ORDER BY code LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Country>(&query)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    /// Change a country's code. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        code: Option<&str>,
    ) -> Result<Option<Country>, sqlx::Error> {
        let query = format!(
            "UPDATE countries SET code = COALESCE($2, code) WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Country>(&query)
            .bind(id)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// Delete a country. Cascades to country roles; rejected while an
    /// organisation is based there.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM countries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
