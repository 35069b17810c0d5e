//! Repository for the `partnerships` table.

use livegene_core::pagination::{clamp_limit, clamp_offset};
use livegene_core::types::DbId;
use sqlx::PgPool;

use crate::models::partnership::{CreatePartnership, Partnership, UpdatePartnership};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, partner_id, contact_id, start_date, end_date, created_at, updated_at";

/// Provides CRUD operations for partnerships.
pub struct PartnershipRepo;

impl PartnershipRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreatePartnership,
    ) -> Result<Partnership, sqlx::Error> {
        let query = format!(
            "INSERT INTO partnerships (partner_id, contact_id, start_date, end_date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Partnership>(&query)
            .bind(input.partner_id)
            .bind(input.contact_id)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Partnership>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM partnerships WHERE id = $1");
        sqlx::query_as::<_, Partnership>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List partnerships, most recently ending first.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Partnership>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM partnerships
             ORDER BY end_date DESC, start_date DESC, id
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Partnership>(&query)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    /// Update a partnership. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePartnership,
    ) -> Result<Option<Partnership>, sqlx::Error> {
        let query = format!(
            "UPDATE partnerships SET
                partner_id = COALESCE($2, partner_id),
                contact_id = COALESCE($3, contact_id),
                start_date = COALESCE($4, start_date),
                end_date = COALESCE($5, end_date)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Partnership>(&query)
            .bind(id)
            .bind(input.partner_id)
            .bind(input.contact_id)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM partnerships WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
