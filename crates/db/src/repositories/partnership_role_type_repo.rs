//! Repository for the `partnership_role_types` table.

use livegene_core::pagination::{clamp_limit, clamp_offset};
use livegene_core::types::DbId;
use sqlx::PgPool;

use crate::models::partnership::{
    CreatePartnershipRoleType, PartnershipRoleType, UpdatePartnershipRoleType,
};

const COLUMNS: &str = "id, description, created_at, updated_at";

/// Provides CRUD operations for partnership role types.
pub struct PartnershipRoleTypeRepo;

impl PartnershipRoleTypeRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreatePartnershipRoleType,
    ) -> Result<PartnershipRoleType, sqlx::Error> {
        let query = format!(
            "INSERT INTO partnership_role_types (description) VALUES ($1) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PartnershipRoleType>(&query)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PartnershipRoleType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM partnership_role_types WHERE id = $1");
        sqlx::query_as::<_, PartnershipRoleType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List role types alphabetically.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<PartnershipRoleType>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM partnership_role_types
             ORDER BY description
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, PartnershipRoleType>(&query)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePartnershipRoleType,
    ) -> Result<Option<PartnershipRoleType>, sqlx::Error> {
        let query = format!(
            "UPDATE partnership_role_types SET description = COALESCE($2, description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PartnershipRoleType>(&query)
            .bind(id)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM partnership_role_types WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
