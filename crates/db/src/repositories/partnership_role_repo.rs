//! Repository for the `partnership_roles` table.

use livegene_core::pagination::{clamp_limit, clamp_offset};
use livegene_core::types::DbId;
use sqlx::PgPool;

use crate::models::partnership_role::{
    CreatePartnershipRole, PartnershipRole, UpdatePartnershipRole,
};

const COLUMNS: &str = "id, project_id, partnership_id, role_type_id, created_at, updated_at";

/// Same columns, qualified for queries joining the role type.
const PR_COLUMNS: &str = "pr.id, pr.project_id, pr.partnership_id, pr.role_type_id, \
                          pr.created_at, pr.updated_at";

/// Provides CRUD operations for partnership roles.
pub struct PartnershipRoleRepo;

impl PartnershipRoleRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreatePartnershipRole,
    ) -> Result<PartnershipRole, sqlx::Error> {
        let query = format!(
            "INSERT INTO partnership_roles (project_id, partnership_id, role_type_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PartnershipRole>(&query)
            .bind(input.project_id)
            .bind(input.partnership_id)
            .bind(input.role_type_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PartnershipRole>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM partnership_roles WHERE id = $1");
        sqlx::query_as::<_, PartnershipRole>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List partnership roles ordered by role type description, optionally
    /// restricted to one project.
    pub async fn list(
        pool: &PgPool,
        project_id: Option<DbId>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<PartnershipRole>, sqlx::Error> {
        let query = format!(
            "SELECT {PR_COLUMNS}
             FROM partnership_roles pr
             JOIN partnership_role_types t ON t.id = pr.role_type_id
             WHERE ($1::BIGINT IS NULL OR pr.project_id = $1)
             ORDER BY t.description, pr.id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, PartnershipRole>(&query)
            .bind(project_id)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePartnershipRole,
    ) -> Result<Option<PartnershipRole>, sqlx::Error> {
        let query = format!(
            "UPDATE partnership_roles SET
                project_id = COALESCE($2, project_id),
                partnership_id = COALESCE($3, partnership_id),
                role_type_id = COALESCE($4, role_type_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PartnershipRole>(&query)
            .bind(id)
            .bind(input.project_id)
            .bind(input.partnership_id)
            .bind(input.role_type_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM partnership_roles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
