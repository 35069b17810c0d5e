//! Repository for the `contact_persons` table.

use livegene_core::pagination::{clamp_limit, clamp_offset};
use livegene_core::types::DbId;
use sqlx::PgPool;

use crate::models::contact_person::{ContactPerson, CreateContactPerson, UpdateContactPerson};

const COLUMNS: &str = "id, organisation_id, first_name, last_name, email, phone, \
                       created_at, updated_at";

/// Provides CRUD operations for contact persons.
pub struct ContactPersonRepo;

impl ContactPersonRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateContactPerson,
    ) -> Result<ContactPerson, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_persons (organisation_id, first_name, last_name, email, phone)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactPerson>(&query)
            .bind(input.organisation_id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ContactPerson>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_persons WHERE id = $1");
        sqlx::query_as::<_, ContactPerson>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List contact persons by last name, then first name.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<ContactPerson>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contact_persons
             ORDER BY last_name, first_name, id
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, ContactPerson>(&query)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateContactPerson,
    ) -> Result<Option<ContactPerson>, sqlx::Error> {
        let query = format!(
            "UPDATE contact_persons SET
                organisation_id = COALESCE($2, organisation_id),
                first_name = COALESCE($3, first_name),
                last_name = COALESCE($4, last_name),
                email = COALESCE($5, email),
                phone = COALESCE($6, phone)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactPerson>(&query)
            .bind(id)
            .bind(input.organisation_id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contact_persons WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
