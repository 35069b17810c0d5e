//! Repository for the `expenditures` table.

use livegene_core::pagination::{clamp_limit, clamp_offset};
use livegene_core::types::DbId;
use sqlx::PgPool;

use crate::models::expenditure::{CreateExpenditure, Expenditure, UpdateExpenditure};

const COLUMNS: &str = "id, project_id, name, home_program, start_date, end_date, report_date, \
                       total_budget, amount, created_at, updated_at";

/// Provides CRUD operations for project expenditures.
pub struct ExpenditureRepo;

impl ExpenditureRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateExpenditure,
    ) -> Result<Expenditure, sqlx::Error> {
        let query = format!(
            "INSERT INTO expenditures
                (project_id, name, home_program, start_date, end_date, report_date,
                 total_budget, amount)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Expenditure>(&query)
            .bind(input.project_id)
            .bind(&input.name)
            .bind(&input.home_program)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.report_date)
            .bind(input.total_budget)
            .bind(input.amount)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Expenditure>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM expenditures WHERE id = $1");
        sqlx::query_as::<_, Expenditure>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List expenditures by name, optionally restricted to one project.
    pub async fn list(
        pool: &PgPool,
        project_id: Option<DbId>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Expenditure>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM expenditures
             WHERE ($1::BIGINT IS NULL OR project_id = $1)
             ORDER BY name, id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Expenditure>(&query)
            .bind(project_id)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateExpenditure,
    ) -> Result<Option<Expenditure>, sqlx::Error> {
        let query = format!(
            "UPDATE expenditures SET
                project_id = COALESCE($2, project_id),
                name = COALESCE($3, name),
                home_program = COALESCE($4, home_program),
                start_date = COALESCE($5, start_date),
                end_date = COALESCE($6, end_date),
                report_date = COALESCE($7, report_date),
                total_budget = COALESCE($8, total_budget),
                amount = COALESCE($9, amount)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Expenditure>(&query)
            .bind(id)
            .bind(input.project_id)
            .bind(&input.name)
            .bind(&input.home_program)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.report_date)
            .bind(input.total_budget)
            .bind(input.amount)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM expenditures WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
