//! Repository for the `finance_expenditures` table.

use livegene_core::pagination::{clamp_limit, clamp_offset};
use livegene_core::types::DbId;
use sqlx::PgPool;

use crate::models::finance_expenditure::{
    CreateFinanceExpenditure, FinanceExpenditure, UpdateFinanceExpenditure,
};

const COLUMNS: &str = "id, ilri_code, name, home_program, start_date, end_date, report_date, \
                       total_budget, amount, created_at, updated_at";

/// Provides CRUD operations for finance-reported expenditure lines.
pub struct FinanceExpenditureRepo;

impl FinanceExpenditureRepo {
    /// Insert a line. A second line for the same (ilri_code, report_date)
    /// violates `uq_finance_expenditures_ilri_code_report_date`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateFinanceExpenditure,
    ) -> Result<FinanceExpenditure, sqlx::Error> {
        let query = format!(
            "INSERT INTO finance_expenditures
                (ilri_code, name, home_program, start_date, end_date, report_date,
                 total_budget, amount)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FinanceExpenditure>(&query)
            .bind(&input.ilri_code)
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

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<FinanceExpenditure>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM finance_expenditures WHERE id = $1");
        sqlx::query_as::<_, FinanceExpenditure>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<FinanceExpenditure>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM finance_expenditures
             ORDER BY name, id
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, FinanceExpenditure>(&query)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    /// Every reported line for one ILRI code, oldest report first.
    pub async fn list_by_ilri_code(
        pool: &PgPool,
        ilri_code: &str,
    ) -> Result<Vec<FinanceExpenditure>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM finance_expenditures
             WHERE ilri_code = $1
             ORDER BY report_date"
        );
        sqlx::query_as::<_, FinanceExpenditure>(&query)
            .bind(ilri_code)
            .fetch_all(pool)
            .await
    }

    /// Update a line. Only non-`None` fields in `input` are applied, so the
    /// nullable columns cannot be cleared through this call.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFinanceExpenditure,
    ) -> Result<Option<FinanceExpenditure>, sqlx::Error> {
        let query = format!(
            "UPDATE finance_expenditures SET
                ilri_code = COALESCE($2, ilri_code),
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
        sqlx::query_as::<_, FinanceExpenditure>(&query)
            .bind(id)
            .bind(&input.ilri_code)
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
        let result = sqlx::query("DELETE FROM finance_expenditures WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
