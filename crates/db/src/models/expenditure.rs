//! Project expenditure model and DTOs.

use std::fmt;

use livegene_core::error::CoreError;
use livegene_core::types::{Date, DbId, Timestamp};
use livegene_core::validators::{validate_non_negative, validate_text, ValidationErrors};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

const NAME_MAX: usize = 100;
const HOME_PROGRAM_MAX: usize = 100;

/// A row from the `expenditures` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Expenditure {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub home_program: String,
    pub start_date: Date,
    pub end_date: Date,
    pub report_date: Date,
    pub total_budget: i32,
    pub amount: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for Expenditure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// DTO for creating a new expenditure.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateExpenditure {
    pub project_id: DbId,
    pub name: String,
    pub home_program: String,
    pub start_date: Date,
    pub end_date: Date,
    pub report_date: Date,
    pub total_budget: i32,
    pub amount: i32,
}

impl CreateExpenditure {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = ValidationErrors::new();
        errors
            .check(validate_text(&self.name, NAME_MAX, "name"))
            .check(validate_text(&self.home_program, HOME_PROGRAM_MAX, "home_program"))
            .check(validate_non_negative(self.total_budget, "total_budget"))
            .check(validate_non_negative(self.amount, "amount"));
        errors.into_result()
    }
}

/// DTO for updating an existing expenditure. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateExpenditure {
    pub project_id: Option<DbId>,
    pub name: Option<String>,
    pub home_program: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub report_date: Option<Date>,
    pub total_budget: Option<i32>,
    pub amount: Option<i32>,
}

impl UpdateExpenditure {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = ValidationErrors::new();
        errors
            .check_opt(self.name.as_deref(), |v| validate_text(v, NAME_MAX, "name"))
            .check_opt(self.home_program.as_deref(), |v| {
                validate_text(v, HOME_PROGRAM_MAX, "home_program")
            })
            .check_opt(self.total_budget, |v| {
                validate_non_negative(v, "total_budget")
            })
            .check_opt(self.amount, |v| validate_non_negative(v, "amount"));
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_amount_fails() {
        let date = Date::from_ymd_opt(2018, 6, 30).unwrap();
        let input = CreateExpenditure {
            project_id: 1,
            name: "Field sampling Q2".into(),
            home_program: "BioSciences".into(),
            start_date: date,
            end_date: date,
            report_date: date,
            total_budget: 10_000,
            amount: -1,
        };
        assert!(input.validate().is_err());
    }
}
