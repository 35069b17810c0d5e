//! Finance expenditure model and DTOs.
//!
//! Expenditure lines as reported by the finance system: keyed by ILRI code
//! and reporting date rather than by project row, with optional end date and
//! amounts.

use std::fmt;

use livegene_core::error::CoreError;
use livegene_core::types::{Date, DbId, Timestamp};
use livegene_core::validators::{validate_non_negative, validate_text, ValidationErrors};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

const ILRI_CODE_MAX: usize = 50;
const NAME_MAX: usize = 100;
const HOME_PROGRAM_MAX: usize = 100;

/// A row from the `finance_expenditures` table. One per (ilri_code, report_date).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FinanceExpenditure {
    pub id: DbId,
    pub ilri_code: String,
    pub name: String,
    pub home_program: String,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub report_date: Date,
    pub total_budget: Option<i32>,
    pub amount: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for FinanceExpenditure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// DTO for creating a new finance expenditure line.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFinanceExpenditure {
    pub ilri_code: String,
    pub name: String,
    pub home_program: String,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub report_date: Date,
    pub total_budget: Option<i32>,
    pub amount: Option<i32>,
}

impl CreateFinanceExpenditure {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = ValidationErrors::new();
        errors
            .check(validate_text(&self.ilri_code, ILRI_CODE_MAX, "ilri_code"))
            .check(validate_text(&self.name, NAME_MAX, "name"))
            .check(validate_text(&self.home_program, HOME_PROGRAM_MAX, "home_program"))
            .check_opt(self.total_budget, |v| {
                validate_non_negative(v, "total_budget")
            })
            .check_opt(self.amount, |v| validate_non_negative(v, "amount"));
        errors.into_result()
    }
}

/// DTO for updating a finance expenditure line. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFinanceExpenditure {
    pub ilri_code: Option<String>,
    pub name: Option<String>,
    pub home_program: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub report_date: Option<Date>,
    pub total_budget: Option<i32>,
    pub amount: Option<i32>,
}

impl UpdateFinanceExpenditure {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = ValidationErrors::new();
        errors
            .check_opt(self.ilri_code.as_deref(), |v| {
                validate_text(v, ILRI_CODE_MAX, "ilri_code")
            })
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
    fn amounts_are_optional() {
        let input = CreateFinanceExpenditure {
            ilri_code: "ADGG-01".into(),
            name: "African Dairy Genetic Gains".into(),
            home_program: "LiveGene".into(),
            start_date: Date::from_ymd_opt(2016, 1, 1).unwrap(),
            end_date: None,
            report_date: Date::from_ymd_opt(2018, 3, 31).unwrap(),
            total_budget: None,
            amount: None,
        };
        assert!(input.validate().is_ok());
    }
}
