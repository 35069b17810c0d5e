//! Project entity model and DTOs.
//!
//! Projects are the hub of the schema: roles, expenditures, partnership
//! roles and sampling activities all point at one.

use std::fmt;

use livegene_core::error::CoreError;
use livegene_core::types::{Date, DbId, Timestamp};
use livegene_core::validators::{
    validate_max_len, validate_percent, validate_text, ValidationErrors,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

const ILRI_CODE_MAX: usize = 55;
const FULL_NAME_MAX: usize = 100;
const SHORT_NAME_MAX: usize = 30;
const GROUP_MAX: usize = 55;
const DONOR_REFERENCE_MAX: usize = 55;
const DONOR_PROJECT_NAME_MAX: usize = 100;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub ilri_code: String,
    pub full_name: String,
    pub short_name: String,
    pub principal_investigator_id: DbId,
    pub group_name: String,
    pub donor_id: DbId,
    pub donor_reference: String,
    pub donor_project_name: String,
    pub start_date: Date,
    pub end_date: Date,
    /// Completion, in percent.
    pub status: i16,
    /// Share of the project devoted to capacity development, in percent.
    pub capacity_development: i16,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.full_name, self.ilri_code)
    }
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub ilri_code: String,
    pub full_name: String,
    #[serde(default)]
    pub short_name: String,
    pub principal_investigator_id: DbId,
    pub group_name: String,
    pub donor_id: DbId,
    pub donor_reference: String,
    pub donor_project_name: String,
    pub start_date: Date,
    pub end_date: Date,
    pub status: i64,
    pub capacity_development: i64,
}

impl CreateProject {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = ValidationErrors::new();
        errors
            .check(validate_text(&self.ilri_code, ILRI_CODE_MAX, "ilri_code"))
            .check(validate_text(&self.full_name, FULL_NAME_MAX, "full_name"))
            .check(validate_max_len(&self.short_name, SHORT_NAME_MAX, "short_name"))
            .check(validate_text(&self.group_name, GROUP_MAX, "group_name"))
            .check(validate_text(
                &self.donor_reference,
                DONOR_REFERENCE_MAX,
                "donor_reference",
            ))
            .check(validate_text(
                &self.donor_project_name,
                DONOR_PROJECT_NAME_MAX,
                "donor_project_name",
            ))
            .check(validate_percent(self.status, "status"))
            .check(validate_percent(
                self.capacity_development,
                "capacity_development",
            ));
        errors.into_result()
    }
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub ilri_code: Option<String>,
    pub full_name: Option<String>,
    pub short_name: Option<String>,
    pub principal_investigator_id: Option<DbId>,
    pub group_name: Option<String>,
    pub donor_id: Option<DbId>,
    pub donor_reference: Option<String>,
    pub donor_project_name: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub status: Option<i64>,
    pub capacity_development: Option<i64>,
}

impl UpdateProject {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = ValidationErrors::new();
        errors
            .check_opt(self.ilri_code.as_deref(), |v| {
                validate_text(v, ILRI_CODE_MAX, "ilri_code")
            })
            .check_opt(self.full_name.as_deref(), |v| {
                validate_text(v, FULL_NAME_MAX, "full_name")
            })
            .check_opt(self.short_name.as_deref(), |v| {
                validate_max_len(v, SHORT_NAME_MAX, "short_name")
            })
            .check_opt(self.group_name.as_deref(), |v| {
                validate_text(v, GROUP_MAX, "group_name")
            })
            .check_opt(self.donor_reference.as_deref(), |v| {
                validate_text(v, DONOR_REFERENCE_MAX, "donor_reference")
            })
            .check_opt(self.donor_project_name.as_deref(), |v| {
                validate_text(v, DONOR_PROJECT_NAME_MAX, "donor_project_name")
            })
            .check_opt(self.status, |v| validate_percent(v, "status"))
            .check_opt(self.capacity_development, |v| {
                validate_percent(v, "capacity_development")
            });
        errors.into_result()
    }
}
