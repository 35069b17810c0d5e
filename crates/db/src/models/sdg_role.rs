//! SDG role model and DTOs: the share of a project allocated to an SDG.

use std::fmt;

use livegene_core::error::CoreError;
use livegene_core::types::{DbId, Timestamp};
use livegene_core::validators::{validate_percent, ValidationErrors};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `sdg_roles` table. At most one per (project, SDG).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SdgRole {
    pub id: DbId,
    pub project_id: DbId,
    pub sdg_id: DbId,
    pub percent: i16,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for SdgRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Project {} - SDG {}", self.project_id, self.sdg_id)
    }
}

/// DTO for creating a new SDG role.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSdgRole {
    pub project_id: DbId,
    pub sdg_id: DbId,
    pub percent: i64,
}

impl CreateSdgRole {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = ValidationErrors::new();
        errors.check(validate_percent(self.percent, "percent"));
        errors.into_result()
    }
}

/// DTO for updating an existing SDG role. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSdgRole {
    pub project_id: Option<DbId>,
    pub sdg_id: Option<DbId>,
    pub percent: Option<i64>,
}

impl UpdateSdgRole {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = ValidationErrors::new();
        errors.check_opt(self.percent, |v| validate_percent(v, "percent"));
        errors.into_result()
    }
}
