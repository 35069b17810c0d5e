//! Country role model and DTOs: the share of a project allocated to a country.

use std::fmt;

use livegene_core::error::CoreError;
use livegene_core::types::{DbId, Timestamp};
use livegene_core::validators::{validate_percent, ValidationErrors};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `country_roles` table. At most one per (project, country).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CountryRole {
    pub id: DbId,
    pub project_id: DbId,
    pub country_id: DbId,
    pub percent: i16,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for CountryRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Project {} - Country {}", self.project_id, self.country_id)
    }
}

/// DTO for creating a new country role.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCountryRole {
    pub project_id: DbId,
    pub country_id: DbId,
    pub percent: i64,
}

impl CreateCountryRole {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = ValidationErrors::new();
        errors.check(validate_percent(self.percent, "percent"));
        errors.into_result()
    }
}

/// DTO for updating an existing country role. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCountryRole {
    pub project_id: Option<DbId>,
    pub country_id: Option<DbId>,
    pub percent: Option<i64>,
}

impl UpdateCountryRole {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = ValidationErrors::new();
        errors.check_opt(self.percent, |v| validate_percent(v, "percent"));
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(percent: i64) -> CreateCountryRole {
        CreateCountryRole {
            project_id: 1,
            country_id: 2,
            percent,
        }
    }

    #[test]
    fn percent_within_range_passes() {
        assert!(input(0).validate().is_ok());
        assert!(input(100).validate().is_ok());
    }

    #[test]
    fn percent_outside_range_fails() {
        assert!(input(-1).validate().is_err());
        assert!(input(101).validate().is_err());
    }
}
