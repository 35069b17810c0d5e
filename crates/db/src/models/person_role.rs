//! Person role model and DTOs: the share of a project allocated to a person.

use std::fmt;

use livegene_core::error::CoreError;
use livegene_core::types::{DbId, Timestamp};
use livegene_core::validators::{validate_percent, ValidationErrors};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `person_roles` table. At most one per (project, person).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PersonRole {
    pub id: DbId,
    pub project_id: DbId,
    pub person_id: DbId,
    pub percent: i16,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for PersonRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Project {} - Person {}", self.project_id, self.person_id)
    }
}

/// DTO for creating a new person role.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePersonRole {
    pub project_id: DbId,
    pub person_id: DbId,
    pub percent: i64,
}

impl CreatePersonRole {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = ValidationErrors::new();
        errors.check(validate_percent(self.percent, "percent"));
        errors.into_result()
    }
}

/// DTO for updating an existing person role. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePersonRole {
    pub project_id: Option<DbId>,
    pub person_id: Option<DbId>,
    pub percent: Option<i64>,
}

impl UpdatePersonRole {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = ValidationErrors::new();
        errors.check_opt(self.percent, |v| validate_percent(v, "percent"));
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(percent: i64) -> CreatePersonRole {
        CreatePersonRole {
            project_id: 1,
            person_id: 2,
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

    #[test]
    fn update_without_percent_passes() {
        let update = UpdatePersonRole {
            project_id: Some(3),
            person_id: None,
            percent: None,
        };
        assert!(update.validate().is_ok());
    }

    #[test]
    fn display_names_both_ends() {
        let now = chrono::Utc::now();
        let role = PersonRole {
            id: 9,
            project_id: 1,
            person_id: 2,
            percent: 50,
            created_at: now,
            updated_at: now,
        };
        assert_eq!(role.to_string(), "Project 1 - Person 2");
    }
}
