//! Partnership and partnership role type models and DTOs.

use std::fmt;

use livegene_core::error::CoreError;
use livegene_core::types::{Date, DbId, Timestamp};
use livegene_core::validators::{validate_text, ValidationErrors};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

const ROLE_TYPE_DESCRIPTION_MAX: usize = 255;

/// A partnership row from the `partnerships` table: a collaboration with an
/// external organisation, run by one of our people.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Partnership {
    pub id: DbId,
    pub partner_id: DbId,
    pub contact_id: DbId,
    pub start_date: Date,
    pub end_date: Date,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for Partnership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Partnership {} ({} to {})",
            self.id, self.start_date, self.end_date
        )
    }
}

/// DTO for creating a new partnership.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePartnership {
    pub partner_id: DbId,
    pub contact_id: DbId,
    pub start_date: Date,
    pub end_date: Date,
}

/// DTO for updating an existing partnership. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePartnership {
    pub partner_id: Option<DbId>,
    pub contact_id: Option<DbId>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

/// A row from the `partnership_role_types` table (e.g. "Sample provider").
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PartnershipRoleType {
    pub id: DbId,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for PartnershipRoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

/// DTO for creating or renaming a partnership role type.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePartnershipRoleType {
    pub description: String,
}

impl CreatePartnershipRoleType {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = ValidationErrors::new();
        errors.check(validate_text(
            &self.description,
            ROLE_TYPE_DESCRIPTION_MAX,
            "description",
        ));
        errors.into_result()
    }
}

/// DTO for updating a partnership role type.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePartnershipRoleType {
    pub description: Option<String>,
}

impl UpdatePartnershipRoleType {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = ValidationErrors::new();
        errors.check_opt(self.description.as_deref(), |v| {
            validate_text(v, ROLE_TYPE_DESCRIPTION_MAX, "description")
        });
        errors.into_result()
    }
}
