//! Organisation entity model and DTOs.

use std::fmt;

use livegene_core::error::CoreError;
use livegene_core::types::{DbId, Timestamp};
use livegene_core::validators::{
    validate_max_len, validate_text, validate_url, ValidationErrors,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

const SHORT_NAME_MAX: usize = 15;
const FULL_NAME_MAX: usize = 100;

/// An organisation row from the `organisations` table (donors, partners).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Organisation {
    pub id: DbId,
    pub short_name: String,
    pub full_name: String,
    pub logo_url: Option<String>,
    pub country_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for Organisation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}

/// DTO for creating a new organisation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrganisation {
    /// Blank allowed; defaults to empty.
    #[serde(default)]
    pub short_name: String,
    pub full_name: String,
    pub logo_url: Option<String>,
    pub country_id: DbId,
}

impl CreateOrganisation {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = ValidationErrors::new();
        errors
            .check(validate_max_len(&self.short_name, SHORT_NAME_MAX, "short_name"))
            .check(validate_text(&self.full_name, FULL_NAME_MAX, "full_name"))
            .check_opt(self.logo_url.as_deref(), |v| validate_url(v, "logo_url"));
        errors.into_result()
    }
}

/// DTO for updating an existing organisation. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOrganisation {
    pub short_name: Option<String>,
    pub full_name: Option<String>,
    pub logo_url: Option<String>,
    pub country_id: Option<DbId>,
}

impl UpdateOrganisation {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = ValidationErrors::new();
        errors
            .check_opt(self.short_name.as_deref(), |v| {
                validate_max_len(v, SHORT_NAME_MAX, "short_name")
            })
            .check_opt(self.full_name.as_deref(), |v| {
                validate_text(v, FULL_NAME_MAX, "full_name")
            })
            .check_opt(self.logo_url.as_deref(), |v| validate_url(v, "logo_url"));
        errors.into_result()
    }
}
