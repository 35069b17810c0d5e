//! Sampling activity model and DTOs.

use std::fmt;

use livegene_core::error::CoreError;
use livegene_core::types::{Date, DbId, Timestamp};
use livegene_core::validators::{validate_text, ValidationErrors};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

const DESCRIPTION_MAX: usize = 255;

/// A row from the `sampling_activities` table: field sampling done for a
/// project through a partnership.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SamplingActivity {
    pub id: DbId,
    pub project_id: DbId,
    pub partnership_id: DbId,
    pub description: String,
    pub start_date: Date,
    pub end_date: Date,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for SamplingActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

/// DTO for creating a new sampling activity.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSamplingActivity {
    pub project_id: DbId,
    pub partnership_id: DbId,
    pub description: String,
    pub start_date: Date,
    pub end_date: Date,
}

impl CreateSamplingActivity {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = ValidationErrors::new();
        errors.check(validate_text(&self.description, DESCRIPTION_MAX, "description"));
        errors.into_result()
    }
}

/// DTO for updating an existing sampling activity. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSamplingActivity {
    pub project_id: Option<DbId>,
    pub partnership_id: Option<DbId>,
    pub description: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

impl UpdateSamplingActivity {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = ValidationErrors::new();
        errors.check_opt(self.description.as_deref(), |v| {
            validate_text(v, DESCRIPTION_MAX, "description")
        });
        errors.into_result()
    }
}
