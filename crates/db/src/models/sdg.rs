//! Sustainable Development Goal entity model and DTOs.
//!
//! See <https://en.wikipedia.org/wiki/Sustainable_Development_Goals>.

use std::fmt;

use livegene_core::error::CoreError;
use livegene_core::types::{DbId, Timestamp};
use livegene_core::validators::{
    validate_hex_color, validate_text, validate_url, ValidationErrors,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

const HEADLINE_MAX: usize = 30;
const FULL_NAME_MAX: usize = 100;

/// A row from the `sdgs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Sdg {
    pub id: DbId,
    pub headline: String,
    pub full_name: String,
    /// Tile colour as `#RRGGBB`.
    pub color: String,
    pub link: String,
    pub logo_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for Sdg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.headline)
    }
}

/// DTO for creating a new SDG.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSdg {
    pub headline: String,
    pub full_name: String,
    pub color: String,
    pub link: String,
    pub logo_url: String,
}

impl CreateSdg {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = ValidationErrors::new();
        errors
            .check(validate_text(&self.headline, HEADLINE_MAX, "headline"))
            .check(validate_text(&self.full_name, FULL_NAME_MAX, "full_name"))
            .check(validate_hex_color(&self.color, "color"))
            .check(validate_url(&self.link, "link"))
            .check(validate_url(&self.logo_url, "logo_url"));
        errors.into_result()
    }
}

/// DTO for updating an existing SDG. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSdg {
    pub headline: Option<String>,
    pub full_name: Option<String>,
    pub color: Option<String>,
    pub link: Option<String>,
    pub logo_url: Option<String>,
}

impl UpdateSdg {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = ValidationErrors::new();
        errors
            .check_opt(self.headline.as_deref(), |v| {
                validate_text(v, HEADLINE_MAX, "headline")
            })
            .check_opt(self.full_name.as_deref(), |v| {
                validate_text(v, FULL_NAME_MAX, "full_name")
            })
            .check_opt(self.color.as_deref(), |v| validate_hex_color(v, "color"))
            .check_opt(self.link.as_deref(), |v| validate_url(v, "link"))
            .check_opt(self.logo_url.as_deref(), |v| validate_url(v, "logo_url"));
        errors.into_result()
    }
}
