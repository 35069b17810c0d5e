//! Contact person model and DTOs: people at partner organisations who are
//! not on our own staff list.

use std::fmt;

use livegene_core::error::CoreError;
use livegene_core::types::{DbId, Timestamp};
use livegene_core::validators::{
    validate_email, validate_max_len, validate_text, ValidationErrors,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

const FIRST_NAME_MAX: usize = 50;
const LAST_NAME_MAX: usize = 100;
const PHONE_MAX: usize = 30;

/// A row from the `contact_persons` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactPerson {
    pub id: DbId,
    pub organisation_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for ContactPerson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// DTO for creating a new contact person.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContactPerson {
    pub organisation_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl CreateContactPerson {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = ValidationErrors::new();
        errors
            .check(validate_text(&self.first_name, FIRST_NAME_MAX, "first_name"))
            .check(validate_text(&self.last_name, LAST_NAME_MAX, "last_name"))
            .check(validate_email(&self.email, "email"))
            .check(validate_max_len(&self.phone, PHONE_MAX, "phone"));
        errors.into_result()
    }
}

/// DTO for updating an existing contact person. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateContactPerson {
    pub organisation_id: Option<DbId>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl UpdateContactPerson {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = ValidationErrors::new();
        errors
            .check_opt(self.first_name.as_deref(), |v| {
                validate_text(v, FIRST_NAME_MAX, "first_name")
            })
            .check_opt(self.last_name.as_deref(), |v| {
                validate_text(v, LAST_NAME_MAX, "last_name")
            })
            .check_opt(self.email.as_deref(), |v| validate_email(v, "email"))
            .check_opt(self.phone.as_deref(), |v| {
                validate_max_len(v, PHONE_MAX, "phone")
            });
        errors.into_result()
    }
}
