//! Person entity model and DTOs.
//!
//! People are the organisation's own staff (principal investigators,
//! partnership contacts, project members). The username is the natural key
//! and, like the email, must be lowercase.

use std::fmt;

use livegene_core::error::CoreError;
use livegene_core::types::{DbId, Timestamp};
use livegene_core::validators::{
    validate_email, validate_lowercase, validate_max_len, validate_text, ValidationErrors,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

const USERNAME_MAX: usize = 12;
const FIRST_NAME_MAX: usize = 50;
const LAST_NAME_MAX: usize = 100;
const HOME_PROGRAM_MAX: usize = 100;
const PHONE_MAX: usize = 30;

/// A person row from the `people` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Person {
    pub id: DbId,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub home_program: String,
    pub email: String,
    pub phone: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

fn check_username(value: &str) -> Result<(), CoreError> {
    validate_text(value, USERNAME_MAX, "username")?;
    validate_lowercase(value, "username")
}

fn check_email(value: &str) -> Result<(), CoreError> {
    validate_email(value, "email")?;
    validate_lowercase(value, "email")
}

/// DTO for creating a new person.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePerson {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub home_program: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl CreatePerson {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = ValidationErrors::new();
        errors
            .check(check_username(&self.username))
            .check(validate_text(&self.first_name, FIRST_NAME_MAX, "first_name"))
            .check(validate_text(&self.last_name, LAST_NAME_MAX, "last_name"))
            .check(validate_text(&self.home_program, HOME_PROGRAM_MAX, "home_program"))
            .check(check_email(&self.email))
            .check(validate_max_len(&self.phone, PHONE_MAX, "phone"));
        errors.into_result()
    }
}

/// DTO for updating an existing person. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePerson {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub home_program: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl UpdatePerson {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = ValidationErrors::new();
        errors
            .check_opt(self.username.as_deref(), check_username)
            .check_opt(self.first_name.as_deref(), |v| {
                validate_text(v, FIRST_NAME_MAX, "first_name")
            })
            .check_opt(self.last_name.as_deref(), |v| {
                validate_text(v, LAST_NAME_MAX, "last_name")
            })
            .check_opt(self.home_program.as_deref(), |v| {
                validate_text(v, HOME_PROGRAM_MAX, "home_program")
            })
            .check_opt(self.email.as_deref(), check_email)
            .check_opt(self.phone.as_deref(), |v| {
                validate_max_len(v, PHONE_MAX, "phone")
            });
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn input() -> CreatePerson {
        CreatePerson {
            username: "akiprono".into(),
            first_name: "Amina".into(),
            last_name: "Kiprono".into(),
            home_program: "Animal and Human Health".into(),
            email: "a.kiprono@cgiar.org".into(),
            phone: String::new(),
        }
    }

    #[test]
    fn valid_person_passes() {
        assert!(input().validate().is_ok());
    }

    #[test]
    fn uppercase_username_is_rejected() {
        let mut person = input();
        person.username = "AKiprono".into();
        let err = person.validate().unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("lower case"));
    }

    #[test]
    fn uppercase_email_is_rejected() {
        let mut person = input();
        person.email = "A.Kiprono@cgiar.org".into();
        assert!(person.validate().is_err());
    }

    #[test]
    fn username_longer_than_twelve_is_rejected() {
        let mut person = input();
        person.username = "abcdefghijklm".into();
        assert!(person.validate().is_err());
    }

    #[test]
    fn reports_every_failing_field() {
        let mut person = input();
        person.username = "BAD".into();
        person.first_name = String::new();
        let err = person.validate().unwrap_err();
        assert_matches!(
            err,
            CoreError::Validation(msg) if msg.contains("username") && msg.contains("first_name")
        );
    }

    #[test]
    fn partial_update_only_checks_present_fields() {
        let update = UpdatePerson {
            username: None,
            first_name: None,
            last_name: None,
            home_program: None,
            email: None,
            phone: Some("+254 20 422 3000".into()),
        };
        assert!(update.validate().is_ok());
    }

    #[test]
    fn display_joins_first_and_last() {
        let person = Person {
            id: 1,
            username: "akiprono".into(),
            first_name: "Amina".into(),
            last_name: "Kiprono".into(),
            home_program: "AHH".into(),
            email: "a.kiprono@cgiar.org".into(),
            phone: String::new(),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        assert_eq!(person.to_string(), "Amina Kiprono");
    }
}
