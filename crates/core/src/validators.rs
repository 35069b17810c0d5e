//! Field-level validators shared by every entity DTO.
//!
//! Each validator takes the field name so the resulting message points at
//! the offending field. [`ValidationErrors`] gathers the failures of a whole
//! form so the caller reports all of them at once.

use std::sync::LazyLock;

use regex::Regex;
use validator::{ValidateEmail, ValidateUrl};

use crate::error::CoreError;

/// Upper bound of every percentage field.
pub const MAX_PERCENT: i16 = 100;

/// `#RRGGBB` colour notation used by SDG tiles.
static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid regex"));

// ---------------------------------------------------------------------------
// Single-field validators
// ---------------------------------------------------------------------------

/// Reject any value containing an uppercase character.
///
/// A value passes when every cased character is lowercase and at least one
/// cased character is present, so `"jdoe42"` passes while `"JDoe"` and
/// `"1234"` do not.
pub fn validate_lowercase(value: &str, name: &str) -> Result<(), CoreError> {
    let has_upper = value.chars().any(char::is_uppercase);
    let has_lower = value.chars().any(char::is_lowercase);
    if has_upper || !has_lower {
        return Err(CoreError::Validation(format!(
            "{name} '{value}' must be in lower case"
        )));
    }
    Ok(())
}

/// Validate that a percentage falls within `[0, 100]`.
///
/// Takes the wire width (`i64`) so values far outside the column type still
/// produce a validation message instead of a deserialization failure.
pub fn validate_percent(value: i64, name: &str) -> Result<(), CoreError> {
    if !(0..=i64::from(MAX_PERCENT)).contains(&value) {
        return Err(CoreError::Validation(format!(
            "{name} must be between 0 and {MAX_PERCENT}, got {value}"
        )));
    }
    Ok(())
}

/// Narrow a percentage to the `SMALLINT` column type.
///
/// Saturates instead of wrapping, so a value that skipped validation still
/// fails the table's range check.
pub fn percent_to_smallint(value: i64) -> i16 {
    i16::try_from(value).unwrap_or(if value < 0 { i16::MIN } else { i16::MAX })
}

/// Validate that a string holds at most `max` characters.
pub fn validate_max_len(value: &str, max: usize, name: &str) -> Result<(), CoreError> {
    let len = value.chars().count();
    if len > max {
        return Err(CoreError::Validation(format!(
            "{name} must be at most {max} characters, got {len}"
        )));
    }
    Ok(())
}

/// Validate that a required string is not blank.
pub fn validate_required(value: &str, name: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{name} is required")));
    }
    Ok(())
}

/// Validate a required, length-limited text field.
pub fn validate_text(value: &str, max: usize, name: &str) -> Result<(), CoreError> {
    validate_required(value, name)?;
    validate_max_len(value, max, name)
}

pub fn validate_email(value: &str, name: &str) -> Result<(), CoreError> {
    if !value.validate_email() {
        return Err(CoreError::Validation(format!(
            "{name} '{value}' is not a valid email address"
        )));
    }
    Ok(())
}

pub fn validate_url(value: &str, name: &str) -> Result<(), CoreError> {
    if !value.validate_url() {
        return Err(CoreError::Validation(format!(
            "{name} '{value}' is not a valid URL"
        )));
    }
    Ok(())
}

pub fn validate_hex_color(value: &str, name: &str) -> Result<(), CoreError> {
    if !HEX_COLOR_RE.is_match(value) {
        return Err(CoreError::Validation(format!(
            "{name} must be a #RRGGBB colour, got '{value}'"
        )));
    }
    Ok(())
}

/// Validate that an amount of money is not negative.
pub fn validate_non_negative(value: i32, name: &str) -> Result<(), CoreError> {
    if value < 0 {
        return Err(CoreError::Validation(format!(
            "{name} must not be negative, got {value}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Form-level collection
// ---------------------------------------------------------------------------

/// Accumulates validation failures across the fields of one input.
#[derive(Debug, Default)]
pub struct ValidationErrors {
    messages: Vec<String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a single validator. Non-validation errors are
    /// recorded by their display text.
    pub fn check(&mut self, result: Result<(), CoreError>) -> &mut Self {
        match result {
            Ok(()) => {}
            Err(CoreError::Validation(msg)) => self.messages.push(msg),
            Err(other) => self.messages.push(other.to_string()),
        }
        self
    }

    /// Run `check` only when an optional field is present.
    pub fn check_opt<T>(
        &mut self,
        value: Option<T>,
        validate: impl FnOnce(T) -> Result<(), CoreError>,
    ) -> &mut Self {
        if let Some(v) = value {
            self.check(validate(v));
        }
        self
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Collapse the gathered failures into a single `CoreError::Validation`.
    pub fn into_result(self) -> Result<(), CoreError> {
        if self.messages.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(self.messages.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn lowercase_accepts_lowercase_values() {
        assert!(validate_lowercase("jdoe", "username").is_ok());
        assert!(validate_lowercase("j.doe42", "username").is_ok());
        assert!(validate_lowercase("a.kiprono@cgiar.org", "email").is_ok());
    }

    #[test]
    fn lowercase_rejects_any_uppercase_character() {
        for value in ["JDoe", "jdoE", "JDOE", "a.Kiprono@cgiar.org"] {
            assert_matches!(
                validate_lowercase(value, "username"),
                Err(CoreError::Validation(_)),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn lowercase_rejects_values_without_letters() {
        assert!(validate_lowercase("", "username").is_err());
        assert!(validate_lowercase("1234", "username").is_err());
    }

    #[test]
    fn lowercase_message_names_value() {
        let err = validate_lowercase("Bob", "username").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: username 'Bob' must be in lower case"
        );
    }

    #[test]
    fn percent_accepts_boundaries() {
        assert!(validate_percent(0, "percent").is_ok());
        assert!(validate_percent(55, "percent").is_ok());
        assert!(validate_percent(100, "percent").is_ok());
    }

    #[test]
    fn percent_rejects_out_of_range() {
        assert!(validate_percent(-1, "percent").is_err());
        assert!(validate_percent(101, "percent").is_err());
        assert!(validate_percent(40_000, "percent").is_err());
        assert!(validate_percent(i64::MIN, "percent").is_err());
    }

    #[test]
    fn smallint_narrowing_saturates() {
        assert_eq!(percent_to_smallint(55), 55);
        assert_eq!(percent_to_smallint(40_000), i16::MAX);
        assert_eq!(percent_to_smallint(-70_000), i16::MIN);
    }

    #[test]
    fn max_len_counts_characters_not_bytes() {
        assert!(validate_max_len("Côte d'Ivoire", 13, "name").is_ok());
        assert!(validate_max_len("abcd", 3, "name").is_err());
    }

    #[test]
    fn required_rejects_blank() {
        assert!(validate_required("   ", "first_name").is_err());
        assert!(validate_text("", 10, "first_name").is_err());
        assert!(validate_text("Amina", 10, "first_name").is_ok());
    }

    #[test]
    fn email_and_url_checks() {
        assert!(validate_email("a.kiprono@cgiar.org", "email").is_ok());
        assert!(validate_email("not-an-email", "email").is_err());
        assert!(validate_url("https://www.ilri.org/logo.png", "logo_url").is_ok());
        assert!(validate_url("ilri logo", "logo_url").is_err());
    }

    #[test]
    fn hex_color_requires_hash_and_six_digits() {
        assert!(validate_hex_color("#E5243B", "color").is_ok());
        assert!(validate_hex_color("E5243B", "color").is_err());
        assert!(validate_hex_color("#E5243", "color").is_err());
    }

    #[test]
    fn non_negative_amounts() {
        assert!(validate_non_negative(0, "amount").is_ok());
        assert!(validate_non_negative(-5, "amount").is_err());
    }

    #[test]
    fn errors_collects_every_failure() {
        let mut errors = ValidationErrors::new();
        errors
            .check(validate_lowercase("JDoe", "username"))
            .check(validate_percent(120, "percent"))
            .check(validate_required("x", "first_name"))
            .check_opt(Some("bad"), |v| validate_email(v, "email"))
            .check_opt(None::<&str>, |v| validate_url(v, "logo_url"));
        assert_eq!(errors.messages().len(), 3);

        let err = errors.into_result().unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("; "));
    }

    #[test]
    fn empty_errors_is_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }
}
