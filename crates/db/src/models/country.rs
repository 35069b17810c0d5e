//! Country entity model and DTOs.

use std::fmt;

use livegene_core::countries;
use livegene_core::error::CoreError;
use livegene_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A country row from the `countries` table.
///
/// Only the ISO 3166-1 alpha-2 code is stored; the name comes from the
/// registry in `livegene_core::countries`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Country {
    pub id: DbId,
    pub code: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Country {
    /// English short name, falling back to the code for unknown entries.
    pub fn name(&self) -> &str {
        countries::country_name(&self.code).unwrap_or(&self.code)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// DTO for creating a new country. The code is accepted in any case.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCountry {
    pub code: String,
}

impl CreateCountry {
    /// Validate the code and return it in stored (uppercase) form.
    pub fn normalized_code(&self) -> Result<String, CoreError> {
        countries::normalize_code(&self.code)
    }
}

/// DTO for updating an existing country.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCountry {
    pub code: Option<String>,
}

impl UpdateCountry {
    pub fn normalized_code(&self) -> Result<Option<String>, CoreError> {
        self.code.as_deref().map(countries::normalize_code).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_normalizes_code() {
        let input = CreateCountry { code: "ke".into() };
        assert_eq!(input.normalized_code().unwrap(), "KE");
    }

    #[test]
    fn create_rejects_unknown_code() {
        let input = CreateCountry { code: "QQ".into() };
        assert!(input.normalized_code().is_err());
    }

    #[test]
    fn update_without_code_is_noop() {
        let input = UpdateCountry { code: None };
        assert_eq!(input.normalized_code().unwrap(), None);
    }

    #[test]
    fn displays_country_name() {
        let country = Country {
            id: 1,
            code: "ET".into(),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        assert_eq!(country.to_string(), "Ethiopia");
    }
}
