//! Sampling document and document type models and DTOs.
//!
//! Documents are created by upload, so there is no JSON create DTO for them;
//! the handler builds a [`NewSamplingDocument`] after storing the file.

use std::fmt;

use livegene_core::error::CoreError;
use livegene_core::types::{DbId, Timestamp};
use livegene_core::validators::{validate_text, ValidationErrors};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

const SHORT_NAME_MAX: usize = 15;
const LONG_NAME_MAX: usize = 50;

/// A row from the `sampling_document_types` table (e.g. "MTA", "Consent form").
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SamplingDocumentType {
    pub id: DbId,
    pub short_name: String,
    pub long_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for SamplingDocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.long_name)
    }
}

/// DTO for creating a new document type.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSamplingDocumentType {
    pub short_name: String,
    pub long_name: String,
}

impl CreateSamplingDocumentType {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = ValidationErrors::new();
        errors
            .check(validate_text(&self.short_name, SHORT_NAME_MAX, "short_name"))
            .check(validate_text(&self.long_name, LONG_NAME_MAX, "long_name"));
        errors.into_result()
    }
}

/// DTO for updating a document type. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSamplingDocumentType {
    pub short_name: Option<String>,
    pub long_name: Option<String>,
}

impl UpdateSamplingDocumentType {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = ValidationErrors::new();
        errors
            .check_opt(self.short_name.as_deref(), |v| {
                validate_text(v, SHORT_NAME_MAX, "short_name")
            })
            .check_opt(self.long_name.as_deref(), |v| {
                validate_text(v, LONG_NAME_MAX, "long_name")
            });
        errors.into_result()
    }
}

/// A row from the `sampling_documents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SamplingDocument {
    pub id: DbId,
    pub sampling_activity_id: DbId,
    pub document_type_id: DbId,
    /// Path of the stored file, relative to the document storage directory.
    pub document: String,
    pub original_filename: String,
    pub content_type: String,
    pub file_size_bytes: i64,
    pub sha256: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for SamplingDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original_filename)
    }
}

/// Insert payload built after an upload has been written to storage.
#[derive(Debug, Clone)]
pub struct NewSamplingDocument {
    pub sampling_activity_id: DbId,
    pub document_type_id: DbId,
    pub document: String,
    pub original_filename: String,
    pub content_type: String,
    pub file_size_bytes: i64,
    pub sha256: String,
}

/// DTO for re-linking a document. The file itself is replaced by uploading
/// a new document.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSamplingDocument {
    pub sampling_activity_id: Option<DbId>,
    pub document_type_id: Option<DbId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_type_names_required_and_bounded() {
        let ok = CreateSamplingDocumentType {
            short_name: "MTA".into(),
            long_name: "Material Transfer Agreement".into(),
        };
        assert!(ok.validate().is_ok());

        let too_long = CreateSamplingDocumentType {
            short_name: "MATERIAL-TRANSFER".into(),
            long_name: "Material Transfer Agreement".into(),
        };
        assert!(too_long.validate().is_err());
    }
}
