//! Partnership role model and DTOs: what part a partnership plays in a project.

use std::fmt;

use livegene_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `partnership_roles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PartnershipRole {
    pub id: DbId,
    pub project_id: DbId,
    pub partnership_id: DbId,
    pub role_type_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for PartnershipRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Project {} - Partnership {}",
            self.project_id, self.partnership_id
        )
    }
}

/// DTO for creating a new partnership role.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePartnershipRole {
    pub project_id: DbId,
    pub partnership_id: DbId,
    pub role_type_id: DbId,
}

/// DTO for updating an existing partnership role. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePartnershipRole {
    pub project_id: Option<DbId>,
    pub partnership_id: Option<DbId>,
    pub role_type_id: Option<DbId>,
}
