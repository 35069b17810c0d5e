//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Create and update DTOs expose `validate()`, which runs the field-level
//! checks and reports every failing field at once.

pub mod contact_person;
pub mod country;
pub mod country_role;
pub mod expenditure;
pub mod finance_expenditure;
pub mod organisation;
pub mod partnership;
pub mod partnership_role;
pub mod person;
pub mod person_role;
pub mod project;
pub mod sampling_activity;
pub mod sampling_document;
pub mod sdg;
pub mod sdg_role;
