//! Request handlers.
//!
//! Each submodule provides async handler functions (create, list, get_by_id,
//! update, delete) for a single entity type. Handlers run the input DTO's
//! `validate()`, delegate to the corresponding repository in `livegene_db`
//! and map errors via [`AppError`](crate::error::AppError).

pub mod admin;
pub mod contact_person;
pub mod country;
pub mod country_role;
pub mod expenditure;
pub mod finance_expenditure;
pub mod organisation;
pub mod partnership;
pub mod partnership_role;
pub mod partnership_role_type;
pub mod person;
pub mod person_role;
pub mod project;
mod role_label;
pub mod sampling_activity;
pub mod sampling_document;
pub mod sampling_document_type;
pub mod sdg;
pub mod sdg_role;
