//! Domain logic for the LiveGene records service.
//!
//! Everything here is pure: no database or HTTP access. The `db` crate
//! validates its DTOs with these helpers and the `api` crate serves the
//! admin registry and allocation summaries built here.

pub mod admin;
pub mod allocation;
pub mod countries;
pub mod documents;
pub mod error;
pub mod pagination;
pub mod types;
pub mod validators;
