//! Shared query parameter types for API handlers.

use livegene_core::types::DbId;
use serde::Deserialize;

/// Generic pagination parameters (`?limit=&offset=`).
///
/// Values are clamped in the repository layer via `clamp_limit` /
/// `clamp_offset`.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Pagination plus an optional `?project_id=` filter, for collections of
/// rows that belong to a project (roles, expenditures, sampling activities).
#[derive(Debug, Deserialize)]
pub struct ProjectFilterParams {
    pub project_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Pagination plus an optional `?sampling_activity_id=` filter.
#[derive(Debug, Deserialize)]
pub struct ActivityFilterParams {
    pub sampling_activity_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
