//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. Use [`DataResponse`]
//! instead of ad-hoc `serde_json::json!({ "data": ... })` to get
//! compile-time type safety and consistent serialization.

use std::fmt;

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// A row together with its human-readable label, as shown in admin listings.
#[derive(Debug, Serialize)]
pub struct Labeled<T: Serialize> {
    #[serde(flatten)]
    pub row: T,
    pub label: String,
}

impl<T: Serialize> Labeled<T> {
    pub fn with_label(row: T, label: String) -> Self {
        Self { row, label }
    }
}

impl<T: Serialize + fmt::Display> Labeled<T> {
    pub fn new(row: T) -> Self {
        let label = row.to_string();
        Self { row, label }
    }

    pub fn all(rows: Vec<T>) -> Vec<Self> {
        rows.into_iter().map(Self::new).collect()
    }
}

/// Role detail carrying the read-only `total_percentage` of its project.
#[derive(Debug, Serialize)]
pub struct RoleDetail<T: Serialize> {
    #[serde(flatten)]
    pub role: Labeled<T>,
    pub total_percentage: i64,
}

/// Detail of an entity with a `logo_url`, carrying the rendered `logo`.
#[derive(Debug, Serialize)]
pub struct LogoDetail<T: Serialize> {
    #[serde(flatten)]
    pub row: Labeled<T>,
    pub logo: String,
}
