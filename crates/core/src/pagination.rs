//! Limit/offset clamping shared by every list query.

/// Page size used when the caller does not ask for one.
pub const DEFAULT_LIMIT: i64 = 100;

/// Largest page a caller may request.
pub const MAX_LIMIT: i64 = 500;

pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}

pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
