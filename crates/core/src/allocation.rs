//! Percentage allocation summaries for a project's role rows.
//!
//! A project splits its effort across people, countries and SDGs. The
//! per-row `percent` is bounded to `[0, 100]`, but the sum across rows is
//! only reported here, never enforced.

use serde::Serialize;

use crate::validators::MAX_PERCENT;

/// Sum of role percentages. Widened so arbitrarily many rows cannot overflow.
pub fn total_percent<I>(percents: I) -> i64
where
    I: IntoIterator<Item = i16>,
{
    percents.into_iter().map(i64::from).sum()
}

/// How one kind of role rows adds up for a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationSummary {
    /// Number of role rows counted.
    pub rows: usize,
    /// Sum of their percentages.
    pub total: i64,
    /// Percentage still unallocated; zero once the total reaches 100.
    pub remaining: i64,
    /// Exactly 100.
    pub is_complete: bool,
    /// More than 100.
    pub is_over: bool,
}

impl AllocationSummary {
    pub fn from_percents(percents: &[i16]) -> Self {
        let total = total_percent(percents.iter().copied());
        let full = i64::from(MAX_PERCENT);
        Self {
            rows: percents.len(),
            total,
            remaining: (full - total).max(0),
            is_complete: total == full,
            is_over: total > full,
        }
    }
}

/// Allocation summaries for every role kind of one project.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectAllocations {
    pub project_id: i64,
    pub people: AllocationSummary,
    pub countries: AllocationSummary,
    pub sdgs: AllocationSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_of_nothing_is_zero() {
        assert_eq!(total_percent(Vec::new()), 0);
    }

    #[test]
    fn total_does_not_overflow_i16() {
        let many = vec![100_i16; 400];
        assert_eq!(total_percent(many), 40_000);
    }

    #[test]
    fn complete_allocation() {
        let summary = AllocationSummary::from_percents(&[60, 40]);
        assert_eq!(summary.rows, 2);
        assert_eq!(summary.total, 100);
        assert_eq!(summary.remaining, 0);
        assert!(summary.is_complete);
        assert!(!summary.is_over);
    }

    #[test]
    fn partial_allocation_reports_remaining() {
        let summary = AllocationSummary::from_percents(&[25, 30]);
        assert_eq!(summary.remaining, 45);
        assert!(!summary.is_complete);
    }

    #[test]
    fn over_allocation_is_reported_not_rejected() {
        let summary = AllocationSummary::from_percents(&[80, 50]);
        assert_eq!(summary.total, 130);
        assert_eq!(summary.remaining, 0);
        assert!(summary.is_over);
        assert!(!summary.is_complete);
    }
}
