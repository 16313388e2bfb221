//! Query-time filter criteria.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A predicate over hire-date range and department membership.
///
/// A `FilterSpec` is built fresh for every query. Absent bounds and an empty
/// department set place no restriction on the records.
///
/// # Example
///
/// ```
/// use turnover_engine::models::FilterSpec;
/// use chrono::NaiveDate;
///
/// let filter = FilterSpec::new()
///     .with_start_date(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap())
///     .with_departments(["Sales", "Eng"]);
///
/// assert!(filter.end_date.is_none());
/// assert_eq!(filter.departments.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Earliest hire date to include (inclusive).
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Latest hire date to include (inclusive).
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Departments to include. Empty means every department.
    #[serde(default)]
    pub departments: BTreeSet<String>,
}

impl FilterSpec {
    /// Creates an unrestricted filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the inclusive lower bound on hire date.
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Sets the inclusive upper bound on hire date.
    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Restricts the filter to the given departments.
    pub fn with_departments<I, S>(mut self, departments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.departments = departments.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true if the filter lets every record through.
    pub fn is_unrestricted(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none() && self.departments.is_empty()
    }
}
