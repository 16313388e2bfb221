//! Summary metric aggregation.
//!
//! This module reduces a filtered record set to the scalar metrics shown on
//! the dashboard: hires, terminations, average tenure and retention.

use std::collections::BTreeMap;

use crate::models::{EmploymentRecord, MetricsResult, RetentionRate};

/// Computes summary metrics over `records`.
///
/// Every record counts as one hire. An empty set yields zero counts and an
/// average tenure of `0.0` rather than an error. The retention rate is
/// reported as [`RetentionRate::Unavailable`].
///
/// # Examples
///
/// ```
/// use turnover_engine::analytics::compute_metrics;
///
/// let metrics = compute_metrics(&[]);
/// assert_eq!(metrics.total_hires, 0);
/// assert_eq!(metrics.average_tenure_days, 0.0);
/// ```
pub fn compute_metrics(records: &[EmploymentRecord]) -> MetricsResult {
    if records.is_empty() {
        return MetricsResult::empty();
    }

    let total_hires = records.len();
    let total_terminations = records.iter().filter(|r| !r.is_active()).count();
    let total_tenure: i64 = records.iter().map(EmploymentRecord::tenure_days).sum();

    MetricsResult {
        total_hires,
        total_terminations,
        average_tenure_days: total_tenure as f64 / total_hires as f64,
        retention_rate: RetentionRate::Unavailable,
    }
}

/// Computes summary metrics separately for each department.
///
/// Departments appear in lexicographic order. Records without a department
/// are grouped under the empty string.
pub fn metrics_by_department(records: &[EmploymentRecord]) -> BTreeMap<String, MetricsResult> {
    let mut groups: BTreeMap<&str, Vec<EmploymentRecord>> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.department())
            .or_default()
            .push(record.clone());
    }

    groups
        .into_iter()
        .map(|(department, group)| (department.to_string(), compute_metrics(&group)))
        .collect()
}
