//! Termination reason distribution.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::models::{DistributionSeries, EmploymentRecord};

/// Counts departures by termination reason.
///
/// Only records with both a termination date and a reason contribute;
/// active records are ignored entirely. Labels are ordered by count,
/// highest first, with ties broken by lexicographic label order.
///
/// # Examples
///
/// ```
/// use turnover_engine::analytics::termination_reason_distribution;
/// use turnover_engine::models::EmploymentRecord;
/// use chrono::NaiveDate;
///
/// let hired = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
/// let left = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
/// let departure = |reason: &str| {
///     EmploymentRecord::new("Sales", hired, Some(left), Some(reason.to_string()), left).unwrap()
/// };
///
/// let records = vec![departure("Layoff"), departure("Resignation"), departure("Resignation")];
/// let distribution = termination_reason_distribution(&records);
///
/// assert_eq!(distribution.labels, vec!["Resignation", "Layoff"]);
/// assert_eq!(distribution.values, vec![2, 1]);
/// ```
pub fn termination_reason_distribution(records: &[EmploymentRecord]) -> DistributionSeries {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records.iter().filter(|r| !r.is_active()) {
        if let Some(reason) = record.termination_reason() {
            *counts.entry(reason).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by_key(|(reason, count)| (Reverse(*count), *reason));

    let (labels, values) = ranked
        .into_iter()
        .map(|(reason, count)| (reason.to_string(), count))
        .unzip();

    DistributionSeries { labels, values }
}
