//! Tenure-at-departure histogram.

use crate::models::{DistributionSeries, EmploymentRecord};

/// Buckets the tenure of departed employees into a histogram.
///
/// `bucket_edges_days` are ascending day thresholds; each edge starts a new
/// bucket, so edges `[90, 365]` yield the buckets `0-89`, `90-364` and
/// `365+`. Every bucket is emitted, empty ones with a count of `0`. Active
/// records are ignored.
///
/// Edges are expected to be positive and strictly ascending, which the
/// configuration loader enforces.
///
/// # Examples
///
/// ```
/// use turnover_engine::analytics::tenure_distribution;
/// use turnover_engine::models::EmploymentRecord;
/// use chrono::NaiveDate;
///
/// let hired = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
/// let left = NaiveDate::from_ymd_opt(2023, 2, 1).unwrap();
/// let record = EmploymentRecord::new("Ops", hired, Some(left), None, left).unwrap();
///
/// let histogram = tenure_distribution(&[record], &[90, 365]);
/// assert_eq!(histogram.labels, vec!["0-89", "90-364", "365+"]);
/// assert_eq!(histogram.values, vec![1, 0, 0]);
/// ```
pub fn tenure_distribution(
    records: &[EmploymentRecord],
    bucket_edges_days: &[i64],
) -> DistributionSeries {
    let labels = bucket_labels(bucket_edges_days);
    let mut values = vec![0; labels.len()];

    for record in records.iter().filter(|r| !r.is_active()) {
        let bucket = bucket_edges_days
            .iter()
            .take_while(|edge| record.tenure_days() >= **edge)
            .count();
        values[bucket] += 1;
    }

    DistributionSeries { labels, values }
}

fn bucket_labels(edges: &[i64]) -> Vec<String> {
    let mut labels = Vec::with_capacity(edges.len() + 1);
    let mut lower = 0;
    for edge in edges {
        labels.push(format!("{}-{}", lower, edge - 1));
        lower = *edge;
    }
    labels.push(format!("{}+", lower));
    labels
}
