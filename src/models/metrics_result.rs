//! Summary metric models.
//!
//! This module contains the [`MetricsResult`] returned by the metrics
//! aggregator and the [`RetentionRate`] value it carries.

use serde::{Serialize, Serializer};

/// The sentinel emitted for metrics the engine cannot compute.
pub const UNAVAILABLE_METRIC: &str = "N/A";

/// A retention rate that may not be available.
///
/// No retention formula has been agreed on yet, so the aggregator reports
/// [`RetentionRate::Unavailable`]. It serializes as the string `"N/A"`;
/// an available rate serializes as a plain number.
///
/// # Example
///
/// ```
/// use turnover_engine::models::RetentionRate;
///
/// let json = serde_json::to_string(&RetentionRate::Unavailable).unwrap();
/// assert_eq!(json, "\"N/A\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RetentionRate {
    /// The rate could not be computed.
    Unavailable,
    /// The rate as a percentage.
    Available(f64),
}

impl RetentionRate {
    /// Returns the rate, or `None` if unavailable.
    pub fn value(&self) -> Option<f64> {
        match self {
            RetentionRate::Unavailable => None,
            RetentionRate::Available(rate) => Some(*rate),
        }
    }
}

impl Serialize for RetentionRate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RetentionRate::Unavailable => serializer.serialize_str(UNAVAILABLE_METRIC),
            RetentionRate::Available(rate) => serializer.serialize_f64(*rate),
        }
    }
}

/// Scalar summary metrics over a filtered set of employment records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsResult {
    /// Number of records in the set; each record is one hire event.
    pub total_hires: usize,
    /// Number of records with a termination date.
    pub total_terminations: usize,
    /// Mean tenure in days, `0.0` for an empty set.
    pub average_tenure_days: f64,
    /// Share of the cohort still employed.
    pub retention_rate: RetentionRate,
}

impl MetricsResult {
    /// Metrics for an empty record set.
    pub fn empty() -> Self {
        Self {
            total_hires: 0,
            total_terminations: 0,
            average_tenure_days: 0.0,
            retention_rate: RetentionRate::Unavailable,
        }
    }

    /// Number of records without a termination date.
    pub fn active_employees(&self) -> usize {
        self.total_hires.saturating_sub(self.total_terminations)
    }
}
