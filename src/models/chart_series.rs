//! Chart series models.
//!
//! This module contains the chart types the engine can produce, the
//! time-bucketing [`Period`], and the label/value series handed back to
//! the charting client.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The charts the engine knows how to aggregate.
///
/// # Example
///
/// ```
/// use turnover_engine::models::ChartType;
///
/// let chart: ChartType = "hires_terminations_timeline".parse().unwrap();
/// assert_eq!(chart, ChartType::HiresTerminationsTimeline);
/// assert!("pie".parse::<ChartType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartType {
    /// Hires and terminations per period on a shared label axis.
    HiresTerminationsTimeline,
    /// Departures grouped by termination reason.
    TerminationReasonDistribution,
    /// Histogram of tenure at departure.
    TenureDistribution,
    /// Terminations per period as a percentage of average headcount.
    TurnoverRateTimeline,
}

impl ChartType {
    /// Every supported chart type.
    pub const ALL: [ChartType; 4] = [
        ChartType::HiresTerminationsTimeline,
        ChartType::TerminationReasonDistribution,
        ChartType::TenureDistribution,
        ChartType::TurnoverRateTimeline,
    ];

    /// The wire name of the chart type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::HiresTerminationsTimeline => "hires_terminations_timeline",
            ChartType::TerminationReasonDistribution => "termination_reason_distribution",
            ChartType::TenureDistribution => "tenure_distribution",
            ChartType::TurnoverRateTimeline => "turnover_rate_timeline",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartType::ALL
            .into_iter()
            .find(|chart| chart.as_str() == s)
            .ok_or_else(|| EngineError::UnsupportedChartType {
                chart_type: s.to_string(),
            })
    }
}

/// The calendar period used to bucket timeline charts.
///
/// Accepts the single-letter codes `M`, `Q` and `Y` when deserialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    /// Calendar months, labelled `YYYY-MM`.
    #[default]
    #[serde(alias = "M")]
    Month,
    /// Calendar quarters, labelled `YYYY-Qn`.
    #[serde(alias = "Q")]
    Quarter,
    /// Calendar years, labelled `YYYY`.
    #[serde(alias = "Y")]
    Year,
}

impl Period {
    /// Formats the bucket label for the given year and month (1-12).
    ///
    /// Labels of one period kind sort lexicographically in chronological
    /// order.
    ///
    /// # Example
    ///
    /// ```
    /// use turnover_engine::models::Period;
    ///
    /// assert_eq!(Period::Month.label(2024, 3), "2024-03");
    /// assert_eq!(Period::Quarter.label(2024, 3), "2024-Q1");
    /// assert_eq!(Period::Year.label(2024, 3), "2024");
    /// ```
    pub fn label(&self, year: i32, month: u32) -> String {
        match self {
            Period::Month => format!("{:04}-{:02}", year, month),
            Period::Quarter => format!("{:04}-Q{}", year, (month - 1) / 3 + 1),
            Period::Year => format!("{:04}", year),
        }
    }

    /// Returns the first day of the period containing `date`.
    pub fn start_of(&self, date: NaiveDate) -> Option<NaiveDate> {
        let month = match self {
            Period::Month => date.month(),
            Period::Quarter => (date.month() - 1) / 3 * 3 + 1,
            Period::Year => 1,
        };
        NaiveDate::from_ymd_opt(date.year(), month, 1)
    }

    /// Returns the first day of the period after the one starting at `start`.
    pub fn next_start(&self, start: NaiveDate) -> Option<NaiveDate> {
        let months = match self {
            Period::Month => 1,
            Period::Quarter => 3,
            Period::Year => 12,
        };
        start.checked_add_months(Months::new(months))
    }
}

/// Hires and terminations co-indexed to one sorted label axis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSeries {
    /// Period labels in ascending order.
    pub labels: Vec<String>,
    /// Hire counts, one per label.
    pub hires: Vec<usize>,
    /// Termination counts, one per label.
    pub terminations: Vec<usize>,
}

/// A single label/value series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionSeries {
    /// Category labels.
    pub labels: Vec<String>,
    /// Counts, one per label.
    pub values: Vec<usize>,
}

impl DistributionSeries {
    /// Sum of all values.
    pub fn total(&self) -> usize {
        self.values.iter().sum()
    }
}

/// A percentage per period label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateSeries {
    /// Period labels in ascending order.
    pub labels: Vec<String>,
    /// Percentages, one per label.
    pub values: Vec<f64>,
}

/// Chart data returned by a chart query.
///
/// Serializes untagged, so the client sees the bare series object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChartSeries {
    /// A hires/terminations timeline.
    Timeline(TimelineSeries),
    /// A categorical distribution.
    Distribution(DistributionSeries),
    /// A rate timeline.
    Rate(RateSeries),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_type_round_trips_through_str() {
        for chart in ChartType::ALL {
            assert_eq!(chart.as_str().parse::<ChartType>().unwrap(), chart);
            assert_eq!(chart.to_string(), chart.as_str());
        }
    }

    #[test]
    fn test_unknown_chart_type_is_unsupported() {
        let err = "headcount_heatmap".parse::<ChartType>().unwrap_err();
        assert!(matches!(
            err,
            EngineError::UnsupportedChartType { chart_type } if chart_type == "headcount_heatmap"
        ));
    }

    #[test]
    fn test_period_accepts_letter_codes() {
        assert_eq!(serde_json::from_str::<Period>("\"M\"").unwrap(), Period::Month);
        assert_eq!(serde_json::from_str::<Period>("\"Q\"").unwrap(), Period::Quarter);
        assert_eq!(serde_json::from_str::<Period>("\"Y\"").unwrap(), Period::Year);
        assert_eq!(serde_json::from_str::<Period>("\"year\"").unwrap(), Period::Year);
    }

    #[test]
    fn test_quarter_labels() {
        assert_eq!(Period::Quarter.label(2023, 1), "2023-Q1");
        assert_eq!(Period::Quarter.label(2023, 4), "2023-Q2");
        assert_eq!(Period::Quarter.label(2023, 9), "2023-Q3");
        assert_eq!(Period::Quarter.label(2023, 12), "2023-Q4");
    }

    #[test]
    fn test_month_labels_are_zero_padded() {
        assert_eq!(Period::Month.label(2023, 9), "2023-09");
        assert!(Period::Month.label(2023, 9) < Period::Month.label(2023, 10));
    }

    #[test]
    fn test_period_start_of() {
        let date = NaiveDate::from_ymd_opt(2023, 8, 17).unwrap();
        assert_eq!(Period::Month.start_of(date), NaiveDate::from_ymd_opt(2023, 8, 1));
        assert_eq!(Period::Quarter.start_of(date), NaiveDate::from_ymd_opt(2023, 7, 1));
        assert_eq!(Period::Year.start_of(date), NaiveDate::from_ymd_opt(2023, 1, 1));
    }

    #[test]
    fn test_period_next_start_rolls_over_year() {
        let start = NaiveDate::from_ymd_opt(2023, 10, 1).unwrap();
        assert_eq!(Period::Month.next_start(start), NaiveDate::from_ymd_opt(2023, 11, 1));
        assert_eq!(Period::Quarter.next_start(start), NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(Period::Year.next_start(start), NaiveDate::from_ymd_opt(2024, 10, 1));
    }

    #[test]
    fn test_chart_series_serializes_untagged() {
        let series = ChartSeries::Distribution(DistributionSeries {
            labels: vec!["Resignation".to_string()],
            values: vec![3],
        });

        let json = serde_json::to_value(&series).unwrap();
        assert_eq!(json["labels"][0], "Resignation");
        assert_eq!(json["values"][0], 3);
    }
}
