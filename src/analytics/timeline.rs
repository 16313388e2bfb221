//! Hires/terminations timeline aggregation.
//!
//! Records are bucketed by calendar period into two counts that share one
//! label axis, so the client can plot both series against the same x values.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{EmploymentRecord, Period, TimelineSeries};

/// Builds the monthly hires/terminations timeline.
///
/// Equivalent to [`timeline_by_period`] with [`Period::Month`]; labels are
/// `YYYY-MM`.
///
/// # Examples
///
/// ```
/// use turnover_engine::analytics::hires_terminations_timeline;
/// use turnover_engine::models::EmploymentRecord;
/// use chrono::NaiveDate;
///
/// let date = |m| NaiveDate::from_ymd_opt(2023, m, 1).unwrap();
/// let records = vec![
///     EmploymentRecord::new("Sales", date(1), Some(date(2)), None, date(12)).unwrap(),
///     EmploymentRecord::new("Sales", date(3), None, None, date(12)).unwrap(),
/// ];
///
/// let timeline = hires_terminations_timeline(&records);
/// assert_eq!(timeline.labels, vec!["2023-01", "2023-02", "2023-03"]);
/// assert_eq!(timeline.hires, vec![1, 0, 1]);
/// assert_eq!(timeline.terminations, vec![0, 1, 0]);
/// ```
pub fn hires_terminations_timeline(records: &[EmploymentRecord]) -> TimelineSeries {
    timeline_by_period(records, Period::Month)
}

/// Builds a hires/terminations timeline bucketed by `period`.
///
/// Hires are counted in the period of each hire date. Terminations are
/// counted in the period of each termination date, for terminated records
/// only. The label axis is the sorted union of both key sets, and a period
/// missing from one series is filled with `0`.
pub fn timeline_by_period(records: &[EmploymentRecord], period: Period) -> TimelineSeries {
    let mut hires: BTreeMap<String, usize> = BTreeMap::new();
    let mut terminations: BTreeMap<String, usize> = BTreeMap::new();

    for record in records {
        let hire_key = period.label(record.hire_year(), record.hire_month());
        *hires.entry(hire_key).or_insert(0) += 1;

        if let (Some(year), Some(month)) = (record.termination_year(), record.termination_month()) {
            *terminations.entry(period.label(year, month)).or_insert(0) += 1;
        }
    }

    let labels: BTreeSet<&String> = hires.keys().chain(terminations.keys()).collect();

    let mut series = TimelineSeries::default();
    for label in labels {
        series.hires.push(hires.get(label).copied().unwrap_or(0));
        series
            .terminations
            .push(terminations.get(label).copied().unwrap_or(0));
        series.labels.push(label.clone());
    }

    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_record(hire: &str, termination: Option<&str>) -> EmploymentRecord {
        EmploymentRecord::new(
            "Sales",
            make_date(hire),
            termination.map(make_date),
            None,
            make_date("2025-01-01"),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_input_yields_empty_series() {
        assert_eq!(hires_terminations_timeline(&[]), TimelineSeries::default());
    }

    #[test]
    fn test_month_without_terminations_is_gap_filled() {
        let records = vec![
            make_record("2024-01-05", None),
            make_record("2024-01-20", None),
        ];

        let timeline = hires_terminations_timeline(&records);
        assert_eq!(timeline.labels, vec!["2024-01"]);
        assert_eq!(timeline.hires, vec![2]);
        assert_eq!(timeline.terminations, vec![0]);
    }

    #[test]
    fn test_termination_only_month_appears_with_zero_hires() {
        let records = vec![make_record("2023-11-01", Some("2024-02-15"))];

        let timeline = hires_terminations_timeline(&records);
        assert_eq!(timeline.labels, vec!["2023-11", "2024-02"]);
        assert_eq!(timeline.hires, vec![1, 0]);
        assert_eq!(timeline.terminations, vec![0, 1]);
    }

    #[test]
    fn test_months_without_events_are_not_invented() {
        let records = vec![
            make_record("2023-01-10", None),
            make_record("2023-06-10", None),
        ];

        let timeline = hires_terminations_timeline(&records);
        assert_eq!(timeline.labels, vec!["2023-01", "2023-06"]);
    }

    #[test]
    fn test_labels_sorted_across_year_boundary() {
        let records = vec![
            make_record("2024-02-01", None),
            make_record("2023-12-01", Some("2024-01-15")),
            make_record("2023-10-01", None),
        ];

        let timeline = hires_terminations_timeline(&records);
        assert_eq!(timeline.labels, vec!["2023-10", "2023-12", "2024-01", "2024-02"]);
        assert_eq!(timeline.hires, vec![1, 1, 0, 1]);
        assert_eq!(timeline.terminations, vec![0, 0, 1, 0]);
    }

    #[test]
    fn test_series_lengths_match_labels() {
        let records = vec![
            make_record("2023-01-10", Some("2023-05-01")),
            make_record("2023-02-10", Some("2023-05-20")),
            make_record("2023-02-11", None),
        ];

        let timeline = hires_terminations_timeline(&records);
        assert_eq!(timeline.labels.len(), timeline.hires.len());
        assert_eq!(timeline.labels.len(), timeline.terminations.len());
        assert_eq!(timeline.hires.iter().sum::<usize>(), 3);
        assert_eq!(timeline.terminations.iter().sum::<usize>(), 2);
    }

    #[test]
    fn test_quarterly_timeline() {
        let records = vec![
            make_record("2023-01-10", Some("2023-05-01")),
            make_record("2023-03-31", None),
            make_record("2023-11-02", None),
        ];

        let timeline = timeline_by_period(&records, Period::Quarter);
        assert_eq!(timeline.labels, vec!["2023-Q1", "2023-Q2", "2023-Q4"]);
        assert_eq!(timeline.hires, vec![2, 0, 1]);
        assert_eq!(timeline.terminations, vec![0, 1, 0]);
    }

    #[test]
    fn test_yearly_timeline() {
        let records = vec![
            make_record("2022-01-15", None),
            make_record("2022-02-20", Some("2023-01-10")),
        ];

        let timeline = timeline_by_period(&records, Period::Year);
        assert_eq!(timeline.labels, vec!["2022", "2023"]);
        assert_eq!(timeline.hires, vec![2, 0]);
        assert_eq!(timeline.terminations, vec![0, 1]);
    }
}
