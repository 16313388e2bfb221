//! Turnover rate aggregation.
//!
//! The rate for a period is the number of terminations in it divided by the
//! average of the headcount at the period's first day and at the next
//! period's first day, as a percentage. Every period between the earliest
//! and latest recorded date is reported, including quiet ones.

use std::collections::BTreeMap;
use std::iter;

use chrono::{Datelike, NaiveDate};

use crate::models::{EmploymentRecord, Period, RateSeries};

/// Counts the records employed on `date`.
///
/// A person counts from their hire date onwards and stops counting on
/// their termination date.
pub fn headcount_at(records: &[EmploymentRecord], date: NaiveDate) -> usize {
    records
        .iter()
        .filter(|record| {
            record.hire_date() <= date && record.termination_date().is_none_or(|left| left > date)
        })
        .count()
}

/// Builds the turnover rate timeline bucketed by `period`.
///
/// A zero average headcount is replaced by 1, so a period whose only
/// employees joined and left inside it still reports its departures.
///
/// # Examples
///
/// ```
/// use turnover_engine::analytics::turnover_rate_by_period;
/// use turnover_engine::models::{EmploymentRecord, Period};
/// use chrono::NaiveDate;
///
/// let date = |m, d| NaiveDate::from_ymd_opt(2023, m, d).unwrap();
/// let records: Vec<EmploymentRecord> = (0..4)
///     .map(|i| {
///         let left = (i == 0).then(|| date(1, 20));
///         EmploymentRecord::new("Ops", date(1, 1), left, None, date(12, 31)).unwrap()
///     })
///     .collect();
///
/// let rates = turnover_rate_by_period(&records, Period::Month);
/// assert_eq!(rates.labels, vec!["2023-01"]);
/// // 1 departure over an average headcount of (4 + 3) / 2
/// assert!((rates.values[0] - 100.0 / 3.5).abs() < 1e-9);
/// ```
pub fn turnover_rate_by_period(records: &[EmploymentRecord], period: Period) -> RateSeries {
    let Some((first, last)) = date_span(records) else {
        return RateSeries::default();
    };

    let mut terminations: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        if let (Some(year), Some(month)) = (record.termination_year(), record.termination_month()) {
            *terminations.entry(period.label(year, month)).or_insert(0) += 1;
        }
    }

    let mut series = RateSeries::default();
    let mut next = period.start_of(first);

    while let Some(start) = next.filter(|start| *start <= last) {
        let Some(end) = period.next_start(start) else {
            break;
        };

        let label = period.label(start.year(), start.month());
        let departed = terminations.get(&label).copied().unwrap_or(0);
        let headcount = headcount_at(records, start) + headcount_at(records, end);
        let average = if headcount == 0 {
            1.0
        } else {
            headcount as f64 / 2.0
        };

        series.values.push(departed as f64 / average * 100.0);
        series.labels.push(label);
        next = Some(end);
    }

    series
}

fn date_span(records: &[EmploymentRecord]) -> Option<(NaiveDate, NaiveDate)> {
    let first = records.iter().map(EmploymentRecord::hire_date).min()?;
    let last = records
        .iter()
        .flat_map(|record| iter::once(record.hire_date()).chain(record.termination_date()))
        .max()?;
    Some((first, last))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_record(hire: &str, termination: Option<&str>) -> EmploymentRecord {
        EmploymentRecord::new(
            "Ops",
            make_date(hire),
            termination.map(make_date),
            None,
            make_date("2025-01-01"),
        )
        .unwrap()
    }

    fn assert_rates(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "rates: {:?}", actual);
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "expected {:?}, got {:?}", expected, actual);
        }
    }

    #[test]
    fn test_empty_input_yields_empty_series() {
        assert_eq!(turnover_rate_by_period(&[], Period::Month), RateSeries::default());
    }

    #[test]
    fn test_headcount_excludes_termination_day() {
        let records = vec![make_record("2023-01-01", Some("2023-03-01"))];

        assert_eq!(headcount_at(&records, make_date("2022-12-31")), 0);
        assert_eq!(headcount_at(&records, make_date("2023-01-01")), 1);
        assert_eq!(headcount_at(&records, make_date("2023-02-28")), 1);
        assert_eq!(headcount_at(&records, make_date("2023-03-01")), 0);
    }

    #[test]
    fn test_rate_uses_average_of_opening_and_closing_headcount() {
        let records = vec![
            make_record("2023-01-10", Some("2023-02-15")),
            make_record("2022-12-01", None),
        ];

        // Dec: 1 open, 1 close, no departures
        // Jan: 1 open, 2 close, no departures
        // Feb: 2 open, 1 close -> avg 1.5, one departure
        let rates = turnover_rate_by_period(&records, Period::Month);
        assert_eq!(rates.labels, vec!["2022-12", "2023-01", "2023-02"]);
        assert_rates(&rates.values, &[0.0, 0.0, 100.0 / 1.5]);
    }

    #[test]
    fn test_zero_headcount_is_replaced_by_one() {
        let records = vec![make_record("2023-03-10", Some("2023-03-20"))];

        let rates = turnover_rate_by_period(&records, Period::Month);
        assert_eq!(rates.labels, vec!["2023-03"]);
        assert_rates(&rates.values, &[100.0]);
    }

    #[test]
    fn test_quiet_periods_are_reported_as_zero() {
        let records = vec![
            make_record("2023-01-05", None),
            make_record("2023-04-05", None),
        ];

        let rates = turnover_rate_by_period(&records, Period::Month);
        assert_eq!(rates.labels, vec!["2023-01", "2023-02", "2023-03", "2023-04"]);
        assert_rates(&rates.values, &[0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_quarterly_rates() {
        let records = vec![
            make_record("2023-01-10", None),
            make_record("2023-02-05", Some("2023-06-01")),
        ];

        // Q1: 0 open, 2 close -> avg 1
        // Q2: 2 open, 1 close -> avg 1.5, one departure
        let rates = turnover_rate_by_period(&records, Period::Quarter);
        assert_eq!(rates.labels, vec!["2023-Q1", "2023-Q2"]);
        assert_rates(&rates.values, &[0.0, 100.0 / 1.5]);
    }

    #[test]
    fn test_yearly_span_includes_termination_year() {
        let records = vec![make_record("2022-06-01", Some("2024-02-01"))];

        let rates = turnover_rate_by_period(&records, Period::Year);
        assert_eq!(rates.labels, vec!["2022", "2023", "2024"]);
        // 2024: 1 open, 0 close -> avg 0.5
        assert_rates(&rates.values, &[0.0, 0.0, 200.0]);
    }
}
