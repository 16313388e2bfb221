//! Filter evaluation functionality.
//!
//! A [`FilterSpec`] is applied independently to every record; filtering never
//! mutates the records it is given.

use crate::models::{EmploymentRecord, FilterSpec};

/// Returns true if `record` satisfies every restriction in `filter`.
///
/// The rules are ANDed:
/// - `start_date`: the hire date is on or after it
/// - `end_date`: the hire date is on or before it
/// - `departments`: if non-empty, the record's department is a member
///
/// An inverted range (start after end) matches nothing.
///
/// # Examples
///
/// ```
/// use turnover_engine::analytics::matches;
/// use turnover_engine::models::{EmploymentRecord, FilterSpec};
/// use chrono::NaiveDate;
///
/// let hired = NaiveDate::from_ymd_opt(2023, 1, 10).unwrap();
/// let record = EmploymentRecord::new("Sales", hired, None, None, hired).unwrap();
///
/// assert!(matches(&record, &FilterSpec::new().with_start_date(hired)));
/// assert!(!matches(&record, &FilterSpec::new().with_departments(["Eng"])));
/// ```
pub fn matches(record: &EmploymentRecord, filter: &FilterSpec) -> bool {
    let hire_date = record.hire_date();

    if filter.start_date.is_some_and(|start| hire_date < start) {
        return false;
    }

    if filter.end_date.is_some_and(|end| hire_date > end) {
        return false;
    }

    filter.departments.is_empty() || filter.departments.contains(record.department())
}

/// Returns the records that satisfy `filter`, in input order.
///
/// Filtering is a stable subset operation, so applying the same filter to
/// its own output returns an equal collection.
pub fn filter_records(records: &[EmploymentRecord], filter: &FilterSpec) -> Vec<EmploymentRecord> {
    if filter.is_unrestricted() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| matches(record, filter))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_record(department: &str, hire: &str) -> EmploymentRecord {
        EmploymentRecord::new(department, make_date(hire), None, None, make_date("2024-01-01"))
            .unwrap()
    }

    fn sample_records() -> Vec<EmploymentRecord> {
        vec![
            make_record("Sales", "2023-01-10"),
            make_record("Eng", "2023-02-05"),
            make_record("Sales", "2023-03-20"),
            make_record("Ops", "2023-04-01"),
        ]
    }

    #[test]
    fn test_unrestricted_filter_keeps_everything() {
        let records = sample_records();
        assert_eq!(filter_records(&records, &FilterSpec::new()), records);
    }

    #[test]
    fn test_start_date_is_inclusive() {
        let filter = FilterSpec::new().with_start_date(make_date("2023-02-05"));
        let filtered = filter_records(&sample_records(), &filter);

        assert_eq!(filtered.len(), 3);
        assert_eq!(filtered[0].hire_date(), make_date("2023-02-05"));
    }

    #[test]
    fn test_end_date_is_inclusive() {
        let filter = FilterSpec::new().with_end_date(make_date("2023-03-20"));
        let filtered = filter_records(&sample_records(), &filter);

        assert_eq!(filtered.len(), 3);
        assert_eq!(filtered[2].hire_date(), make_date("2023-03-20"));
    }

    #[test]
    fn test_start_date_alone_applies_without_end_date() {
        let filter = FilterSpec::new().with_start_date(make_date("2023-04-01"));
        let filtered = filter_records(&sample_records(), &filter);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].department(), "Ops");
    }

    #[test]
    fn test_department_filter() {
        let filter = FilterSpec::new().with_departments(["Sales", "Ops"]);
        let filtered = filter_records(&sample_records(), &filter);

        let departments: Vec<&str> = filtered.iter().map(|r| r.department()).collect();
        assert_eq!(departments, vec!["Sales", "Sales", "Ops"]);
    }

    #[test]
    fn test_department_filter_is_case_sensitive() {
        let filter = FilterSpec::new().with_departments(["sales"]);
        assert!(filter_records(&sample_records(), &filter).is_empty());
    }

    #[test]
    fn test_rules_are_anded() {
        let filter = FilterSpec::new()
            .with_start_date(make_date("2023-02-01"))
            .with_end_date(make_date("2023-12-31"))
            .with_departments(["Sales"]);
        let filtered = filter_records(&sample_records(), &filter);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].hire_date(), make_date("2023-03-20"));
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let filter = FilterSpec::new()
            .with_start_date(make_date("2023-12-31"))
            .with_end_date(make_date("2023-01-01"));
        assert!(filter_records(&sample_records(), &filter).is_empty());
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let filter = FilterSpec::new()
            .with_start_date(make_date("2023-02-01"))
            .with_departments(["Sales", "Eng"]);

        let once = filter_records(&sample_records(), &filter);
        let twice = filter_records(&once, &filter);
        assert_eq!(once, twice);
    }
}
