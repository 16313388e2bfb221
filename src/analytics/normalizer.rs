//! Record normalization functionality.
//!
//! This module is the single validation boundary between untyped rows from
//! the upstream spreadsheet/CSV loader and the strict [`EmploymentRecord`]
//! model. No other part of the engine looks at raw cell values.

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, Utc};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{CellValue, EmploymentRecord, RawRow};

/// Largest spreadsheet serial accepted as a date (9999-12-31).
const MAX_SERIAL_DATE: f64 = 2_958_465.0;

/// Normalizes a batch of raw rows into employment records.
///
/// Each row must carry a parseable hire date; the termination date,
/// department and termination reason cells are optional. Active records
/// measure tenure up to `evaluation_date`.
///
/// The batch is all-or-nothing: the first invalid row aborts normalization
/// and no records are returned. Output order matches input order.
///
/// # Errors
///
/// Returns [`EngineError::Validation`] naming the 1-based row and the column
/// if a row has no hire date, an unparseable date, or a termination date
/// before its hire date.
///
/// # Examples
///
/// ```
/// use turnover_engine::analytics::normalize;
/// use turnover_engine::config::EngineConfig;
/// use turnover_engine::models::{CellValue, RawRow};
/// use chrono::NaiveDate;
///
/// let mut row = RawRow::new();
/// row.insert("hire_date".into(), CellValue::from("2023-01-10"));
/// row.insert("department".into(), CellValue::from("Sales"));
///
/// let evaluation_date = NaiveDate::from_ymd_opt(2023, 2, 9).unwrap();
/// let records = normalize(&[row], &EngineConfig::default(), evaluation_date).unwrap();
///
/// assert_eq!(records[0].department(), "Sales");
/// assert_eq!(records[0].tenure_days(), 30);
/// ```
pub fn normalize(
    rows: &[RawRow],
    config: &EngineConfig,
    evaluation_date: NaiveDate,
) -> EngineResult<Vec<EmploymentRecord>> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| normalize_row(row, index + 1, config, evaluation_date))
        .collect()
}

/// Normalizes a batch of raw rows, evaluating active tenure as of today (UTC).
pub fn normalize_now(rows: &[RawRow], config: &EngineConfig) -> EngineResult<Vec<EmploymentRecord>> {
    normalize(rows, config, Utc::now().date_naive())
}

fn normalize_row(
    row: &RawRow,
    row_number: usize,
    config: &EngineConfig,
    evaluation_date: NaiveDate,
) -> EngineResult<EmploymentRecord> {
    let columns = &config.columns;

    let hire_date = match row.get(&columns.hire_date) {
        Some(cell) if !cell.is_blank() => parse_date_cell(cell, config)
            .ok_or_else(|| unparseable_date(row_number, &columns.hire_date, cell))?,
        _ => {
            return Err(EngineError::Validation {
                row: row_number,
                field: columns.hire_date.clone(),
                message: "missing hire date".to_string(),
            });
        }
    };

    let termination_date = match row.get(&columns.termination_date) {
        Some(cell) if !cell.is_blank() => Some(
            parse_date_cell(cell, config)
                .ok_or_else(|| unparseable_date(row_number, &columns.termination_date, cell))?,
        ),
        _ => None,
    };

    let department = row
        .get(&columns.department)
        .and_then(CellValue::as_text)
        .unwrap_or_default();
    let termination_reason = row
        .get(&columns.termination_reason)
        .and_then(CellValue::as_text);

    EmploymentRecord::new(
        department,
        hire_date,
        termination_date,
        termination_reason,
        evaluation_date,
    )
    .map_err(|err| EngineError::Validation {
        row: row_number,
        field: columns.termination_date.clone(),
        message: err.to_string(),
    })
}

fn unparseable_date(row_number: usize, field: &str, cell: &CellValue) -> EngineError {
    EngineError::Validation {
        row: row_number,
        field: field.to_string(),
        message: format!(
            "unparseable date '{}'",
            cell.as_text().unwrap_or_default()
        ),
    }
}

/// Reads a calendar date out of a single cell.
///
/// Text is tried against each configured format, then as RFC 3339. Numbers
/// are spreadsheet serial dates when `accept_serial_dates` is set.
pub fn parse_date_cell(cell: &CellValue, config: &EngineConfig) -> Option<NaiveDate> {
    match cell {
        CellValue::Empty => None,
        CellValue::Date(date) => Some(*date),
        CellValue::Number(serial) if config.accept_serial_dates => serial_to_date(*serial),
        CellValue::Number(_) => None,
        CellValue::Text(text) => parse_date_text(text.trim(), &config.date_formats),
    }
}

/// Parses a date string with the given `chrono` formats, falling back to
/// RFC 3339. Date-time formats keep only the date part.
///
/// # Examples
///
/// ```
/// use turnover_engine::analytics::parse_date_text;
/// use chrono::NaiveDate;
///
/// let formats = vec!["%d/%m/%Y".to_string()];
/// assert_eq!(
///     parse_date_text("05/02/2023", &formats),
///     NaiveDate::from_ymd_opt(2023, 2, 5)
/// );
/// assert_eq!(
///     parse_date_text("2023-02-05T10:00:00+02:00", &formats),
///     NaiveDate::from_ymd_opt(2023, 2, 5)
/// );
/// assert_eq!(parse_date_text("next tuesday", &formats), None);
/// ```
pub fn parse_date_text(text: &str, formats: &[String]) -> Option<NaiveDate> {
    formats
        .iter()
        .find_map(|format| {
            NaiveDate::parse_from_str(text, format).ok().or_else(|| {
                NaiveDateTime::parse_from_str(text, format)
                    .ok()
                    .map(|datetime| datetime.date())
            })
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|datetime| datetime.date_naive())
        })
}

/// Converts a spreadsheet serial number (days since 1899-12-30) to a date.
///
/// The fractional time-of-day part is dropped. Returns `None` for serials
/// below 1 or beyond 9999-12-31.
///
/// # Examples
///
/// ```
/// use turnover_engine::analytics::serial_to_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(serial_to_date(44936.0), NaiveDate::from_ymd_opt(2023, 1, 10));
/// assert_eq!(serial_to_date(-3.0), None);
/// ```
pub fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || !(1.0..=MAX_SERIAL_DATE).contains(&serial) {
        return None;
    }

    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    epoch.checked_add_days(Days::new(serial.floor() as u64))
}
