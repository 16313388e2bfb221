//! Employment record model and raw row types.
//!
//! This module defines the untyped [`RawRow`] shape handed over by the
//! external spreadsheet/CSV loader, and the typed [`EmploymentRecord`]
//! the normalizer produces from it.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single cell of a decoded spreadsheet or CSV row.
///
/// Cells deserialize untagged from JSON: `null` becomes [`CellValue::Empty`],
/// numbers become [`CellValue::Number`], ISO dates become [`CellValue::Date`]
/// and any other string becomes [`CellValue::Text`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// An empty cell.
    Empty,
    /// A numeric cell. In date columns this is a spreadsheet serial date.
    Number(f64),
    /// A cell the loader already decoded as a calendar date.
    Date(NaiveDate),
    /// A text cell.
    Text(String),
}

impl CellValue {
    /// Returns true if the cell carries no usable value.
    ///
    /// Whitespace-only text counts as blank.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(text) => text.trim().is_empty(),
            CellValue::Number(_) | CellValue::Date(_) => false,
        }
    }

    /// Returns the cell rendered as trimmed text, or `None` if blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use turnover_engine::models::CellValue;
    ///
    /// assert_eq!(CellValue::Text("  Sales ".into()).as_text(), Some("Sales".to_string()));
    /// assert_eq!(CellValue::Number(42.0).as_text(), Some("42".to_string()));
    /// assert_eq!(CellValue::Empty.as_text(), None);
    /// ```
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Empty => None,
            CellValue::Text(text) => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            CellValue::Number(value) => Some(value.to_string()),
            CellValue::Date(date) => Some(date.to_string()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        CellValue::Date(value)
    }
}

/// A decoded row keyed by (already normalized) column name.
pub type RawRow = BTreeMap<String, CellValue>;

/// Reasons an [`EmploymentRecord`] cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The termination date lies before the hire date.
    #[error("termination date {termination_date} precedes hire date {hire_date}")]
    TerminationBeforeHire {
        /// The record's hire date.
        hire_date: NaiveDate,
        /// The offending termination date.
        termination_date: NaiveDate,
    },
}

/// One person's employment span with derived date and duration fields.
///
/// Records are immutable once constructed: every derived field is computed
/// in [`EmploymentRecord::new`] and only exposed through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmploymentRecord {
    department: String,
    hire_date: NaiveDate,
    termination_date: Option<NaiveDate>,
    termination_reason: Option<String>,
    tenure_days: i64,
    hire_year: i32,
    hire_month: u32,
    termination_year: Option<i32>,
    termination_month: Option<u32>,
}

impl EmploymentRecord {
    /// Builds a record and derives its tenure and year/month parts.
    ///
    /// Tenure runs from `hire_date` to the termination date, or to
    /// `evaluation_date` while the person is still employed. An active record
    /// hired after `evaluation_date` has a tenure of zero.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::TerminationBeforeHire`] if `termination_date`
    /// is earlier than `hire_date`.
    ///
    /// # Examples
    ///
    /// ```
    /// use turnover_engine::models::EmploymentRecord;
    /// use chrono::NaiveDate;
    ///
    /// let record = EmploymentRecord::new(
    ///     "Sales",
    ///     NaiveDate::from_ymd_opt(2023, 2, 5).unwrap(),
    ///     Some(NaiveDate::from_ymd_opt(2023, 6, 1).unwrap()),
    ///     Some("Resignation".to_string()),
    ///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(record.tenure_days(), 116);
    /// assert_eq!(record.termination_month(), Some(6));
    /// ```
    pub fn new(
        department: impl Into<String>,
        hire_date: NaiveDate,
        termination_date: Option<NaiveDate>,
        termination_reason: Option<String>,
        evaluation_date: NaiveDate,
    ) -> Result<Self, RecordError> {
        if let Some(termination_date) = termination_date {
            if termination_date < hire_date {
                return Err(RecordError::TerminationBeforeHire {
                    hire_date,
                    termination_date,
                });
            }
        }

        let end_date = termination_date.unwrap_or(evaluation_date);
        let tenure_days = (end_date - hire_date).num_days().max(0);

        Ok(Self {
            department: department.into(),
            hire_date,
            termination_date,
            termination_reason,
            tenure_days,
            hire_year: hire_date.year(),
            hire_month: hire_date.month(),
            termination_year: termination_date.map(|d| d.year()),
            termination_month: termination_date.map(|d| d.month()),
        })
    }

    /// The department the person belongs to (empty if unknown).
    pub fn department(&self) -> &str {
        &self.department
    }

    /// The hire date.
    pub fn hire_date(&self) -> NaiveDate {
        self.hire_date
    }

    /// The termination date, or `None` while still employed.
    pub fn termination_date(&self) -> Option<NaiveDate> {
        self.termination_date
    }

    /// The recorded reason for leaving, if any.
    pub fn termination_reason(&self) -> Option<&str> {
        self.termination_reason.as_deref()
    }

    /// Whole days of tenure. Never negative.
    pub fn tenure_days(&self) -> i64 {
        self.tenure_days
    }

    /// Calendar year of the hire date.
    pub fn hire_year(&self) -> i32 {
        self.hire_year
    }

    /// Calendar month (1-12) of the hire date.
    pub fn hire_month(&self) -> u32 {
        self.hire_month
    }

    /// Calendar year of the termination date.
    pub fn termination_year(&self) -> Option<i32> {
        self.termination_year
    }

    /// Calendar month (1-12) of the termination date.
    pub fn termination_month(&self) -> Option<u32> {
        self.termination_month
    }

    /// Returns true if the person is still employed.
    pub fn is_active(&self) -> bool {
        self.termination_date.is_none()
    }
}
