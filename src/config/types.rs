//! Configuration types for the analytics engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML engine configuration file.

use serde::Deserialize;

use crate::models::Period;

/// Column keys under which raw rows carry each field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    /// Column holding the hire date (required in every row).
    pub hire_date: String,
    /// Column holding the termination date.
    pub termination_date: String,
    /// Column holding the department.
    pub department: String,
    /// Column holding the termination reason.
    pub termination_reason: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            hire_date: "hire_date".to_string(),
            termination_date: "termination_date".to_string(),
            department: "department".to_string(),
            termination_reason: "termination_reason".to_string(),
        }
    }
}

/// The complete engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Raw row column keys.
    pub columns: ColumnNames,
    /// `chrono` format strings tried, in order, on text date cells.
    pub date_formats: Vec<String>,
    /// Whether numeric date cells are read as spreadsheet serial dates.
    pub accept_serial_dates: bool,
    /// Period used by timeline charts when the query names none.
    pub default_period: Period,
    /// Ascending tenure thresholds, in days, for the tenure histogram.
    pub tenure_buckets_days: Vec<i64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            columns: ColumnNames::default(),
            date_formats: vec![
                "%Y-%m-%d".to_string(),
                "%Y-%m-%d %H:%M:%S".to_string(),
                "%m/%d/%Y".to_string(),
                "%Y/%m/%d".to_string(),
            ],
            accept_serial_dates: true,
            default_period: Period::Month,
            tenure_buckets_days: vec![90, 180, 365, 730, 1825],
        }
    }
}
