//! Request types for the analytics queries.
//!
//! This module defines the JSON request body the dashboard sends for metrics
//! and chart queries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{FilterSpec, Period};

/// Request body for metrics and chart queries.
///
/// All fields are optional; an empty body queries the whole dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Earliest hire date to include (inclusive).
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Latest hire date to include (inclusive).
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Departments to include. Empty means every department.
    #[serde(default)]
    pub departments: Vec<String>,
    /// The chart to build, for chart queries.
    #[serde(default)]
    pub chart_type: Option<String>,
    /// Timeline bucketing period (`M`, `Q`, `Y` or `month`, `quarter`, `year`).
    #[serde(default)]
    pub period: Option<Period>,
}

impl QueryRequest {
    /// Builds the filter described by this request.
    pub fn filter(&self) -> FilterSpec {
        self.clone().into()
    }
}

impl From<QueryRequest> for FilterSpec {
    fn from(req: QueryRequest) -> Self {
        FilterSpec {
            start_date: req.start_date,
            end_date: req.end_date,
            departments: req.departments.into_iter().collect(),
        }
    }
}
