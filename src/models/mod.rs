//! Core data models for the turnover analytics engine.
//!
//! This module contains all the domain models used throughout the engine.

mod chart_series;
mod employment_record;
mod filter_spec;
mod metrics_result;

pub use chart_series::{
    ChartSeries, ChartType, DistributionSeries, Period, RateSeries, TimelineSeries,
};
pub use employment_record::{CellValue, EmploymentRecord, RawRow, RecordError};
pub use filter_spec::FilterSpec;
pub use metrics_result::{MetricsResult, RetentionRate, UNAVAILABLE_METRIC};
