//! Record preprocessing and aggregation for the turnover analytics engine.
//!
//! Every function in this module is a pure, synchronous pass over an
//! in-memory record slice:
//! - [`normalize`] turns raw rows into [`crate::models::EmploymentRecord`]s
//! - [`filter_records`] applies a [`crate::models::FilterSpec`]
//! - the aggregators reduce the filtered set to metrics or chart series

mod distribution;
mod filter;
mod metrics;
mod normalizer;
mod tenure;
mod timeline;
mod turnover;

pub use distribution::termination_reason_distribution;
pub use filter::{filter_records, matches};
pub use metrics::{compute_metrics, metrics_by_department};
pub use normalizer::{normalize, normalize_now, parse_date_cell, parse_date_text, serial_to_date};
pub use tenure::tenure_distribution;
pub use timeline::{hires_terminations_timeline, timeline_by_period};
pub use turnover::{headcount_at, turnover_rate_by_period};
