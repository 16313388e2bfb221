//! Turnover Analytics Engine
//!
//! This crate normalizes raw HR-event rows (hire and termination dates,
//! departments, termination reasons) into typed employment records and
//! serves filtered summary metrics and chart-ready series over them.

#![warn(missing_docs)]

pub mod analytics;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
