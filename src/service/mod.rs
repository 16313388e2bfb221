//! Query service for the turnover analytics engine.
//!
//! This module is the boundary the external request layer calls into:
//! ingest decoded rows into a session, then run metrics and chart queries.
//! Transport, routing and session storage stay outside the crate.

mod context;
mod engine;
mod request;
mod response;

pub use context::{Dataset, SessionData};
pub use engine::AnalyticsEngine;
pub use request::QueryRequest;
pub use response::{ApiError, ErrorResponse};
