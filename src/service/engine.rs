//! Query entry points for the turnover analytics engine.
//!
//! This module contains the calls the external request layer makes: ingest a
//! decoded file into a session, then query metrics and charts against it.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use chrono::{NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::analytics::{
    compute_metrics, filter_records, metrics_by_department, normalize,
    termination_reason_distribution, tenure_distribution, timeline_by_period,
    turnover_rate_by_period,
};
use crate::config::{ConfigLoader, EngineConfig};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    ChartSeries, ChartType, EmploymentRecord, FilterSpec, MetricsResult, Period, RawRow,
};

use super::context::{Dataset, SessionData};
use super::request::QueryRequest;

/// Shared engine handle.
///
/// Holds the loaded configuration behind an `Arc`, so it can be cloned
/// into every request handler. It never stores session data: each call
/// borrows the caller's [`SessionData`] for its own duration only.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsEngine {
    config: Arc<EngineConfig>,
}

impl AnalyticsEngine {
    /// Creates an engine from a loaded configuration.
    pub fn new(loader: ConfigLoader) -> Self {
        Self {
            config: Arc::new(loader.config().clone()),
        }
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Normalizes `rows` and replaces the session's dataset with them.
    ///
    /// Active tenure is measured up to today's date (UTC). See
    /// [`AnalyticsEngine::ingest_as_of`].
    pub fn ingest<'s>(
        &self,
        session: &'s mut SessionData,
        rows: &[RawRow],
    ) -> EngineResult<&'s [EmploymentRecord]> {
        self.ingest_as_of(session, rows, Utc::now().date_naive())
    }

    /// Normalizes `rows` with a fixed evaluation date and replaces the
    /// session's dataset with them.
    ///
    /// Ingest is all-or-nothing: if any row fails validation the error is
    /// returned and the session keeps its previous dataset.
    ///
    /// # Examples
    ///
    /// ```
    /// use turnover_engine::models::{CellValue, FilterSpec, RawRow};
    /// use turnover_engine::service::{AnalyticsEngine, SessionData};
    /// use chrono::NaiveDate;
    ///
    /// let engine = AnalyticsEngine::default();
    /// let mut session = SessionData::new();
    ///
    /// let mut row = RawRow::new();
    /// row.insert("hire_date".into(), CellValue::from("2023-01-10"));
    ///
    /// let today = NaiveDate::from_ymd_opt(2023, 1, 20).unwrap();
    /// engine.ingest_as_of(&mut session, &[row], today).unwrap();
    ///
    /// let metrics = engine.query_metrics(&session, &FilterSpec::new()).unwrap();
    /// assert_eq!(metrics.total_hires, 1);
    /// assert_eq!(metrics.average_tenure_days, 10.0);
    /// ```
    pub fn ingest_as_of<'s>(
        &self,
        session: &'s mut SessionData,
        rows: &[RawRow],
        evaluation_date: NaiveDate,
    ) -> EngineResult<&'s [EmploymentRecord]> {
        let start_time = Instant::now();

        let records = normalize(rows, &self.config, evaluation_date).inspect_err(|err| {
            warn!(rows = rows.len(), error = %err, "Ingest rejected");
        })?;

        let dataset = session.replace(Dataset::new(records));
        info!(
            dataset_id = %dataset.id(),
            records = dataset.records().len(),
            evaluation_date = %evaluation_date,
            duration_us = start_time.elapsed().as_micros(),
            "Dataset ingested"
        );

        Ok(dataset.records())
    }

    /// Computes summary metrics over the filtered session dataset.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoDataAvailable`] if nothing has been ingested.
    pub fn query_metrics(
        &self,
        session: &SessionData,
        filter: &FilterSpec,
    ) -> EngineResult<MetricsResult> {
        let query_id = Uuid::new_v4();
        let dataset = Self::dataset(session, query_id)?;
        let start_time = Instant::now();

        let filtered = filter_records(dataset.records(), filter);
        let metrics = compute_metrics(&filtered);

        info!(
            query_id = %query_id,
            dataset_id = %dataset.id(),
            matched = filtered.len(),
            total_terminations = metrics.total_terminations,
            duration_us = start_time.elapsed().as_micros(),
            "Metrics query completed"
        );

        Ok(metrics)
    }

    /// Computes summary metrics per department over the filtered dataset.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoDataAvailable`] if nothing has been ingested.
    pub fn query_department_metrics(
        &self,
        session: &SessionData,
        filter: &FilterSpec,
    ) -> EngineResult<BTreeMap<String, MetricsResult>> {
        let query_id = Uuid::new_v4();
        let dataset = Self::dataset(session, query_id)?;
        let start_time = Instant::now();

        let filtered = filter_records(dataset.records(), filter);
        let by_department = metrics_by_department(&filtered);

        info!(
            query_id = %query_id,
            dataset_id = %dataset.id(),
            matched = filtered.len(),
            departments = by_department.len(),
            duration_us = start_time.elapsed().as_micros(),
            "Department metrics query completed"
        );

        Ok(by_department)
    }

    /// Builds chart data over the filtered dataset, bucketing timelines by
    /// the configured default period.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoDataAvailable`] if nothing has been ingested,
    /// or [`EngineError::UnsupportedChartType`] for an unknown `chart_type`.
    pub fn query_chart(
        &self,
        session: &SessionData,
        filter: &FilterSpec,
        chart_type: &str,
    ) -> EngineResult<ChartSeries> {
        self.query_chart_with_period(session, filter, chart_type, self.config.default_period)
    }

    /// Builds chart data over the filtered dataset with an explicit
    /// timeline period. Distribution charts ignore `period`; both timeline
    /// charts bucket by it.
    pub fn query_chart_with_period(
        &self,
        session: &SessionData,
        filter: &FilterSpec,
        chart_type: &str,
        period: Period,
    ) -> EngineResult<ChartSeries> {
        let query_id = Uuid::new_v4();
        let dataset = Self::dataset(session, query_id)?;

        let chart: ChartType = chart_type.parse().inspect_err(|_| {
            warn!(query_id = %query_id, chart_type = %chart_type, "Unsupported chart type");
        })?;

        let start_time = Instant::now();
        let filtered = filter_records(dataset.records(), filter);

        let series = match chart {
            ChartType::HiresTerminationsTimeline => {
                ChartSeries::Timeline(timeline_by_period(&filtered, period))
            }
            ChartType::TerminationReasonDistribution => {
                ChartSeries::Distribution(termination_reason_distribution(&filtered))
            }
            ChartType::TenureDistribution => ChartSeries::Distribution(tenure_distribution(
                &filtered,
                &self.config.tenure_buckets_days,
            )),
            ChartType::TurnoverRateTimeline => {
                ChartSeries::Rate(turnover_rate_by_period(&filtered, period))
            }
        };

        info!(
            query_id = %query_id,
            dataset_id = %dataset.id(),
            chart_type = %chart,
            period = ?period,
            matched = filtered.len(),
            duration_us = start_time.elapsed().as_micros(),
            "Chart query completed"
        );

        Ok(series)
    }

    /// Runs the chart query described by a deserialized request body.
    ///
    /// A request without a `chart_type` is treated as an unsupported (empty)
    /// chart type. A request without a `period` uses the configured default.
    pub fn query_chart_for(
        &self,
        session: &SessionData,
        request: &QueryRequest,
    ) -> EngineResult<ChartSeries> {
        let period = request.period.unwrap_or(self.config.default_period);
        self.query_chart_with_period(
            session,
            &request.filter(),
            request.chart_type.as_deref().unwrap_or_default(),
            period,
        )
    }

    fn dataset(session: &SessionData, query_id: Uuid) -> EngineResult<&Dataset> {
        session.dataset().ok_or_else(|| {
            warn!(query_id = %query_id, "Query issued before any dataset was ingested");
            EngineError::NoDataAvailable
        })
    }
}
