//! Session-scoped dataset context.
//!
//! The external session layer owns one [`SessionData`] per user session and
//! passes it into every engine call. The engine only borrows it.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::EmploymentRecord;

/// An ingested, immutable record collection.
#[derive(Debug, Clone)]
pub struct Dataset {
    id: Uuid,
    ingested_at: DateTime<Utc>,
    records: Vec<EmploymentRecord>,
}

impl Dataset {
    /// Wraps freshly normalized records under a new dataset id.
    pub fn new(records: Vec<EmploymentRecord>) -> Self {
        Self {
            id: Uuid::new_v4(),
            ingested_at: Utc::now(),
            records,
        }
    }

    /// Identifier assigned at ingest, used to correlate log lines.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// When the dataset was ingested.
    pub fn ingested_at(&self) -> DateTime<Utc> {
        self.ingested_at
    }

    /// The records, in ingest order.
    pub fn records(&self) -> &[EmploymentRecord] {
        &self.records
    }
}

/// Per-session state: at most one dataset, replaced wholesale on ingest.
#[derive(Debug, Clone, Default)]
pub struct SessionData {
    dataset: Option<Dataset>,
}

impl SessionData {
    /// Creates a session with no dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current dataset, if one has been ingested.
    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    /// Returns true once a dataset has been ingested, even an empty one.
    pub fn has_data(&self) -> bool {
        self.dataset.is_some()
    }

    /// Replaces the dataset and returns the new one.
    pub(crate) fn replace(&mut self, dataset: Dataset) -> &Dataset {
        self.dataset.insert(dataset)
    }

    /// Drops the current dataset.
    pub fn clear(&mut self) {
        self.dataset = None;
    }
}
