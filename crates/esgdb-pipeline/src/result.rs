use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use esgdb_core::Company;
use esgdb_extract::{Metric, ScoreResult, SentimentResult};

/// The complete output record for one successfully processed company.
///
/// Score and sentiment are always present — degraded fallback defaults
/// substitute for missing data — while `metrics` may legitimately be empty.
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionResult {
    pub company: Company,
    pub metrics: Vec<Metric>,
    pub score: ScoreResult,
    pub sentiment: SentimentResult,
    pub collected_at: DateTime<Utc>,
}

/// Outcome of one batch run: every successful result plus attempt counts.
/// Companies that failed are absent from `results` and are not re-queued.
#[derive(Debug)]
pub struct PipelineReport {
    pub results: Vec<CollectionResult>,
    /// Number of companies the run attempted.
    pub attempted: usize,
}

impl PipelineReport {
    /// Number of companies that produced a persisted result.
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.results.len()
    }
}
