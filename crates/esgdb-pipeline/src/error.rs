use thiserror::Error;

use crate::sink::SinkError;

/// Per-company failure surfaced at the isolation boundary.
///
/// Extraction and scoring never appear here — their failures degrade to
/// fallback values inside `esgdb-extract` instead of propagating.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("acquisition error: {0}")]
    Acquire(#[from] esgdb_acquire::AcquireError),

    #[error("persistence error: {0}")]
    Sink(#[from] SinkError),
}
