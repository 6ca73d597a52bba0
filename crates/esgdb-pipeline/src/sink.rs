//! Pluggable persistence for collection results.

use std::future::Future;
use std::path::PathBuf;

use thiserror::Error;
use tokio::io::AsyncWriteExt;

use crate::result::CollectionResult;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Destination for completed collection results.
///
/// `persist` is called once per successful company, inside that company's
/// isolation boundary: a sink failure skips the company but never aborts the
/// batch.
pub trait ResultSink: Send + Sync {
    fn persist(
        &self,
        result: &CollectionResult,
    ) -> impl Future<Output = Result<(), SinkError>> + Send;
}

/// Sink that logs and discards results. Used when no output destination is
/// configured.
pub struct NoopSink;

impl ResultSink for NoopSink {
    async fn persist(&self, result: &CollectionResult) -> Result<(), SinkError> {
        tracing::debug!(
            ticker = %result.company.ticker,
            "discarding result (no sink configured)"
        );
        Ok(())
    }
}

/// Sink that appends one JSON line per result to a file.
pub struct JsonlSink {
    path: PathBuf,
}

impl JsonlSink {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ResultSink for JsonlSink {
    async fn persist(&self, result: &CollectionResult) -> Result<(), SinkError> {
        let mut line = serde_json::to_string(result)?;
        line.push('\n');

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        Ok(())
    }
}
