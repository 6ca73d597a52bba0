use std::future::Future;

use crate::error::AcquireError;

/// Collaborator that retrieves regulatory-filing text for a ticker.
///
/// One call per company, no internal retry or fallback here — the
/// implementation owns those. Errors propagate to the per-company boundary
/// in the pipeline, where the company is skipped and the batch continues.
pub trait FilingSource: Send + Sync {
    fn latest_filing_text(
        &self,
        ticker: &str,
    ) -> impl Future<Output = Result<String, AcquireError>> + Send;
}

/// Stand-in filing source returning canned text per ticker.
///
/// TODO: replace with a client for the SEC EDGAR submissions API.
pub struct PlaceholderFilings;

impl FilingSource for PlaceholderFilings {
    async fn latest_filing_text(&self, ticker: &str) -> Result<String, AcquireError> {
        Ok(format!("SEC filing content for {ticker}"))
    }
}
