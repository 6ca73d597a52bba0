use thiserror::Error;

#[derive(Debug, Error)]
pub enum AcquireError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("filing retrieval failed for {ticker}: {reason}")]
    Filing { ticker: String, reason: String },
}
