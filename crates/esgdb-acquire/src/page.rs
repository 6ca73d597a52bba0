use std::time::Duration;

use reqwest::Client;

use esgdb_core::truncate_chars;

use crate::error::AcquireError;
use crate::types::{ContentSource, PageContent};

/// Candidate URL suffixes probed in order when looking for a company's
/// sustainability disclosure.
const SUSTAINABILITY_SUFFIXES: &[&str] = &["/sustainability", "/esg", "/responsibility", "/impact"];

/// Cap applied to acquired page bodies before anything downstream sees them.
pub const PAGE_CONTENT_MAX_CHARS: usize = 5000;

/// Fetches sustainability-page content with ordered candidate fallback.
///
/// Candidates are tried in a fixed order; the first 2xx response wins and the
/// remaining candidates are skipped. A failed candidate (non-2xx status,
/// network error, timeout) is logged at debug level and the next one is
/// tried. When every candidate fails the fetcher returns empty content —
/// callers treat that as a degraded input, not a failure.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Creates a `PageFetcher` with the given per-request timeout and
    /// `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`AcquireError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, AcquireError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches a company's sustainability disclosure from its base website.
    ///
    /// Probes `{website}{suffix}` for each candidate suffix in order and
    /// returns the first successful body, truncated to
    /// [`PAGE_CONTENT_MAX_CHARS`]. Returns [`PageContent::empty`] when no
    /// candidate succeeds.
    pub async fn fetch_sustainability_page(&self, website: &str) -> PageContent {
        let base = website.trim_end_matches('/');

        for suffix in SUSTAINABILITY_SUFFIXES {
            let url = format!("{base}{suffix}");
            match self.try_candidate(&url).await {
                Ok(Some(text)) => {
                    tracing::debug!(url, bytes = text.len(), "sustainability candidate succeeded");
                    return PageContent {
                        text,
                        source: ContentSource::Sustainability,
                    };
                }
                Ok(None) => {
                    tracing::debug!(url, "sustainability candidate returned non-success status");
                }
                Err(e) => {
                    tracing::debug!(url, error = %e, "sustainability candidate fetch failed");
                }
            }
        }

        tracing::info!(
            website,
            "no sustainability page found — continuing with empty content"
        );
        PageContent::empty()
    }

    /// Fetches one candidate URL. `Ok(None)` means the server answered with a
    /// non-success status; `Err` means the request itself failed.
    async fn try_candidate(&self, url: &str) -> Result<Option<String>, reqwest::Error> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Ok(None);
        }
        let body = response.text().await?;
        Ok(Some(truncate_chars(&body, PAGE_CONTENT_MAX_CHARS).to_string()))
    }
}
