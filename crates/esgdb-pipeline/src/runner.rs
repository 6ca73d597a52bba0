//! Batch runner with per-company failure isolation.

use chrono::Utc;
use futures::stream::{self, StreamExt};

use esgdb_acquire::{FilingSource, PageFetcher};
use esgdb_core::Company;
use esgdb_extract::{analyze_news_sentiment, extract_metrics, score_metrics, ReasoningClient};

use crate::error::PipelineError;
use crate::result::{CollectionResult, PipelineReport};
use crate::sink::ResultSink;

/// The collection pipeline: shared clients plus the sink, applied to a batch
/// of companies.
///
/// Companies are processed through a bounded task pool of `max_concurrent`
/// in-flight pipelines (1 = strictly sequential). Each company's working
/// data is owned by its own pass and discarded after persistence; there is
/// no shared mutable state between passes.
pub struct Pipeline<F, S> {
    fetcher: PageFetcher,
    reasoning: ReasoningClient,
    filings: F,
    sink: S,
    max_concurrent: usize,
}

impl<F: FilingSource, S: ResultSink> Pipeline<F, S> {
    pub fn new(
        fetcher: PageFetcher,
        reasoning: ReasoningClient,
        filings: F,
        sink: S,
        max_concurrent: usize,
    ) -> Self {
        Self {
            fetcher,
            reasoning,
            filings,
            sink,
            max_concurrent,
        }
    }

    /// Run the full pipeline over a batch of companies.
    ///
    /// Any error raised by any step for one company — filing retrieval,
    /// persistence, anything unrecovered — is caught here, logged with the
    /// company's ticker, and excluded from the report; processing continues
    /// with the remaining companies. The batch itself never fails.
    ///
    /// Results are returned in completion order; with `max_concurrent` of 1
    /// that matches input order.
    pub async fn run(&self, companies: &[Company]) -> PipelineReport {
        let attempted = companies.len();
        let width = self.max_concurrent.max(1);

        tracing::info!(
            companies = attempted,
            max_concurrent = width,
            "starting collection run"
        );

        let outcomes: Vec<(&Company, Result<CollectionResult, PipelineError>)> =
            stream::iter(companies)
                .map(|company| async move { (company, self.collect_company(company).await) })
                .buffer_unordered(width)
                .collect()
                .await;

        let mut results = Vec::with_capacity(attempted);
        for (company, outcome) in outcomes {
            match outcome {
                Ok(result) => {
                    tracing::info!(
                        ticker = %company.ticker,
                        overall_score = result.score.overall_score,
                        metric_count = result.metrics.len(),
                        "company collected"
                    );
                    results.push(result);
                }
                Err(e) => {
                    tracing::error!(
                        ticker = %company.ticker,
                        error = %e,
                        "skipping company after pipeline failure"
                    );
                }
            }
        }

        if results.len() < attempted {
            tracing::warn!(
                failed = attempted - results.len(),
                attempted,
                "some companies failed during collection"
            );
        }

        PipelineReport { results, attempted }
    }

    /// One company's pass, steps in strict sequence: acquire sustainability
    /// content, fetch filing text, assess sentiment, extract metrics, score,
    /// assemble, persist.
    ///
    /// Acquisition misses and extraction parse failures degrade inside their
    /// stages and never surface here; what can fail is the filing
    /// collaborator and the sink.
    async fn collect_company(&self, company: &Company) -> Result<CollectionResult, PipelineError> {
        let page = self.fetcher.fetch_sustainability_page(&company.website).await;
        let filing = self.filings.latest_filing_text(&company.ticker).await?;

        let sentiment = analyze_news_sentiment(&self.reasoning, &company.name).await;
        let metrics =
            extract_metrics(&self.reasoning, &company.name, &page.text, &filing).await;
        let score = score_metrics(&self.reasoning, &metrics).await;

        let result = CollectionResult {
            company: company.clone(),
            metrics,
            score,
            sentiment,
            collected_at: Utc::now(),
        };

        self.sink.persist(&result).await?;

        Ok(result)
    }
}
