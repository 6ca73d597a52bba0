//! The `run` command: wire config → clients → pipeline and report a summary.

use anyhow::Context;

use esgdb_acquire::{PageFetcher, PlaceholderFilings};
use esgdb_core::{AppConfig, Company};
use esgdb_extract::ReasoningClient;
use esgdb_pipeline::{JsonlSink, NoopSink, Pipeline, PipelineReport, ResultSink};

use crate::RunArgs;

pub(crate) async fn run(args: RunArgs) -> anyhow::Result<()> {
    // Config failures (missing API key above all) are fatal here, before any
    // company is processed; nothing inside the batch loop is.
    let config = esgdb_core::load_app_config().context("failed to load configuration")?;
    init_tracing(&config.log_level);
    tracing::debug!(?config, "configuration loaded");

    let registry = esgdb_core::load_companies(&config.companies_path).with_context(|| {
        format!(
            "failed to load company registry from {}",
            config.companies_path.display()
        )
    })?;

    let limit = args.limit.unwrap_or(config.run_limit);
    let companies = select_companies(registry.companies, args.ticker.as_deref(), limit);
    if companies.is_empty() {
        anyhow::bail!("no companies selected; check --ticker against the registry file");
    }

    let fetcher = PageFetcher::new(config.fetch_timeout_secs, &config.user_agent)?;
    let reasoning = ReasoningClient::with_base_url(
        &config.openai_api_key,
        &config.model,
        config.reasoning_timeout_secs,
        &config.openai_base_url,
    )?;

    let report = match args.out {
        Some(path) => {
            tracing::info!(path = %path.display(), "writing results as JSON lines");
            run_batch(&config, fetcher, reasoning, JsonlSink::new(path), &companies).await
        }
        None => run_batch(&config, fetcher, reasoning, NoopSink, &companies).await,
    };

    println!(
        "processed {} of {} companies",
        report.succeeded(),
        report.attempted
    );

    Ok(())
}

async fn run_batch<S: ResultSink>(
    config: &AppConfig,
    fetcher: PageFetcher,
    reasoning: ReasoningClient,
    sink: S,
    companies: &[Company],
) -> PipelineReport {
    Pipeline::new(
        fetcher,
        reasoning,
        PlaceholderFilings,
        sink,
        config.max_concurrent_companies,
    )
    .run(companies)
    .await
}

/// Apply the optional ticker filter, then the slice limit, in that order.
fn select_companies(companies: Vec<Company>, ticker: Option<&str>, limit: usize) -> Vec<Company> {
    let mut selected = companies;
    if let Some(ticker) = ticker {
        selected.retain(|c| c.ticker.eq_ignore_ascii_case(ticker));
    }
    selected.truncate(limit);
    selected
}

fn init_tracing(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Vec<Company> {
        ["AAPL", "MSFT", "AMZN"]
            .iter()
            .map(|ticker| Company {
                name: format!("{ticker} Inc."),
                ticker: (*ticker).to_string(),
                website: format!("https://{}.test", ticker.to_lowercase()),
            })
            .collect()
    }

    #[test]
    fn limit_caps_the_slice() {
        let selected = select_companies(registry(), None, 2);
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].ticker, "AAPL");
        assert_eq!(selected[1].ticker, "MSFT");
    }

    #[test]
    fn ticker_filter_is_case_insensitive() {
        let selected = select_companies(registry(), Some("msft"), 10);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].ticker, "MSFT");
    }

    #[test]
    fn unknown_ticker_selects_nothing() {
        let selected = select_companies(registry(), Some("NOPE"), 10);
        assert!(selected.is_empty());
    }

    #[test]
    fn zero_limit_selects_nothing() {
        let selected = select_companies(registry(), None, 0);
        assert!(selected.is_empty());
    }
}
