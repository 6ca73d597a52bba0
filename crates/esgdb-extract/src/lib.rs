//! Structured extraction and scoring via an external reasoning service.
//!
//! Three roles share one request/parse/fallback contract: news-sentiment
//! classification, quantitative metric extraction, and composite scoring.
//! Each role issues exactly one chat-completion call per company at a
//! near-deterministic temperature and parses the response strictly as JSON.
//! Any failure along the way — transport, HTTP status, empty choices,
//! malformed or schema-mismatched JSON — substitutes the role's fallback
//! value instead of propagating an error: extraction failures are routine,
//! and must never abort a company's collection pass.

pub mod client;
pub mod error;
pub mod metrics;
pub mod score;
pub mod sentiment;
pub mod types;

mod parse;

pub use client::ReasoningClient;
pub use error::ExtractError;
pub use metrics::{extract_metrics, PROMPT_CONTENT_MAX_CHARS};
pub use score::score_metrics;
pub use sentiment::analyze_news_sentiment;
pub use types::{Category, Metric, ScoreResult, Sentiment, SentimentResult};
