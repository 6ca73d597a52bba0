//! Composite scoring role.

use crate::client::ReasoningClient;
use crate::parse::parse_structured;
use crate::types::{Metric, ScoreResult};

/// Derive a composite ESG assessment from a company's extracted metrics.
///
/// Issues one reasoning call with the metrics rendered as JSON. An empty
/// metric slice is a valid input; the service is expected to degrade
/// gracefully and no local plausibility check is applied to the returned
/// scores. Any request or parse failure yields the mid-range
/// [`ScoreResult::fallback`]; this function never fails.
pub async fn score_metrics(client: &ReasoningClient, metrics: &[Metric]) -> ScoreResult {
    let prompt = score_prompt(metrics);

    let raw = match client.complete(&prompt).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(
                metric_count = metrics.len(),
                error = %e,
                "scoring request failed — substituting mid-range fallback"
            );
            return ScoreResult::fallback();
        }
    };

    parse_structured(&raw, "composite score").unwrap_or_else(ScoreResult::fallback)
}

fn score_prompt(metrics: &[Metric]) -> String {
    // Serializing our own types cannot fail; an empty array keeps the prompt
    // well-formed if it somehow does.
    let rendered = serde_json::to_string_pretty(metrics).unwrap_or_else(|_| "[]".to_string());

    format!(
        "Calculate ESG scores based on these metrics:\n\
         {rendered}\n\
         \n\
         Respond with only a JSON object with scores 0-100:\n\
         {{\n\
         \x20 \"environmental_score\": 75,\n\
         \x20 \"social_score\": 80,\n\
         \x20 \"governance_score\": 70,\n\
         \x20 \"overall_score\": 75,\n\
         \x20 \"explanation\": \"Brief explanation of scoring rationale\"\n\
         }}"
    )
}
