//! Quantitative metric-extraction role.

use esgdb_core::truncate_chars;

use crate::client::ReasoningClient;
use crate::parse::parse_structured;
use crate::types::Metric;

/// Cap applied to each document when rendered into the extraction prompt.
/// Applies independently to the sustainability content and filing content.
pub const PROMPT_CONTENT_MAX_CHARS: usize = 2000;

/// Extract quantifiable ESG metrics from a company's collected content.
///
/// Issues one reasoning call embedding the company name plus the
/// sustainability-page and filing texts, each truncated to
/// [`PROMPT_CONTENT_MAX_CHARS`]. Empty content is a valid input — the call
/// is still issued. Any request or parse failure yields an empty metric
/// vec; this function never fails.
pub async fn extract_metrics(
    client: &ReasoningClient,
    company_name: &str,
    sustainability_content: &str,
    filing_content: &str,
) -> Vec<Metric> {
    let prompt = metrics_prompt(company_name, sustainability_content, filing_content);

    let raw = match client.complete(&prompt).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(
                company = company_name,
                error = %e,
                "metric extraction request failed — substituting empty metric set"
            );
            return Vec::new();
        }
    };

    parse_structured(&raw, "metric extraction").unwrap_or_default()
}

fn metrics_prompt(company_name: &str, sustainability_content: &str, filing_content: &str) -> String {
    let sustainability = truncate_chars(sustainability_content, PROMPT_CONTENT_MAX_CHARS);
    let filing = truncate_chars(filing_content, PROMPT_CONTENT_MAX_CHARS);

    format!(
        "Extract specific, quantifiable ESG metrics from the following content about {company_name}:\n\
         \n\
         Sustainability Content: {sustainability}\n\
         SEC Filing Content: {filing}\n\
         \n\
         Respond with only a JSON array of metrics in this exact shape:\n\
         [\n\
         \x20 {{\n\
         \x20   \"category\": \"environmental\" | \"social\" | \"governance\",\n\
         \x20   \"metric\": \"carbon_emissions_scope1\",\n\
         \x20   \"value\": \"123456\",\n\
         \x20   \"unit\": \"tCO2e\",\n\
         \x20   \"year\": \"2023\",\n\
         \x20   \"confidence\": 0.9\n\
         \x20 }}\n\
         ]\n\
         \n\
         Focus on quantifiable metrics with high confidence. Include:\n\
         - Environmental: emissions, energy use, waste, water\n\
         - Social: diversity, safety, employee satisfaction\n\
         - Governance: board composition, executive compensation"
    )
}
