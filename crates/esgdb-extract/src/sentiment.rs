//! News-sentiment extraction role.

use crate::client::ReasoningClient;
use crate::parse::parse_structured;
use crate::types::SentimentResult;

/// Assess recent news sentiment about a company's ESG performance.
///
/// Issues one reasoning call keyed on the company name alone (no document
/// content is required for this role). Any request or parse failure yields
/// the all-neutral [`SentimentResult::fallback`]; this function never fails.
pub async fn analyze_news_sentiment(
    client: &ReasoningClient,
    company_name: &str,
) -> SentimentResult {
    let prompt = sentiment_prompt(company_name);

    let raw = match client.complete(&prompt).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(
                company = company_name,
                error = %e,
                "sentiment request failed — substituting neutral fallback"
            );
            return SentimentResult::fallback();
        }
    };

    parse_structured(&raw, "news sentiment").unwrap_or_else(SentimentResult::fallback)
}

fn sentiment_prompt(company_name: &str) -> String {
    format!(
        "Analyze recent news sentiment about {company_name}'s ESG performance.\n\
         Consider environmental initiatives, social responsibility, and governance issues.\n\
         \n\
         Respond with only a JSON object of this exact shape:\n\
         {{\n\
         \x20 \"overall\": \"positive\" | \"neutral\" | \"negative\",\n\
         \x20 \"environmental\": \"positive\" | \"neutral\" | \"negative\",\n\
         \x20 \"social\": \"positive\" | \"neutral\" | \"negative\",\n\
         \x20 \"governance\": \"positive\" | \"neutral\" | \"negative\",\n\
         \x20 \"key_issues\": [\"recent ESG-related issues or initiatives\"]\n\
         }}"
    )
}
