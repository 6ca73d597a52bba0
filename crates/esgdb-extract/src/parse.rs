//! Strict structured parsing of reasoning-service responses.
//!
//! Responses are validated as JSON only; there is no evaluation of response
//! text as anything other than data. A response that does not match the
//! expected schema routes to the caller's fallback value.

use serde::de::DeserializeOwned;

/// Strip an optional Markdown code fence from a response.
///
/// Models at low temperature still occasionally wrap JSON output in a
/// json-tagged fence; the payload inside is what gets parsed.
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") through the first newline.
    let body = match rest.split_once('\n') {
        Some((_, body)) => body,
        None => return trimmed,
    };
    let body = body.trim_end();
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Parse a response strictly into `T`, returning `None` (and logging a
/// warning) on any mismatch.
pub(crate) fn parse_structured<T: DeserializeOwned>(raw: &str, context: &str) -> Option<T> {
    let cleaned = strip_code_fences(raw);
    match serde_json::from_str(cleaned) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(
                context,
                error = %e,
                "reasoning response failed strict parse — substituting fallback"
            );
            None
        }
    }
}
