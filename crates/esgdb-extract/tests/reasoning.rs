//! Integration tests for the reasoning roles against a mock service.
//!
//! Uses `wiremock` to stand in for the chat-completions endpoint. Covers the
//! happy paths, the fallback discipline for every failure class (transport,
//! status, empty choices, malformed payload), and output stability across
//! identical calls.

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use esgdb_extract::{
    analyze_news_sentiment, extract_metrics, score_metrics, Category, ReasoningClient, ScoreResult,
    Sentiment, SentimentResult,
};

/// Builds a `ReasoningClient` pointed at the mock server.
fn test_client(server: &MockServer) -> ReasoningClient {
    ReasoningClient::with_base_url("test-key", "gpt-4o", 5, &server.uri())
        .expect("failed to build test ReasoningClient")
}

/// Wraps completion text in a chat-completions response envelope.
fn completion_envelope(content: &str) -> serde_json::Value {
    json!({
        "choices": [{"message": {"content": content}}]
    })
}

#[tokio::test]
async fn sentiment_parses_well_formed_response() {
    let server = MockServer::start().await;

    let content = r#"{
        "overall": "positive",
        "environmental": "positive",
        "social": "neutral",
        "governance": "neutral",
        "key_issues": ["fleet electrification"]
    }"#;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&completion_envelope(content)))
        .mount(&server)
        .await;

    let result = analyze_news_sentiment(&test_client(&server), "Acme Corp").await;

    assert_eq!(result.overall, Sentiment::Positive);
    assert_eq!(result.key_issues, vec!["fleet electrification"]);
}

#[tokio::test]
async fn sentiment_falls_back_on_malformed_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(&completion_envelope("Sorry, I can't answer that.")),
        )
        .mount(&server)
        .await;

    let result = analyze_news_sentiment(&test_client(&server), "Acme Corp").await;

    assert_eq!(result, SentimentResult::fallback());
}

#[tokio::test]
async fn sentiment_falls_back_on_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = analyze_news_sentiment(&test_client(&server), "Acme Corp").await;

    assert_eq!(result, SentimentResult::fallback());
}

#[tokio::test]
async fn sentiment_falls_back_on_empty_choices() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({"choices": []})))
        .mount(&server)
        .await;

    let result = analyze_news_sentiment(&test_client(&server), "Acme Corp").await;

    assert_eq!(result, SentimentResult::fallback());
}

#[tokio::test]
async fn metrics_parse_fenced_response() {
    let server = MockServer::start().await;

    let content = "```json\n[{\"category\":\"social\",\"metric\":\"employee_diversity_women\",\"value\":\"45\",\"unit\":\"percentage\",\"year\":\"2023\",\"confidence\":0.8}]\n```";

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&completion_envelope(content)))
        .mount(&server)
        .await;

    let metrics = extract_metrics(&test_client(&server), "Acme Corp", "page text", "filing").await;

    assert_eq!(metrics.len(), 1);
    assert_eq!(metrics[0].category, Category::Social);
    assert_eq!(metrics[0].value, "45");
}

#[tokio::test]
async fn metrics_fall_back_to_empty_on_malformed_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&completion_envelope("{not json")))
        .mount(&server)
        .await;

    let metrics = extract_metrics(&test_client(&server), "Acme Corp", "", "").await;

    assert!(metrics.is_empty());
}

#[tokio::test]
async fn metrics_call_is_issued_even_with_empty_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&completion_envelope("[]")))
        .expect(1)
        .mount(&server)
        .await;

    let metrics = extract_metrics(&test_client(&server), "Acme Corp", "", "").await;

    assert!(metrics.is_empty());
}

#[tokio::test]
async fn score_parses_well_formed_response() {
    let server = MockServer::start().await;

    let content = r#"{"environmental_score":75,"social_score":80,"governance_score":70,"overall_score":75,"explanation":"strong environmental disclosure"}"#;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&completion_envelope(content)))
        .mount(&server)
        .await;

    let score = score_metrics(&test_client(&server), &[]).await;

    assert_eq!(score.environmental_score, 75);
    assert_eq!(score.overall_score, 75);
}

#[tokio::test]
async fn score_falls_back_on_unreachable_service() {
    // Nothing listens on this port.
    let client = ReasoningClient::with_base_url("test-key", "gpt-4o", 1, "http://127.0.0.1:1")
        .expect("failed to build test ReasoningClient");

    let score = score_metrics(&client, &[]).await;

    assert_eq!(score, ScoreResult::fallback());
}

#[tokio::test]
async fn identical_stub_responses_yield_identical_results() {
    let server = MockServer::start().await;

    let content = r#"[{"category":"environmental","metric":"carbon_emissions_scope1","value":"500","unit":"tCO2e","year":"2023","confidence":0.95}]"#;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&completion_envelope(content)))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let first = extract_metrics(&client, "Acme Corp", "content", "filing").await;
    let second = extract_metrics(&client, "Acme Corp", "content", "filing").await;

    assert_eq!(first, second);
}
