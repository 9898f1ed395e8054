use pretty_assertions::assert_eq;
use serde_json::json;
use trendpost_engine::{GroqSummarizer, SummarizeError, Summarizer};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn summarize_posts_chat_completion_and_returns_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "llama-3.3-70b-versatile",
            "temperature": 0.7,
            "max_tokens": 150,
            "top_p": 1,
            "stream": false,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                { "message": { "role": "assistant", "content": "A concise summary." } }
            ]
        })))
        .mount(&server)
        .await;

    let summarizer = GroqSummarizer::new("test-key").with_base_url(server.uri());
    let summary = summarizer.summarize("Analyze this", 150).await.unwrap();
    assert_eq!(summary, "A concise summary.");
}

#[tokio::test]
async fn api_rejection_is_an_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&server)
        .await;

    let summarizer = GroqSummarizer::new("test-key").with_base_url(server.uri());
    let err = summarizer.summarize("Analyze this", 150).await.unwrap_err();
    assert!(matches!(err, SummarizeError::Api(_)));
}

#[tokio::test]
async fn malformed_payload_is_a_malformed_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let summarizer = GroqSummarizer::new("test-key").with_base_url(server.uri());
    let err = summarizer.summarize("Analyze this", 150).await.unwrap_err();
    assert!(matches!(err, SummarizeError::Malformed(_)));
}

#[tokio::test]
async fn empty_choices_is_a_malformed_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let summarizer = GroqSummarizer::new("test-key").with_base_url(server.uri());
    let err = summarizer.summarize("Analyze this", 150).await.unwrap_err();
    assert!(matches!(err, SummarizeError::Malformed(_)));
}
