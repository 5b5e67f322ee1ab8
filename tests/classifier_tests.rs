//! Text Analytics client tests against a mock HTTP server

mod common;

use common::*;
use sentipipe::config::AnalyticsConfig;
use sentipipe::providers::text_analytics::TextAnalyticsClient;
use sentipipe::providers::{BatchDocument, ProviderError, SentimentClassifier, SentimentLabel};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> TextAnalyticsClient {
    let config = AnalyticsConfig {
        endpoint: server.uri(),
        api_key: TEST_API_KEY.to_string(),
        ..Default::default()
    };
    TextAnalyticsClient::new(&config).unwrap()
}

fn batch(texts: &[&str]) -> Vec<BatchDocument> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| BatchDocument {
            id: i.to_string(),
            text: text.to_string(),
            language: "en".to_string(),
        })
        .collect()
}

#[tokio::test]
async fn sends_expected_request_shape() {
    let server = MockServer::start().await;
    mount_sentiment_mock(
        &server,
        response_body(vec![sentiment_doc(0, "positive", 0.9, 0.05, 0.05)], vec![]),
    )
    .await;

    let client = client_for(&server);
    client.analyze_batch(&batch(&["great food"])).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let body: serde_json::Value = requests[0].body_json().unwrap();
    assert_eq!(
        body,
        json!({
            "documents": [
                {"id": "0", "text": "great food", "language": "en"}
            ]
        })
    );
}

#[tokio::test]
async fn parses_successful_response() {
    let server = MockServer::start().await;
    mount_sentiment_mock(
        &server,
        response_body(
            vec![
                sentiment_doc(0, "positive", 0.9, 0.05, 0.05),
                sentiment_doc(1, "negative", 0.05, 0.05, 0.9),
            ],
            vec![],
        ),
    )
    .await;

    let client = client_for(&server);
    let response = client
        .analyze_batch(&batch(&["great food", "terrible service"]))
        .await
        .unwrap();

    assert_eq!(response.documents.len(), 2);
    assert_eq!(response.documents[0].sentiment, SentimentLabel::Positive);
    assert!((response.documents[0].confidence_scores.polarity() - 0.85).abs() < 1e-9);
    assert!(response.errors.is_empty());
}

#[tokio::test]
async fn surfaces_per_document_errors_without_failing() {
    let server = MockServer::start().await;
    mount_sentiment_mock(
        &server,
        response_body(
            vec![sentiment_doc(0, "positive", 0.9, 0.05, 0.05)],
            vec![doc_error(1)],
        ),
    )
    .await;

    let client = client_for(&server);
    let response = client.analyze_batch(&batch(&["great food", ""])).await.unwrap();

    assert_eq!(response.documents.len(), 1);
    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].id, "1");
}

#[tokio::test]
async fn maps_authentication_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SENTIMENT_PATH))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"error": {"message": "Access denied"}})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.analyze_batch(&batch(&["a"])).await.unwrap_err();
    assert!(matches!(err, ProviderError::Authentication { .. }));
}

#[tokio::test]
async fn maps_server_error_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SENTIMENT_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.analyze_batch(&batch(&["a"])).await.unwrap_err();
    assert!(matches!(err, ProviderError::ApiError { status: 500, .. }));
}

#[tokio::test]
async fn malformed_body_is_a_parsing_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SENTIMENT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.analyze_batch(&batch(&["a"])).await.unwrap_err();
    assert!(matches!(err, ProviderError::ResponseParsing { .. }));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_network_error() {
    let config = AnalyticsConfig {
        // Reserved port with nothing listening
        endpoint: "http://127.0.0.1:9".to_string(),
        api_key: TEST_API_KEY.to_string(),
        ..Default::default()
    };
    let client = TextAnalyticsClient::new(&config).unwrap();

    let err = client.analyze_batch(&batch(&["a"])).await.unwrap_err();
    assert!(matches!(
        err,
        ProviderError::Network { .. } | ProviderError::Timeout { .. }
    ));
}
