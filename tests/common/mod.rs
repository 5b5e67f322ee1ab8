//! Shared test fixtures
#![allow(dead_code)]

use sentipipe::Config;
use serde_json::{Value, json};
use std::path::Path;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-key";
pub const SENTIMENT_PATH: &str = "/text/analytics/v3.1/sentiment";

/// Successful per-document classification payload
pub fn sentiment_doc(id: usize, sentiment: &str, positive: f64, neutral: f64, negative: f64) -> Value {
    json!({
        "id": id.to_string(),
        "sentiment": sentiment,
        "confidenceScores": {
            "positive": positive,
            "neutral": neutral,
            "negative": negative
        }
    })
}

/// Per-document error payload
pub fn doc_error(id: usize) -> Value {
    json!({
        "id": id.to_string(),
        "error": {"code": "InvalidDocument", "message": "Document text is empty."}
    })
}

/// Full batch response body
pub fn response_body(documents: Vec<Value>, errors: Vec<Value>) -> Value {
    json!({
        "documents": documents,
        "errors": errors,
        "modelVersion": "2023-04-15"
    })
}

/// Mount a sentiment mock that answers every authenticated request with `body`
pub async fn mount_sentiment_mock(server: &MockServer, body: Value) {
    Mock::given(method("POST"))
        .and(path(SENTIMENT_PATH))
        .and(header("Ocp-Apim-Subscription-Key", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// SQLite URL for a database file, created on first connect
pub fn sqlite_url(path: &Path) -> String {
    format!("sqlite://{}?mode=rwc", path.display())
}

/// Pipeline configuration wired to a mock server and sqlite files
pub fn test_config(source_url: &str, sink_url: &str, endpoint: &str, csv_path: &Path) -> Config {
    let mut config = Config::default();
    config.source.url = source_url.to_string();
    config.source.table = "reviews".to_string();
    config.analytics.endpoint = endpoint.to_string();
    config.analytics.api_key = TEST_API_KEY.to_string();
    config.sink.url = sink_url.to_string();
    config.sink.table = "reviews_sentiments".to_string();
    config.output.csv_path = csv_path.display().to_string();
    config.output.charts = false;
    config
}
