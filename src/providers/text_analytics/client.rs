//! Text Analytics sentiment client
//!
//! Thin reqwest wrapper over the `/text/analytics/{version}/sentiment`
//! endpoint. One POST per batch, no retries.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::json;

use super::error::map_http_error;
use crate::config::AnalyticsConfig;
use crate::providers::{
    BatchDocument, BatchSentimentResponse, ProviderError, SentimentClassifier,
};

const PROVIDER: &str = "text_analytics";

/// Maximum documents per request accepted by the service
pub const MAX_DOCUMENTS_PER_REQUEST: usize = 10;

/// Sentiment analysis client for Azure Text Analytics-compatible services
#[derive(Debug, Clone)]
pub struct TextAnalyticsClient {
    endpoint_url: String,
    client: reqwest::Client,
}

impl TextAnalyticsClient {
    /// Create a new client from the analytics configuration
    pub fn new(config: &AnalyticsConfig) -> Result<Self, ProviderError> {
        let mut headers = HeaderMap::new();
        let key_header = HeaderName::from_static("ocp-apim-subscription-key");
        let key_value = HeaderValue::from_str(&config.api_key).map_err(|e| {
            ProviderError::configuration(PROVIDER, format!("Invalid API key value: {}", e))
        })?;
        headers.insert(key_header, key_value);
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .timeout(config.timeout_duration())
            .default_headers(headers)
            .build()
            .map_err(|e| {
                ProviderError::configuration(
                    PROVIDER,
                    format!("Failed to create HTTP client: {}", e),
                )
            })?;

        Ok(Self {
            endpoint_url: build_endpoint_url(&config.endpoint, &config.api_version)?,
            client,
        })
    }

    /// Full URL of the sentiment endpoint
    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    fn validate_batch(documents: &[BatchDocument]) -> Result<(), ProviderError> {
        if documents.is_empty() {
            return Err(ProviderError::invalid_request(
                PROVIDER,
                "Documents list cannot be empty",
            ));
        }

        if documents.len() > MAX_DOCUMENTS_PER_REQUEST {
            return Err(ProviderError::invalid_request(
                PROVIDER,
                format!(
                    "Maximum {} documents allowed per request",
                    MAX_DOCUMENTS_PER_REQUEST
                ),
            ));
        }

        Ok(())
    }
}

/// Join the service endpoint with the versioned sentiment path
fn build_endpoint_url(endpoint: &str, api_version: &str) -> Result<String, ProviderError> {
    if endpoint.is_empty() {
        return Err(ProviderError::configuration(
            PROVIDER,
            "Endpoint URL not set",
        ));
    }

    let base = endpoint.trim_end_matches('/');
    Ok(format!("{}/text/analytics/{}/sentiment", base, api_version))
}

#[async_trait]
impl SentimentClassifier for TextAnalyticsClient {
    async fn analyze_batch(
        &self,
        documents: &[BatchDocument],
    ) -> Result<BatchSentimentResponse, ProviderError> {
        Self::validate_batch(documents)?;

        let body = json!({ "documents": documents });

        let response = self
            .client
            .post(&self.endpoint_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::timeout(PROVIDER, e.to_string())
                } else {
                    ProviderError::network(PROVIDER, format!("Request failed: {}", e))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(map_http_error(status, &error_body));
        }

        response.json::<BatchSentimentResponse>().await.map_err(|e| {
            ProviderError::response_parsing(PROVIDER, format!("Failed to parse response: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_endpoint_url() {
        let url = build_endpoint_url("https://example.cognitiveservices.azure.com", "v3.1").unwrap();
        assert_eq!(
            url,
            "https://example.cognitiveservices.azure.com/text/analytics/v3.1/sentiment"
        );

        // Trailing slash is normalized
        let url = build_endpoint_url("https://example.cognitiveservices.azure.com/", "v3.1").unwrap();
        assert_eq!(
            url,
            "https://example.cognitiveservices.azure.com/text/analytics/v3.1/sentiment"
        );
    }

    #[test]
    fn test_empty_endpoint_rejected() {
        assert!(build_endpoint_url("", "v3.1").is_err());
    }

    #[test]
    fn test_batch_validation() {
        let doc = BatchDocument {
            id: "0".to_string(),
            text: "great food".to_string(),
            language: "en".to_string(),
        };

        assert!(TextAnalyticsClient::validate_batch(&[]).is_err());
        assert!(TextAnalyticsClient::validate_batch(&[doc.clone()]).is_ok());

        let oversized = vec![doc; MAX_DOCUMENTS_PER_REQUEST + 1];
        assert!(TextAnalyticsClient::validate_batch(&oversized).is_err());
    }

    #[test]
    fn test_client_creation() {
        let config = AnalyticsConfig {
            endpoint: "https://example.cognitiveservices.azure.com".to_string(),
            api_key: "test-key".to_string(),
            ..Default::default()
        };

        let client = TextAnalyticsClient::new(&config).unwrap();
        assert!(client.endpoint_url().ends_with("/sentiment"));
    }
}
