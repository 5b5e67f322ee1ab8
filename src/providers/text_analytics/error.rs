//! Text Analytics error mapping

use crate::providers::ProviderError;

const PROVIDER: &str = "text_analytics";

/// Map an HTTP error status to a structured provider error
pub fn map_http_error(status_code: u16, response_body: &str) -> ProviderError {
    match status_code {
        400 => ProviderError::invalid_request(PROVIDER, extract_error_message(response_body)),
        401 | 403 => ProviderError::authentication(PROVIDER, extract_error_message(response_body)),
        404 => ProviderError::api_error(PROVIDER, 404, "Endpoint not found"),
        429 => {
            let retry_after = parse_retry_after_from_body(response_body);
            ProviderError::rate_limit(PROVIDER, retry_after)
        }
        500 | 502 => ProviderError::api_error(PROVIDER, status_code, extract_error_message(response_body)),
        503 => ProviderError::provider_unavailable(PROVIDER, "Service unavailable"),
        504 => ProviderError::timeout(PROVIDER, "Gateway timeout"),
        _ => ProviderError::api_error(PROVIDER, status_code, response_body),
    }
}

/// Pull a retry hint out of an error body, if the service provided one
fn parse_retry_after_from_body(response_body: &str) -> Option<u64> {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(response_body) {
        if let Some(retry_after) = json
            .get("error")
            .and_then(|e| e.get("retry_after"))
            .or_else(|| json.get("retry_after"))
        {
            if let Some(seconds) = retry_after.as_u64() {
                return Some(seconds);
            }
        }
    }

    if response_body.contains("rate limit") || response_body.contains("quota") {
        return Some(60);
    }

    None
}

/// Extract a human-readable message from an error response body
pub fn extract_error_message(response_body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(response_body) {
        let possible_paths: Vec<Vec<&str>> = vec![
            vec!["error", "message"],
            vec!["error", "innererror", "message"],
            vec!["message"],
        ];

        for path in &possible_paths {
            let mut current = &json;
            let mut matched = true;
            for &key in path {
                match current.get(key) {
                    Some(next) => current = next,
                    None => {
                        matched = false;
                        break;
                    }
                }
            }

            if matched {
                if let Some(message) = current.as_str() {
                    return message.to_string();
                }
            }
        }

        return json.to_string();
    }

    response_body.to_string()
}
