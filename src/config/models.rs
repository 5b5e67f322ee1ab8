//! Configuration section models

use serde::{Deserialize, Serialize};
use std::time::Duration;

fn default_text_column() -> String {
    "Cleaned_Text".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_connection_timeout() -> u64 {
    30
}

fn default_api_version() -> String {
    "v3.1".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_request_timeout() -> u64 {
    60
}

fn default_csv_path() -> String {
    "sentiment_results.csv".to_string()
}

fn default_charts() -> bool {
    true
}

fn default_batch_size() -> usize {
    10
}

/// Relational source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Database URL
    pub url: String,
    /// Table to read (full-table scan)
    pub table: String,
    /// Column holding the documents to classify
    #[serde(default = "default_text_column")]
    pub text_column: String,
    /// Maximum connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            table: String::new(),
            text_column: default_text_column(),
            max_connections: default_max_connections(),
            connection_timeout: default_connection_timeout(),
        }
    }
}

/// Relational sink configuration (drop-and-recreate write)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SinkConfig {
    /// Database URL
    pub url: String,
    /// Table to replace with the augmented rows
    pub table: String,
    /// Maximum connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            table: String::new(),
            max_connections: default_max_connections(),
            connection_timeout: default_connection_timeout(),
        }
    }
}

/// Text analytics service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Service endpoint, e.g. `https://<resource>.cognitiveservices.azure.com`
    pub endpoint: String,
    /// Subscription key
    pub api_key: String,
    /// API version path segment
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Language hint sent with every document
    #[serde(default = "default_language")]
    pub language: String,
    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub timeout: u64,
}

impl AnalyticsConfig {
    /// Request timeout as a [`Duration`]
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            api_key: String::new(),
            api_version: default_api_version(),
            language: default_language(),
            timeout: default_request_timeout(),
        }
    }
}

/// Local output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// CSV file path, overwritten on every run
    #[serde(default = "default_csv_path")]
    pub csv_path: String,
    /// Render the terminal distribution charts
    #[serde(default = "default_charts")]
    pub charts: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
            charts: default_charts(),
        }
    }
}

/// Pipeline tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineOptions {
    /// Documents per classification request, must be >= 1
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
        }
    }
}
