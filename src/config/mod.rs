//! Configuration management for the pipeline
//!
//! All endpoints, credentials, and table names are supplied here, never
//! hard-coded: load from a YAML file or from environment variables.

pub mod models;

pub use models::{AnalyticsConfig, OutputConfig, PipelineOptions, SinkConfig, SourceConfig};

use crate::utils::error::{PipelineError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};
use url::Url;

/// Main configuration struct for the pipeline
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Relational source (full-table read)
    pub source: SourceConfig,
    /// Sentiment classifier service
    pub analytics: AnalyticsConfig,
    /// Relational sink (replace-table write)
    pub sink: SinkConfig,
    /// Local outputs
    #[serde(default)]
    pub output: OutputConfig,
    /// Pipeline tuning
    #[serde(default)]
    pub pipeline: PipelineOptions,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| PipelineError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| PipelineError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    ///
    /// Variable names mirror the YAML layout: `SENTIPIPE_SOURCE_URL`,
    /// `SENTIPIPE_SOURCE_TABLE`, `SENTIPIPE_TEXT_COLUMN`,
    /// `SENTIPIPE_ANALYTICS_ENDPOINT`, `SENTIPIPE_ANALYTICS_KEY`,
    /// `SENTIPIPE_SINK_URL`, `SENTIPIPE_SINK_TABLE`, `SENTIPIPE_CSV_PATH`,
    /// `SENTIPIPE_BATCH_SIZE`.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Config::default();

        config.source.url = require_env("SENTIPIPE_SOURCE_URL")?;
        config.source.table = require_env("SENTIPIPE_SOURCE_TABLE")?;
        if let Ok(column) = std::env::var("SENTIPIPE_TEXT_COLUMN") {
            config.source.text_column = column;
        }

        config.analytics.endpoint = require_env("SENTIPIPE_ANALYTICS_ENDPOINT")?;
        config.analytics.api_key = require_env("SENTIPIPE_ANALYTICS_KEY")?;

        config.sink.url = require_env("SENTIPIPE_SINK_URL")?;
        config.sink.table = require_env("SENTIPIPE_SINK_TABLE")?;

        if let Ok(path) = std::env::var("SENTIPIPE_CSV_PATH") {
            config.output.csv_path = path;
        }

        if let Ok(batch_size) = std::env::var("SENTIPIPE_BATCH_SIZE") {
            config.pipeline.batch_size = batch_size.parse().map_err(|_| {
                PipelineError::Config(format!("Invalid SENTIPIPE_BATCH_SIZE: {}", batch_size))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        require_field(&self.source.url, "source.url")?;
        require_field(&self.source.table, "source.table")?;
        require_field(&self.source.text_column, "source.text_column")?;
        require_field(&self.sink.url, "sink.url")?;
        require_field(&self.sink.table, "sink.table")?;
        require_field(&self.analytics.endpoint, "analytics.endpoint")?;
        require_field(&self.analytics.api_key, "analytics.api_key")?;
        require_field(&self.output.csv_path, "output.csv_path")?;

        Url::parse(&self.analytics.endpoint).map_err(|e| {
            PipelineError::Config(format!(
                "analytics.endpoint is not a valid URL: {}",
                e
            ))
        })?;

        if self.pipeline.batch_size == 0 {
            return Err(PipelineError::Config(
                "pipeline.batch_size must be at least 1".to_string(),
            ));
        }

        debug!("Configuration validation completed");
        Ok(())
    }
}

fn require_field(value: &str, name: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PipelineError::Config(format!("{} must not be empty", name)));
    }
    Ok(())
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| PipelineError::Config(format!("Environment variable {} not set", name)))
}
