//! Error handling for the pipeline
//!
//! This module defines the top-level error type used throughout the crate.

use crate::providers::ProviderError;
use thiserror::Error;

/// Result type alias for the pipeline
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Main error type for the pipeline
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// The source table does not carry the configured text column
    #[error("source table is missing required column '{0}'")]
    MissingColumn(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Schema build errors (drop/create/insert statement construction)
    #[error("Schema error: {0}")]
    Schema(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// CSV write errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Classifier errors
    #[error("Classifier error: {0}")]
    Provider(#[from] ProviderError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PipelineError::Config("missing endpoint".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing endpoint");

        let err = PipelineError::MissingColumn("Cleaned_Text".to_string());
        assert!(err.to_string().contains("Cleaned_Text"));
    }

    #[test]
    fn test_provider_error_conversion() {
        let provider_err = ProviderError::authentication("text_analytics", "bad key");
        let err: PipelineError = provider_err.into();
        assert!(matches!(err, PipelineError::Provider(_)));
    }
}
