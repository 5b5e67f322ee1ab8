//! Classification providers
//!
//! The pipeline talks to classifiers through the [`SentimentClassifier`]
//! trait; `text_analytics` is the Azure Text Analytics-compatible client.

pub mod error;
pub mod text_analytics;
pub mod types;

pub use error::ProviderError;
pub use types::{
    BatchDocument, BatchSentimentResponse, ConfidenceScores, DocumentError, ErrorDetail,
    SentimentDocument, SentimentLabel,
};

use async_trait::async_trait;

/// Batch sentiment classification capability
///
/// One call per batch, synchronous from the caller's point of view. A
/// returned error aborts the run; per-document failures are carried inside
/// the response instead.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    async fn analyze_batch(
        &self,
        documents: &[BatchDocument],
    ) -> Result<BatchSentimentResponse, ProviderError>;
}
