//! Shared classification types
//!
//! Wire-level request/response structures for batch sentiment classification,
//! shared between the provider clients and the aggregation core.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentiment label returned by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
    /// Document contains both positive and negative sentences
    Mixed,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Mixed => "mixed",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-class confidence scores, expected to sum to 1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceScores {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

impl ConfidenceScores {
    /// Signed polarity: positive confidence minus negative confidence
    pub fn polarity(&self) -> f64 {
        self.positive - self.negative
    }
}

/// Single document in a batch request
///
/// The `id` is the document's global position in the input sequence, so
/// results can be realigned with the source rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchDocument {
    pub id: String,
    pub text: String,
    pub language: String,
}

/// Successful per-document classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentDocument {
    pub id: String,
    pub sentiment: SentimentLabel,
    #[serde(rename = "confidenceScores")]
    pub confidence_scores: ConfidenceScores,
}

/// Per-document error marker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentError {
    pub id: String,
    pub error: ErrorDetail,
}

/// Error payload attached to a [`DocumentError`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// Response to one batch classification call
///
/// Successes arrive in `documents`, per-document failures in `errors`; both
/// reference documents by id. A non-empty `errors` array never fails the
/// batch, only the documents it names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSentimentResponse {
    pub documents: Vec<SentimentDocument>,
    #[serde(default)]
    pub errors: Vec<DocumentError>,
    #[serde(rename = "modelVersion", default)]
    pub model_version: Option<String>,
}
