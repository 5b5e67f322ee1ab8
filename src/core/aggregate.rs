//! Classification result aggregation
//!
//! Folds per-document classifier results into annotation columns aligned to
//! the input order. Documents the service flags as errored keep their
//! position as an empty slot, so the augmented table never desynchronizes
//! from the source rows; the compacted column pair skips them.

use crate::core::batch::partition;
use crate::providers::{
    BatchDocument, BatchSentimentResponse, ProviderError, SentimentClassifier, SentimentLabel,
};
use crate::utils::error::{PipelineError, Result};
use tracing::{debug, warn};

/// Sentiment annotation for one successfully classified document
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub label: SentimentLabel,
    /// Positive confidence minus negative confidence
    pub score: f64,
}

/// Per-input-position annotations, `None` where classification errored
#[derive(Debug, Clone, Default)]
pub struct SentimentAnnotations {
    slots: Vec<Option<Annotation>>,
}

/// The two aligned output sequences over surviving documents
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SentimentColumns {
    pub sentiments: Vec<String>,
    pub sentiment_scores: Vec<f64>,
}

impl SentimentAnnotations {
    pub fn new(document_count: usize) -> Self {
        Self {
            slots: vec![None; document_count],
        }
    }

    /// Record one batch response, in response order
    ///
    /// Successes land at the input position carried in the document id;
    /// per-document errors are logged and leave the slot empty.
    pub fn record(&mut self, response: &BatchSentimentResponse) -> std::result::Result<(), ProviderError> {
        for doc in &response.documents {
            let position = self.parse_position(&doc.id)?;
            self.slots[position] = Some(Annotation {
                label: doc.sentiment,
                score: doc.confidence_scores.polarity(),
            });
        }

        for err in &response.errors {
            let position = self.parse_position(&err.id)?;
            warn!(
                position,
                code = %err.error.code,
                "document dropped from sentiment columns: {}",
                err.error.message
            );
            self.slots[position] = None;
        }

        Ok(())
    }

    fn parse_position(&self, id: &str) -> std::result::Result<usize, ProviderError> {
        let position: usize = id.parse().map_err(|_| {
            ProviderError::response_parsing(
                "text_analytics",
                format!("non-numeric document id '{}'", id),
            )
        })?;

        if position >= self.slots.len() {
            return Err(ProviderError::response_parsing(
                "text_analytics",
                format!("document id '{}' out of range", id),
            ));
        }

        Ok(position)
    }

    /// Annotation per input position, `None` for errored documents
    pub fn slots(&self) -> &[Option<Annotation>] {
        &self.slots
    }

    /// Count of successfully classified documents
    pub fn classified(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Count of documents the service flagged as errored
    pub fn errored(&self) -> usize {
        self.slots.len() - self.classified()
    }

    /// Derive the compacted column pair over surviving documents
    ///
    /// Both sequences have length `classified()`, in input order.
    pub fn columns(&self) -> SentimentColumns {
        let mut columns = SentimentColumns::default();
        for annotation in self.slots.iter().flatten() {
            columns.sentiments.push(annotation.label.to_string());
            columns.sentiment_scores.push(annotation.score);
        }
        columns
    }
}

/// Classify every document, one batch at a time, and fold the results
///
/// Batches are submitted sequentially in input order; a failed call aborts
/// the whole run. Per-document errors never abort.
pub async fn classify_documents(
    classifier: &dyn SentimentClassifier,
    documents: &[String],
    batch_size: usize,
    language: &str,
) -> Result<SentimentAnnotations> {
    if batch_size == 0 {
        return Err(PipelineError::Validation(
            "batch size must be at least 1".to_string(),
        ));
    }

    let mut annotations = SentimentAnnotations::new(documents.len());

    for (batch_index, batch) in partition(documents, batch_size).enumerate() {
        let offset = batch_index * batch_size;
        let payload: Vec<BatchDocument> = batch
            .iter()
            .enumerate()
            .map(|(i, text)| BatchDocument {
                id: (offset + i).to_string(),
                text: text.clone(),
                language: language.to_string(),
            })
            .collect();

        debug!(batch_index, size = payload.len(), "submitting batch");
        let response = classifier.analyze_batch(&payload).await?;
        annotations.record(&response)?;
    }

    Ok(annotations)
}
