//! Pipeline orchestration
//!
//! Linear, single-threaded run: fetch the source table, classify the text
//! column batch by batch, append the two sentiment columns, render the
//! report, then persist to the database sink and the CSV file. Retrieval
//! and classification failures abort; each persistence failure is logged
//! and does not stop the other write.

use crate::config::Config;
use crate::core::aggregate::classify_documents;
use crate::core::table::Table;
use crate::providers::SentimentClassifier;
use crate::providers::text_analytics::TextAnalyticsClient;
use crate::storage::{SqlStore, write_csv};
use crate::utils::error::Result;
use crate::viz::SentimentReport;
use serde_json::{Value, json};
use tracing::{error, info};

/// Name of the appended label column
pub const SENTIMENT_COLUMN: &str = "Sentiment";
/// Name of the appended polarity column
pub const SENTIMENT_SCORE_COLUMN: &str = "SentimentScore";

/// Outcome of one pipeline run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Rows read from the source table
    pub rows: usize,
    /// Documents successfully classified
    pub classified: usize,
    /// Documents the service flagged as errored
    pub errored: usize,
    /// Whether the database write succeeded
    pub db_write_ok: bool,
    /// Whether the CSV write succeeded
    pub csv_write_ok: bool,
}

/// Run the full pipeline with the configured Text Analytics client
pub async fn run(config: &Config) -> Result<RunSummary> {
    let classifier = TextAnalyticsClient::new(&config.analytics)?;
    run_with_classifier(config, &classifier).await
}

/// Run the full pipeline against any classifier implementation
pub async fn run_with_classifier(
    config: &Config,
    classifier: &dyn SentimentClassifier,
) -> Result<RunSummary> {
    config.validate()?;

    let source = SqlStore::connect(
        &config.source.url,
        config.source.max_connections,
        config.source.connection_timeout,
    )
    .await?;
    let mut table = source.fetch_table(&config.source.table).await?;
    let documents = table.text_column(&config.source.text_column)?;
    info!(
        rows = table.len(),
        column = %config.source.text_column,
        "extracted documents for classification"
    );

    let annotations = classify_documents(
        classifier,
        &documents,
        config.pipeline.batch_size,
        &config.analytics.language,
    )
    .await?;

    // Errored documents keep their row, with null sentiment cells, so the
    // appended columns stay aligned to the source rows.
    let labels: Vec<Value> = annotations
        .slots()
        .iter()
        .map(|slot| match slot {
            Some(annotation) => Value::String(annotation.label.to_string()),
            None => Value::Null,
        })
        .collect();
    let scores: Vec<Value> = annotations
        .slots()
        .iter()
        .map(|slot| match slot {
            Some(annotation) => json!(annotation.score),
            None => Value::Null,
        })
        .collect();
    table.push_column(SENTIMENT_COLUMN, labels)?;
    table.push_column(SENTIMENT_SCORE_COLUMN, scores)?;

    if config.output.charts {
        let columns = annotations.columns();
        SentimentReport::from_labels(&columns.sentiments).print();
    }

    let db_write_ok = match write_to_sink(config, &table).await {
        Ok(()) => true,
        Err(e) => {
            error!("Failed to save augmented table to database: {}", e);
            false
        }
    };

    let csv_write_ok = match write_csv(&config.output.csv_path, &table) {
        Ok(()) => true,
        Err(e) => {
            error!("Failed to save augmented table to CSV: {}", e);
            false
        }
    };

    let summary = RunSummary {
        rows: table.len(),
        classified: annotations.classified(),
        errored: annotations.errored(),
        db_write_ok,
        csv_write_ok,
    };
    info!(
        rows = summary.rows,
        classified = summary.classified,
        errored = summary.errored,
        "pipeline run complete"
    );

    Ok(summary)
}

async fn write_to_sink(config: &Config, table: &Table) -> Result<()> {
    let sink = SqlStore::connect(
        &config.sink.url,
        config.sink.max_connections,
        config.sink.connection_timeout,
    )
    .await?;
    sink.replace_table(&config.sink.table, table).await
}
