//! Pipeline core: batching, aggregation, tabular data, orchestration

pub mod aggregate;
pub mod batch;
pub mod pipeline;
pub mod table;

pub use aggregate::{Annotation, SentimentAnnotations, SentimentColumns, classify_documents};
pub use batch::partition;
pub use pipeline::{RunSummary, run, run_with_classifier};
pub use table::{Row, Table};
