//! # sentipipe
//!
//! Batch sentiment-annotation ETL pipeline. Reads a table from a relational
//! database, classifies a text column through a remote text-analytics API in
//! fixed-size batches, appends `Sentiment` and `SentimentScore` columns, and
//! writes the augmented table back to a database table and a local CSV file,
//! with a terminal distribution report along the way.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sentipipe::{Config, core};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/pipeline.yaml").await?;
//!     let summary = core::pipeline::run(&config).await?;
//!     println!("classified {} of {} rows", summary.classified, summary.rows);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod providers;
pub mod storage;
pub mod utils;
pub mod viz;

// Re-export main types
pub use config::Config;
pub use core::pipeline::RunSummary;
pub use providers::{ProviderError, SentimentClassifier, SentimentLabel};
pub use utils::error::{PipelineError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
