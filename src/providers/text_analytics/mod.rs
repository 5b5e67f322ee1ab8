//! Azure Text Analytics-compatible sentiment classifier

pub mod client;
pub mod error;

pub use client::TextAnalyticsClient;
