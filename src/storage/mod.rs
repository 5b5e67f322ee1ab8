//! Storage backends
//!
//! `database` is the relational source/sink, `files` the local CSV sink.

pub mod database;
pub mod files;

pub use database::SqlStore;
pub use files::write_csv;
