//! In-memory tabular record set
//!
//! Dynamic rows read from the relational source: ordered column names plus
//! one JSON object per row. The pipeline augments this structure in place
//! before handing it to the sinks.

use crate::utils::error::{PipelineError, Result};
use serde_json::{Map, Value};

/// One record, keyed by column name
pub type Row = Map<String, Value>;

/// A tabular record set with a stable column order
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Build a table from raw JSON rows as returned by the database layer
    ///
    /// Column order is taken from the first row. Every row must be a JSON
    /// object. An empty row set yields a table with no columns.
    pub fn from_json_rows(raw_rows: Vec<Value>) -> Result<Self> {
        let mut rows = Vec::with_capacity(raw_rows.len());
        for value in raw_rows {
            match value {
                Value::Object(map) => rows.push(map),
                other => {
                    return Err(PipelineError::Validation(format!(
                        "expected a JSON object per row, got: {}",
                        other
                    )));
                }
            }
        }

        let columns = rows
            .first()
            .map(|row| row.keys().cloned().collect())
            .unwrap_or_default();

        Ok(Self { columns, rows })
    }

    /// Ordered column names
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Extract a text column as the ordered document sequence
    ///
    /// Null cells become empty strings, non-string scalars are stringified.
    /// Missing column is a fatal validation error when the table has rows.
    pub fn text_column(&self, name: &str) -> Result<Vec<String>> {
        if self.rows.is_empty() {
            return Ok(Vec::new());
        }

        if !self.columns.iter().any(|c| c == name) {
            return Err(PipelineError::MissingColumn(name.to_string()));
        }

        Ok(self
            .rows
            .iter()
            .map(|row| cell_to_string(row.get(name).unwrap_or(&Value::Null)))
            .collect())
    }

    /// Append a column; `values` must hold one entry per row
    pub fn push_column(&mut self, name: &str, values: Vec<Value>) -> Result<()> {
        if values.len() != self.rows.len() {
            return Err(PipelineError::Validation(format!(
                "column '{}' has {} values for {} rows",
                name,
                values.len(),
                self.rows.len()
            )));
        }

        for (row, value) in self.rows.iter_mut().zip(values) {
            row.insert(name.to_string(), value);
        }
        self.columns.push(name.to_string());

        Ok(())
    }
}

/// Render a cell value as text
pub fn cell_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_table() -> Table {
        Table::from_json_rows(vec![
            json!({"Id": 1, "Cleaned_Text": "great food", "Stars": 5}),
            json!({"Id": 2, "Cleaned_Text": "terrible service", "Stars": 1}),
        ])
        .unwrap()
    }

    #[test]
    fn test_columns_from_first_row() {
        let table = sample_table();
        assert_eq!(table.columns(), &["Id", "Cleaned_Text", "Stars"]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_text_column_extraction() {
        let table = sample_table();
        let documents = table.text_column("Cleaned_Text").unwrap();
        assert_eq!(documents, vec!["great food", "terrible service"]);
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let table = sample_table();
        let err = table.text_column("Review_Text").unwrap_err();
        assert!(matches!(err, PipelineError::MissingColumn(_)));
    }

    #[test]
    fn test_empty_table_yields_no_documents() {
        let table = Table::from_json_rows(vec![]).unwrap();
        assert!(table.text_column("Cleaned_Text").unwrap().is_empty());
    }

    #[test]
    fn test_null_and_numeric_cells() {
        let table = Table::from_json_rows(vec![json!({"Cleaned_Text": null}), json!({"Cleaned_Text": 42})])
            .unwrap();
        let documents = table.text_column("Cleaned_Text").unwrap();
        assert_eq!(documents, vec!["", "42"]);
    }

    #[test]
    fn test_push_column() {
        let mut table = sample_table();
        table
            .push_column("Sentiment", vec![json!("positive"), json!("negative")])
            .unwrap();

        assert_eq!(table.columns().last().unwrap(), "Sentiment");
        assert_eq!(table.rows()[1]["Sentiment"], json!("negative"));
    }

    #[test]
    fn test_push_column_length_mismatch() {
        let mut table = sample_table();
        let result = table.push_column("Sentiment", vec![json!("positive")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_object_row_rejected() {
        assert!(Table::from_json_rows(vec![json!([1, 2, 3])]).is_err());
    }
}
