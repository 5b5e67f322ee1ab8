//! Local CSV sink

use crate::core::table::{Table, cell_to_string};
use crate::utils::error::Result;
use serde_json::Value;
use std::path::Path;
use tracing::info;

/// Write the table as delimited text: header row plus one row per record
///
/// The file is overwritten unconditionally.
pub fn write_csv<P: AsRef<Path>>(path: P, table: &Table) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(table.columns())?;

    for row in table.rows() {
        let record: Vec<String> = table
            .columns()
            .iter()
            .map(|column| cell_to_string(row.get(column).unwrap_or(&Value::Null)))
            .collect();
        writer.write_record(&record)?;
    }

    writer.flush()?;
    info!(rows = table.len(), "wrote CSV file {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_write_csv() {
        let table = Table::from_json_rows(vec![
            json!({"Id": 1, "Cleaned_Text": "great food", "Sentiment": "positive", "SentimentScore": 0.85}),
            json!({"Id": 2, "Cleaned_Text": "terrible, awful", "Sentiment": null, "SentimentScore": null}),
        ])
        .unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(&path, &table).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next().unwrap(), "Id,Cleaned_Text,Sentiment,SentimentScore");
        assert_eq!(lines.next().unwrap(), "1,great food,positive,0.85");
        // Null cells are empty, embedded commas are quoted
        assert_eq!(lines.next().unwrap(), "2,\"terrible, awful\",,");
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "stale contents").unwrap();

        let table = Table::from_json_rows(vec![json!({"A": 1})]).unwrap();
        write_csv(&path, &table).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("A\n"));
        assert!(!content.contains("stale"));
    }
}
