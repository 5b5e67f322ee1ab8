//! Relational source and sink
//!
//! SeaORM-based store over any supported backend URL. Reads are full-table
//! scans into dynamic JSON rows; writes use drop-and-recreate semantics with
//! column types inferred from the row values.

use crate::core::table::Table;
use crate::utils::error::{PipelineError, Result};
use sea_orm::sea_query::{Alias, Asterisk, ColumnDef, Query, SimpleExpr, Value as DbValue};
use sea_orm::sea_query::Table as TableDef;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, FromQueryResult, JsonValue,
};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

/// Rows per INSERT statement when writing a table back
const INSERT_CHUNK_SIZE: usize = 100;

/// SQL column type inferred for a table column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Integer,
    Float,
    Bool,
    Text,
}

/// Database-backed table store
#[derive(Debug)]
pub struct SqlStore {
    db: DatabaseConnection,
}

impl SqlStore {
    /// Open a connection to the given database URL
    pub async fn connect(url: &str, max_connections: u32, connect_timeout: u64) -> Result<Self> {
        let mut opt = ConnectOptions::new(url.to_owned());
        opt.max_connections(max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(connect_timeout))
            .sqlx_logging(false);

        let db = Database::connect(opt).await?;

        info!("Database connection established");
        Ok(Self { db })
    }

    /// Read every row of the named table
    pub async fn fetch_table(&self, table: &str) -> Result<Table> {
        validate_identifier(table)?;
        debug!("Fetching all rows from table: {}", table);

        let select = Query::select()
            .column(Asterisk)
            .from(Alias::new(table))
            .to_owned();
        let stmt = self.db.get_database_backend().build(&select);

        let rows: Vec<JsonValue> = JsonValue::find_by_statement(stmt).all(&self.db).await?;

        let table = Table::from_json_rows(rows)?;
        info!(rows = table.len(), "fetched source table");
        Ok(table)
    }

    /// Replace the named table with the given rows (drop-and-recreate)
    pub async fn replace_table(&self, table: &str, data: &Table) -> Result<()> {
        validate_identifier(table)?;

        if data.columns().is_empty() {
            return Err(PipelineError::Validation(
                "cannot write a table with no columns".to_string(),
            ));
        }

        let kinds: Vec<ColumnKind> = data
            .columns()
            .iter()
            .map(|column| infer_column_kind(data, column))
            .collect();

        let backend = self.db.get_database_backend();

        let drop = TableDef::drop()
            .table(Alias::new(table))
            .if_exists()
            .to_owned();
        self.db.execute(backend.build(&drop)).await?;

        let mut create = TableDef::create();
        create.table(Alias::new(table));
        for (column, kind) in data.columns().iter().zip(&kinds) {
            let mut def = ColumnDef::new(Alias::new(column.as_str()));
            match kind {
                ColumnKind::Integer => def.big_integer(),
                ColumnKind::Float => def.double(),
                ColumnKind::Bool => def.boolean(),
                ColumnKind::Text => def.text(),
            };
            def.null();
            create.col(def);
        }
        self.db.execute(backend.build(&create)).await?;

        for chunk in data.rows().chunks(INSERT_CHUNK_SIZE) {
            let mut insert = Query::insert();
            insert
                .into_table(Alias::new(table))
                .columns(
                    data.columns()
                        .iter()
                        .map(|c| Alias::new(c.as_str()))
                        .collect::<Vec<_>>(),
                );

            for row in chunk {
                let values: Vec<SimpleExpr> = data
                    .columns()
                    .iter()
                    .zip(&kinds)
                    .map(|(column, kind)| {
                        to_db_value(row.get(column).unwrap_or(&Value::Null), *kind).into()
                    })
                    .collect();
                insert
                    .values(values)
                    .map_err(|e| PipelineError::Schema(e.to_string()))?;
            }

            self.db.execute(backend.build(&insert)).await?;
        }

        info!(rows = data.len(), "replaced table {}", table);
        Ok(())
    }
}

/// Reject table names that cannot be safely used as identifiers
fn validate_identifier(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');

    if !valid {
        return Err(PipelineError::Validation(format!(
            "invalid table name: '{}'",
            name
        )));
    }
    Ok(())
}

/// Infer a column's SQL type from its first non-null value
///
/// Integer columns that also contain floats widen to Float; all-null
/// columns fall back to Text.
fn infer_column_kind(data: &Table, column: &str) -> ColumnKind {
    let mut kind: Option<ColumnKind> = None;

    for row in data.rows() {
        let cell_kind = match row.get(column) {
            Some(Value::Bool(_)) => ColumnKind::Bool,
            Some(Value::Number(n)) if n.is_i64() || n.is_u64() => ColumnKind::Integer,
            Some(Value::Number(_)) => ColumnKind::Float,
            Some(Value::String(_)) => ColumnKind::Text,
            Some(Value::Null) | None => continue,
            Some(_) => ColumnKind::Text,
        };

        kind = Some(match (kind, cell_kind) {
            (None, k) => k,
            (Some(ColumnKind::Integer), ColumnKind::Float)
            | (Some(ColumnKind::Float), ColumnKind::Integer) => ColumnKind::Float,
            (Some(k), c) if k == c => k,
            _ => return ColumnKind::Text,
        });
    }

    kind.unwrap_or(ColumnKind::Text)
}

/// Convert a JSON cell to a typed database value
fn to_db_value(value: &Value, kind: ColumnKind) -> DbValue {
    match (value, kind) {
        (Value::Null, ColumnKind::Integer) => DbValue::BigInt(None),
        (Value::Null, ColumnKind::Float) => DbValue::Double(None),
        (Value::Null, ColumnKind::Bool) => DbValue::Bool(None),
        (Value::Null, ColumnKind::Text) => DbValue::String(None),
        (Value::Bool(b), ColumnKind::Bool) => DbValue::Bool(Some(*b)),
        (Value::Number(n), ColumnKind::Integer) => DbValue::BigInt(n.as_i64()),
        (Value::Number(n), ColumnKind::Float) => DbValue::Double(n.as_f64()),
        (Value::String(s), ColumnKind::Text) => DbValue::String(Some(Box::new(s.clone()))),
        // Mixed-type column widened to text
        (other, _) => DbValue::String(Some(Box::new(crate::core::table::cell_to_string(other)))),
    }
}
