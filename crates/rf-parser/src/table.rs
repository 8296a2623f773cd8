//! Tab-separated table parsing.
//!
//! First line = column names, one record per further non-empty line.
//! Cells pair with columns positionally; a short row leaves its trailing
//! columns absent.

use anyhow::{Context, Result};
use rf_core::{Dataset, Record, RfError, Value};
use std::path::Path;
use tracing::debug;

/// Lex a single cell into a scalar value.
///
/// Empty and NA-ish cells become `Missing`; `true`/`false` (either case)
/// become `Bool`; anything parseable as f64 becomes `Number`; the rest is
/// kept as `Text`.
pub fn lex_cell(cell: &str) -> Value {
    let cell = cell.trim();
    match cell {
        "" | "NA" | "NaN" | "nan" => Value::Missing,
        "true" | "True" => Value::Bool(true),
        "false" | "False" => Value::Bool(false),
        _ => match cell.parse::<f64>() {
            Ok(n) => Value::Number(n),
            Err(_) => Value::Text(cell.to_string()),
        },
    }
}

/// Parse TSV content into a dataset labeled by `label_column`.
///
/// Fails when the header lacks the label column; individual records may
/// still be missing a label value (they fall outside both partitions).
pub fn parse_table(content: &str, label_column: &str) -> rf_core::Result<Dataset> {
    let mut lines = content.lines();
    let header: Vec<&str> = lines
        .next()
        .map(|l| l.split('\t').map(str::trim).collect())
        .unwrap_or_default();

    if !header.contains(&label_column) {
        return Err(RfError::MissingColumn {
            name: label_column.to_string(),
        });
    }

    let mut records = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let mut record = Record::new();
        for (column, cell) in header.iter().zip(line.split('\t')) {
            record.set(*column, lex_cell(cell));
        }
        records.push(record);
    }

    Ok(Dataset::new(records, label_column))
}

/// Load a TSV dataset from a file path.
pub fn load_table(path: &Path, label_column: &str) -> Result<Dataset> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading dataset {}", path.display()))?;
    let dataset = parse_table(&content, label_column)?;
    debug!(records = dataset.len(), "loaded dataset");
    Ok(dataset)
}
