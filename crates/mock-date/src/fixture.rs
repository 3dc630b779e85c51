//! Converting fixture tables whose cells may hold date phrases.
//!
//! Expected-value tables mix ordinary values ("alice", "42") with phrases
//! ("10 days ago"). Cells that parse as a phrase are replaced by their
//! evaluation; everything else is left exactly as written.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::{MockDateError, Result};
use crate::eval::evaluate;

/// A single fixture row, keyed by column name.
pub type Row = BTreeMap<String, String>;

/// Convert one cell.
///
/// Returns the evaluated phrase, or `cell` unchanged when it is not a phrase.
///
/// # Errors
///
/// A cell that is a phrase but cannot be rendered (bad custom pattern, date
/// out of range) is an error rather than a silent pass-through.
pub fn convert_value(cell: &str, reference: NaiveDate) -> Result<String> {
    match evaluate(cell, reference) {
        Ok(converted) => Ok(converted),
        Err(MockDateError::UnrecognizedExpression(reason)) => {
            tracing::trace!(cell, %reason, "left unchanged");
            Ok(cell.to_string())
        }
        Err(e) => Err(e),
    }
}

/// Convert every cell in a row, preserving column names.
pub fn convert_row(row: &Row, reference: NaiveDate) -> Result<Row> {
    row.iter()
        .map(|(column, cell)| Ok((column.clone(), convert_value(cell, reference)?)))
        .collect()
}

/// Convert every row of a table.
pub fn convert_rows(rows: &[Row], reference: NaiveDate) -> Result<Vec<Row>> {
    rows.iter().map(|row| convert_row(row, reference)).collect()
}

/// Convert every string leaf of a JSON document. Numbers, booleans, nulls
/// and object keys are untouched.
pub fn convert_json(value: &Value, reference: NaiveDate) -> Result<Value> {
    Ok(match value {
        Value::String(s) => Value::String(convert_value(s, reference)?),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| convert_json(item, reference))
                .collect::<Result<_>>()?,
        ),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| Ok((k.clone(), convert_json(v, reference)?)))
                .collect::<Result<_>>()?,
        ),
        other => other.clone(),
    })
}
