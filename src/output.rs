//! Output formatting for CLI display.
//!
//! EMT responses are loose JSON documents, so rendering is value-driven:
//! when a response is (or wraps) an array of flat objects it becomes a
//! table, otherwise it is pretty-printed as JSON.

use serde_json::Value;
use tabled::builder::Builder;

use crate::error::Result;

/// Render a response for terminal display.
///
/// With `json` set the document is always pretty-printed; otherwise a
/// table is produced when the document allows it.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(value: &Value, json: bool) -> Result<String> {
    if !json {
        if let Some(table) = value_table(value) {
            return Ok(table);
        }
    }
    Ok(serde_json::to_string_pretty(value)?)
}

/// Render the rows of a document as a table, when it has any.
///
/// Accepts either a bare array of objects or an object wrapping one (the
/// EMT services answer with wrappers like `resultValues` or `data`).
/// Returns `None` for documents with no tabular core.
#[must_use]
pub fn value_table(value: &Value) -> Option<String> {
    let rows = find_rows(value)?;
    let columns = column_union(rows)?;

    let mut builder = Builder::default();
    builder.push_record(columns.iter().map(String::as_str));
    for row in rows {
        let object = row.as_object()?;
        builder.push_record(
            columns
                .iter()
                .map(|column| object.get(column).map_or(String::new(), cell)),
        );
    }

    Some(builder.build().to_string())
}

/// Locate the array of row objects inside a response document.
fn find_rows(value: &Value) -> Option<&Vec<Value>> {
    match value {
        Value::Array(rows) => Some(rows),
        Value::Object(fields) => fields.values().find_map(|field| match field {
            Value::Array(rows) if !rows.is_empty() => Some(rows),
            _ => None,
        }),
        _ => None,
    }
}

/// Sorted union of the keys across all rows; `None` unless every row is
/// an object.
fn column_union(rows: &[Value]) -> Option<Vec<String>> {
    if rows.is_empty() {
        return None;
    }
    let mut columns = std::collections::BTreeSet::new();
    for row in rows {
        for key in row.as_object()?.keys() {
            columns.insert(key.clone());
        }
    }
    Some(columns.into_iter().collect())
}

/// A single cell: scalars bare, nested structures as compact JSON.
fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
