//! JSON ingestion implementation.
//!
//! Supported inputs:
//! - A JSON array of objects: `[{"Start Time":"2017-01-01 09:07:57", ...}, ...]`
//! - Newline-delimited JSON (NDJSON): one trip object per line
//!
//! Keys are matched against schema field names verbatim. An optional field counts as present
//! in the dataset when at least one record carries its key.

use std::fs;
use std::path::Path;

use crate::error::{IngestionError, IngestionResult};
use crate::types::{DataSet, DataType, Field, Schema, Value};

use super::timestamp::parse_timestamp;

type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Ingest JSON into an in-memory `DataSet`.
pub fn ingest_json_from_path(path: impl AsRef<Path>, schema: &Schema) -> IngestionResult<DataSet> {
    let text = fs::read_to_string(path)?;
    ingest_json_from_str(&text, schema)
}

/// Ingest JSON from an in-memory string into a [`DataSet`].
pub fn ingest_json_from_str(input: &str, schema: &Schema) -> IngestionResult<DataSet> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(IngestionError::SchemaMismatch {
            message: "json input is empty".to_string(),
        });
    }

    // First try parsing as a single JSON value (array or object).
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(trimmed) {
        match v {
            serde_json::Value::Array(items) => ingest_json_values(&items, schema),
            serde_json::Value::Object(_) => ingest_json_values(std::slice::from_ref(&v), schema),
            _ => Err(IngestionError::SchemaMismatch {
                message: "json must be an object, an array of objects, or NDJSON".to_string(),
            }),
        }
    } else {
        // Fall back to NDJSON.
        let mut values = Vec::new();
        for (i, line) in trimmed.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let v = serde_json::from_str::<serde_json::Value>(line).map_err(|e| {
                IngestionError::SchemaMismatch {
                    message: format!("invalid ndjson at line {}: {}", i + 1, e),
                }
            })?;
            values.push(v);
        }
        ingest_json_values(&values, schema)
    }
}

fn ingest_json_values(values: &[serde_json::Value], schema: &Schema) -> IngestionResult<DataSet> {
    let mut objects: Vec<&JsonObject> = Vec::with_capacity(values.len());
    for (idx0, v) in values.iter().enumerate() {
        let obj = v.as_object().ok_or_else(|| IngestionError::SchemaMismatch {
            message: format!("row {} is not a json object", idx0 + 1),
        })?;
        objects.push(obj);
    }

    let present: Vec<Field> = schema
        .fields
        .iter()
        .filter(|f| f.required || objects.iter().any(|o| o.contains_key(&f.name)))
        .cloned()
        .collect();

    let mut rows: Vec<Vec<Value>> = Vec::with_capacity(objects.len());
    for (idx0, obj) in objects.iter().enumerate() {
        let row_num = idx0 + 1;
        let mut row: Vec<Value> = Vec::with_capacity(present.len());
        for field in &present {
            let value = match obj.get(&field.name) {
                Some(jv) => convert_json_value(row_num, &field.name, &field.data_type, jv)?,
                None if field.required => {
                    return Err(IngestionError::SchemaMismatch {
                        message: format!("row {row_num} missing required field '{}'", field.name),
                    });
                }
                None => Value::Null,
            };
            row.push(value);
        }
        rows.push(row);
    }

    Ok(DataSet::new(Schema::new(present), rows))
}

fn convert_json_value(
    row: usize,
    column: &str,
    data_type: &DataType,
    v: &serde_json::Value,
) -> IngestionResult<Value> {
    if v.is_null() || v.as_str().is_some_and(|s| s.trim().is_empty()) {
        return Ok(Value::Null);
    }

    let parse_error = |message: &str| IngestionError::ParseError {
        row,
        column: column.to_string(),
        raw: v.to_string(),
        message: message.to_string(),
    };

    match data_type {
        DataType::Utf8 => v
            .as_str()
            .map(|s| Value::Utf8(s.trim().to_string()))
            .ok_or_else(|| parse_error("expected string")),
        DataType::Int64 => {
            if let Some(n) = v.as_i64() {
                Ok(Value::Int64(n))
            } else if let Some(n) = v.as_u64() {
                i64::try_from(n)
                    .map(Value::Int64)
                    .map_err(|_| parse_error("u64 out of range for i64"))
            } else {
                Err(parse_error("expected integer number"))
            }
        }
        DataType::Float64 => v
            .as_f64()
            .map(Value::Float64)
            .ok_or_else(|| parse_error("expected number")),
        DataType::Timestamp => {
            let s = v.as_str().ok_or_else(|| parse_error("expected timestamp string"))?;
            parse_timestamp(s)
                .map(Value::Timestamp)
                .map_err(|message| parse_error(&message))
        }
    }
}
