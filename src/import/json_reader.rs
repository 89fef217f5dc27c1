//! JSON row reader
//!
//! Accepts the records layout produced by spreadsheet tooling: an array of
//! objects keyed by column header.

use serde_json::Value;
use std::io::Read;

use super::ImportError;
use crate::models::{CellValue, RawRow};

pub fn read_json_rows<R: Read>(reader: R) -> Result<Vec<RawRow>, ImportError> {
    let records: Vec<serde_json::Map<String, Value>> = serde_json::from_reader(reader)
        .map_err(|e| ImportError::ParseError(format!("expected an array of objects: {}", e)))?;

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            record
                .into_iter()
                .map(|(column, value)| {
                    let cell = json_cell(value).map_err(|kind| {
                        ImportError::ParseError(format!(
                            "row {} column '{}': unsupported {} value",
                            index, column, kind
                        ))
                    })?;
                    Ok((column, cell))
                })
                .collect::<Result<RawRow, ImportError>>()
        })
        .collect()
}

fn json_cell(value: Value) -> Result<CellValue, &'static str> {
    match value {
        Value::Null => Ok(CellValue::empty()),
        Value::Bool(b) => Ok(CellValue::Bool(b)),
        Value::Number(n) => n.as_f64().map(CellValue::Number).ok_or("number"),
        Value::String(s) => Ok(CellValue::Text(s)),
        Value::Array(_) => Err("array"),
        Value::Object(_) => Err("object"),
    }
}
