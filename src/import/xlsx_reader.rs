//! XLSX row reader
//!
//! Reads the first worksheet of a ROAM spreadsheet export. Cells keep their
//! spreadsheet type: date-formatted cells become [`CellValue::Date`] (or
//! [`CellValue::DateTime`] when they carry a time of day), booleans stay booleans
//! and blanks become empty text.

use calamine::{Data, DataType, Reader, Xlsx};
use chrono::NaiveTime;
use std::io::{Read, Seek};

use super::ImportError;
use crate::models::{CellValue, RawRow};

/// Read the first worksheet of an XLSX workbook. The first row holds the headers.
///
/// Rows with no value in any cell are skipped.
pub fn read_xlsx_rows<R: Read + Seek>(reader: R) -> Result<Vec<RawRow>, ImportError> {
    let mut workbook: Xlsx<R> = Xlsx::new(reader)
        .map_err(|e| ImportError::ParseError(format!("opening workbook: {}", e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ImportError::ParseError("workbook has no worksheets".to_string()))?
        .map_err(|e| ImportError::ParseError(format!("reading first worksheet: {}", e)))?;

    let mut sheet_rows = range.rows();
    let headers: Vec<String> = match sheet_rows.next() {
        Some(header_row) => header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect(),
        None => return Ok(Vec::new()),
    };

    let rows = sheet_rows
        .filter(|cells| cells.iter().any(|cell| !cell.is_empty()))
        .map(|cells| {
            headers
                .iter()
                .zip(cells)
                .filter(|(header, _)| !header.is_empty())
                .map(|(header, cell)| (header.clone(), to_cell_value(cell)))
                .collect()
        })
        .collect();

    Ok(rows)
}

fn to_cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::empty(),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::DateTime(_) | Data::DateTimeIso(_) => match cell.as_datetime() {
            Some(dt) if dt.time() == NaiveTime::MIN => CellValue::Date(dt.date()),
            Some(dt) => CellValue::DateTime(dt),
            None => CellValue::Text(cell.to_string()),
        },
        other => {
            tracing::warn!("Reading spreadsheet cell {} as text", other);
            CellValue::Text(other.to_string())
        }
    }
}
