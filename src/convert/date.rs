//! Date normalization
//!
//! Alma expects dates as `YYYYMMDD`. ROAM exports carry native spreadsheet dates
//! or `MM/DD/YYYY` / `YYYY-MM-DD` strings; all of them normalize to the same
//! eight digits. Empty cells stay empty because dates are optional.

use chrono::NaiveDate;

use super::ConversionError;
use crate::models::{CellValue, RawRow};

/// Output format of every normalized date
pub const ALMA_DATE_FORMAT: &str = "%Y%m%d";

/// Accepted string layouts, tried in order
const INPUT_FORMATS: [&str; 2] = ["%m/%d/%Y", "%Y-%m-%d"];

/// Normalize one cell of date column `field` to `YYYYMMDD`.
///
/// Already-normalized values are returned unchanged so the operation is
/// idempotent.
pub fn normalize_date(field: &str, value: &CellValue) -> Result<String, ConversionError> {
    match value {
        CellValue::Text(s) if s.is_empty() => Ok(String::new()),
        CellValue::Date(d) => Ok(d.format(ALMA_DATE_FORMAT).to_string()),
        CellValue::DateTime(dt) => Ok(dt.format(ALMA_DATE_FORMAT).to_string()),
        CellValue::Text(s) => parse_date_text(s.trim())
            .map(|d| d.format(ALMA_DATE_FORMAT).to_string())
            .ok_or_else(|| date_error(field, value)),
        CellValue::Bool(_) | CellValue::Number(_) => Err(date_error(field, value)),
    }
}

/// Normalize the named date columns of a row in place.
///
/// Columns the row does not have are skipped; required-column checks belong to
/// the record converter.
pub fn normalize_dates(row: &mut RawRow, fields: &[&str]) -> Result<(), ConversionError> {
    for field in fields {
        if let Some(cell) = row.get_mut(field) {
            let normalized = normalize_date(field, cell)?;
            *cell = CellValue::Text(normalized);
        }
    }
    Ok(())
}

fn parse_date_text(s: &str) -> Option<NaiveDate> {
    INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
        .or_else(|| parse_compact(s))
}

/// `YYYYMMDD`, the normalized form itself
fn parse_compact(s: &str) -> Option<NaiveDate> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = s[0..4].parse().ok()?;
    let month: u32 = s[4..6].parse().ok()?;
    let day: u32 = s[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn date_error(field: &str, value: &CellValue) -> ConversionError {
    ConversionError::DateFormat {
        field: field.to_string(),
        value: value.as_text(),
    }
}
