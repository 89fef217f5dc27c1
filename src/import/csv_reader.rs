//! CSV row reader

use csv::ReaderBuilder;
use std::io::Read;

use super::ImportError;
use crate::models::{CellValue, RawRow};

/// Read a headed CSV export. Blank cells become empty text.
///
/// A UTF-8 byte order mark and surrounding whitespace are stripped from header
/// names.
pub fn read_csv_rows<R: Read>(reader: R) -> Result<Vec<RawRow>, ImportError> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .map_err(|e| ImportError::ParseError(format!("reading CSV header: {}", e)))?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for (index, result) in rdr.records().enumerate() {
        let record =
            result.map_err(|e| ImportError::ParseError(format!("CSV row {}: {}", index, e)))?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| (header.clone(), CellValue::Text(value.to_string())))
            .collect();
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_headed_rows() {
        let data = "\u{feff}Name,Start Date,End Date\nWiley,05/12/2020,\nElsevier,2021-01-01,2022-01-01\n";
        let rows = read_csv_rows(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Name"), Some(&CellValue::from("Wiley")));
        assert_eq!(rows[0].get("End Date"), Some(&CellValue::empty()));
        assert_eq!(rows[1].get("Start Date"), Some(&CellValue::from("2021-01-01")));
    }

    #[test]
    fn test_ragged_row_is_parse_error() {
        let data = "Name,Start Date\nWiley,05/12/2020,extra\n";
        let err = read_csv_rows(data.as_bytes()).unwrap_err();
        assert!(matches!(err, ImportError::ParseError(_)));
    }
}
