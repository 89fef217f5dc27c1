//! Import functionality
//!
//! Reads ROAM exports into [`RawRow`](crate::models::RawRow) collections:
//! - XLSX (first worksheet, typed cells, dates kept as dates)
//! - CSV (header row, every cell read as text)
//! - JSON (array of row objects)
//!
//! `sanitize` cleans HTML and compatibility characters out of the text cells.

pub mod csv_reader;
pub mod json_reader;
pub mod sanitize;
pub mod xlsx_reader;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::models::RawRow;

/// Error during import
#[derive(Debug, thiserror::Error, serde::Serialize, serde::Deserialize)]
pub enum ImportError {
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),
}

pub use csv_reader::read_csv_rows;
pub use json_reader::read_json_rows;
pub use sanitize::{clean_rows, clean_text};
pub use xlsx_reader::read_xlsx_rows;

/// Read all rows of a ROAM export, picking the reader from the file extension.
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>, ImportError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let open = || {
        File::open(path)
            .map(BufReader::new)
            .map_err(|e| ImportError::IoError(format!("{}: {}", path.display(), e)))
    };

    let rows = match extension.as_str() {
        "xlsx" => read_xlsx_rows(open()?),
        "csv" => read_csv_rows(open()?),
        "json" => read_json_rows(open()?),
        _ => {
            return Err(ImportError::UnsupportedFormat(format!(
                "{} (expected .xlsx, .csv or .json)",
                path.display()
            )));
        }
    }
    .map_err(|e| match e {
        ImportError::ParseError(msg) => {
            ImportError::ParseError(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })?;

    tracing::info!("Read {} rows from {}", rows.len(), path.display());
    if rows.is_empty() {
        tracing::warn!("No rows were parsed from {}", path.display());
    }
    Ok(rows)
}
