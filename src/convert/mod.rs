//! ROAM → Alma record conversion
//!
//! Turns raw ROAM rows into intermediate [`LicenseRecord`](crate::models::LicenseRecord)
//! values:
//! - `date`: date normalization to `YYYYMMDD`
//! - `term_value`: "Allowed" indicator translation
//! - `terms`: term entry composition
//! - `notes`: note entry composition
//! - `record`: license and license-term row conversion

pub mod date;
pub mod notes;
pub mod record;
pub mod term_value;
pub mod terms;

use thiserror::Error;

/// Error during row conversion.
///
/// All variants are fatal for the row being converted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("Invalid date in '{field}': '{value}' (expected MM/DD/YYYY or YYYY-MM-DD)")]
    DateFormat { field: String, value: String },
    #[error("Unknown Allowed value '{0}' (expected yes, no or n/a)")]
    UnknownAllowedValue(String),
    #[error("No term value mapping for term code '{0}'")]
    UnmappedTermCode(String),
    #[error("No term mapping for ROAM term '{0}'")]
    UnmappedTermName(String),
    #[error("Missing column '{column}' in row {row}")]
    MissingField { column: String, row: usize },
}

pub use date::{ALMA_DATE_FORMAT, normalize_date, normalize_dates};
pub use notes::compose_notes;
pub use record::{LicenseCodeCounter, RecordConverter, columns};
pub use term_value::{AllowedFlag, translate};
pub use terms::{OTHER_USER_RESTRICTIONS_CODE, TermComposer};
