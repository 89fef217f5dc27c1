//! Models module for the SDK
//!
//! Defines the raw spreadsheet row shape and the intermediate Alma license
//! structures passed between conversion, merging and export.

pub mod enums;
pub mod license;
pub mod row;

pub use enums::*;
pub use license::{LicenseDetails, LicenseRecord, MatchKey, NoteEntry, OwneredEntity, TermEntry};
pub use row::{CellValue, RawRow};
