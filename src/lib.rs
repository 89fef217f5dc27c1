//! ROAM to Alma license migration SDK
//!
//! Converts the license and license-term exports of the ROAM license database
//! into Alma license migration XML:
//! - Row import and text cleanup (CSV, JSON)
//! - Date normalization and term/note composition
//! - License/term merging with match diagnostics
//! - XML export and structural validation
//! - TOML configuration of the term mapping tables

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod convert;
pub mod export;
pub mod import;
pub mod merge;
pub mod models;
pub mod pipeline;
pub mod validation;

// Re-export commonly used types
pub use config::{
    ActiveStatusPolicy, ConfigError, MappingConfig, MigrationConfig, Settings, StatusPolicy,
    TermMapping, TermValueMapping,
};
pub use convert::{
    AllowedFlag, ConversionError, LicenseCodeCounter, RecordConverter, TermComposer,
    compose_notes, normalize_date, translate,
};
pub use export::{AlmaXmlExporter, ExportError, ExportResult, ExportSummary};
pub use import::{ImportError, read_rows};
pub use merge::{MergeReport, merge_license_terms};
pub use pipeline::{MigrationError, MigrationOutput, MigrationPipeline};
pub use validation::{XmlValidationError, validate_license_xml};

// Re-export models
pub use models::enums::*;
pub use models::{
    CellValue, LicenseDetails, LicenseRecord, NoteEntry, OwneredEntity, RawRow, TermEntry,
};
