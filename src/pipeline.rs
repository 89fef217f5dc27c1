//! End-to-end migration pipeline
//!
//! Ties the stages together for one batch: optional cleaning of the raw rows,
//! conversion of licenses and license terms, merging, and XML export.

use std::path::Path;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::config::MigrationConfig;
use crate::convert::{ConversionError, LicenseCodeCounter, RecordConverter};
use crate::export::{AlmaXmlExporter, ExportError, ExportSummary};
use crate::import::{ImportError, clean_rows, read_rows};
use crate::merge::{MergeReport, merge_license_terms};
use crate::models::{LicenseRecord, RawRow};

/// Any failure that aborts a migration run
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Merged licenses of one run and the merge diagnostics
#[derive(Debug, Clone)]
pub struct MigrationOutput {
    /// One record per license row, in license-row order
    pub licenses: Vec<LicenseRecord>,
    pub report: MergeReport,
}

/// Runs migrations with one configuration.
#[derive(Debug, Clone, Default)]
pub struct MigrationPipeline {
    config: MigrationConfig,
}

impl MigrationPipeline {
    pub fn new(config: MigrationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MigrationConfig {
        &self.config
    }

    /// Convert and merge one batch of rows.
    ///
    /// License codes restart at `<prefix>-0` on every call. The first row that
    /// fails to convert aborts the run.
    pub fn run(
        &self,
        mut license_rows: Vec<RawRow>,
        mut term_rows: Vec<RawRow>,
    ) -> Result<MigrationOutput, MigrationError> {
        let settings = &self.config.settings;

        if license_rows.is_empty() {
            warn!("No license rows to convert");
        }
        if term_rows.is_empty() {
            warn!("No license term rows to convert");
        }

        if settings.clean {
            info!("Cleaning input text");
            clean_rows(&mut license_rows, settings.remove_newline);
            clean_rows(&mut term_rows, settings.remove_newline);
        }

        let mut converter = RecordConverter::new(
            &self.config.mappings,
            &self.config.status_policy,
            LicenseCodeCounter::new(settings.code_prefix.as_str()),
        )
        .with_created_by(settings.created_by.as_str());

        info!("Converting {} Roam Licenses", license_rows.len());
        let mut licenses = converter.convert_licenses(&license_rows).map_err(|e| {
            error!("License conversion failed: {}", e);
            e
        })?;

        info!("Converting {} Roam License Terms", term_rows.len());
        let license_terms = converter.convert_license_terms(&term_rows).map_err(|e| {
            error!("License term conversion failed: {}", e);
            e
        })?;

        let report = merge_license_terms(&mut licenses, &license_terms);

        Ok(MigrationOutput { licenses, report })
    }

    /// Read both exports from disk and run them.
    pub fn run_files(
        &self,
        license_path: &Path,
        terms_path: &Path,
    ) -> Result<MigrationOutput, MigrationError> {
        let license_rows = read_rows(license_path)?;
        let term_rows = read_rows(terms_path)?;
        self.run(license_rows, term_rows)
    }

    /// Write the merged licenses as XML files under `output_folder`.
    pub fn export(
        &self,
        output: &MigrationOutput,
        output_folder: &Path,
    ) -> Result<ExportSummary, MigrationError> {
        let settings = &self.config.settings;
        let exporter = AlmaXmlExporter::new(
            settings.file_prefix.as_str(),
            settings.file_suffix.as_str(),
        );
        Ok(exporter.export_all(&output.licenses, output_folder)?)
    }
}
