//! Convert command implementation

use crate::cli::error::CliError;
use crate::config::MigrationConfig;
use crate::pipeline::MigrationPipeline;
use std::path::{Path, PathBuf};

/// Arguments for the convert command. Unset paths fall back to the settings.
#[derive(Debug, Clone, Default)]
pub struct ConvertArgs {
    pub licenses: Option<PathBuf>,
    pub license_terms: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

fn resolve(explicit: &Option<PathBuf>, configured: &str) -> PathBuf {
    explicit
        .clone()
        .unwrap_or_else(|| PathBuf::from(configured))
}

fn require_file(path: &Path) -> Result<(), CliError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(CliError::FileNotFound(path.to_path_buf()))
    }
}

/// Handle the convert command
pub fn handle_convert(args: &ConvertArgs, config: MigrationConfig) -> Result<(), CliError> {
    let settings = &config.settings;
    let licenses = resolve(&args.licenses, &settings.license_input);
    let license_terms = resolve(&args.license_terms, &settings.license_terms_input);
    let output = resolve(&args.output, &settings.output_folder);

    require_file(&licenses)?;
    require_file(&license_terms)?;

    let pipeline = MigrationPipeline::new(config);
    let result = pipeline.run_files(&licenses, &license_terms)?;
    let summary = pipeline.export(&result, &output)?;

    println!(
        "✅ Wrote {} license files to {}",
        summary.count(),
        output.display()
    );
    if !result.report.is_clean() {
        println!(
            "⚠️  {} unmatched and {} multiply matched license terms (see log)",
            result.report.unmatched.len(),
            result.report.multiply_matched.len()
        );
    }

    Ok(())
}
