//! Validate command implementation

use crate::cli::error::CliError;
use crate::validation::validate_license_xml;
use std::path::{Path, PathBuf};

fn validate_file(path: &Path) -> Result<(), CliError> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::FileReadError(path.to_path_buf(), e.to_string()))?;
    validate_license_xml(&content).map_err(|e| CliError::ValidationError(e.to_string()))
}

/// Handle the validate command
///
/// Every file is checked; the command fails if any of them is invalid.
pub fn handle_validate(inputs: &[PathBuf]) -> Result<(), CliError> {
    if inputs.is_empty() {
        return Err(CliError::InvalidArgument("No files to validate".to_string()));
    }

    let mut failed = 0;
    for input in inputs {
        match validate_file(input) {
            Ok(()) => println!("✅ {}", input.display()),
            Err(e) => {
                failed += 1;
                println!("❌ {}: {}", input.display(), e);
            }
        }
    }

    if failed > 0 {
        return Err(CliError::ValidationFailed {
            failed,
            total: inputs.len(),
        });
    }

    println!("Validation successful");
    Ok(())
}
