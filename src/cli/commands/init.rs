//! Init command implementation

use crate::cli::error::CliError;
use crate::config::{CONFIG_FILENAME, sample_config};
use std::path::{Path, PathBuf};

/// Handle the init command
///
/// Writes the sample configuration to `path`, or to `roam-alma.toml` in the
/// working directory.
pub fn handle_init(path: Option<&Path>, force: bool) -> Result<(), CliError> {
    let target = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));

    if target.exists() && !force {
        return Err(CliError::FileExists(target));
    }

    let content = sample_config()?;
    std::fs::write(&target, content)
        .map_err(|e| CliError::FileWriteError(target.clone(), e.to_string()))?;

    println!("✅ Wrote sample configuration to {}", target.display());
    Ok(())
}
