//! Log file handling for the CLI subscriber

use crate::cli::error::CliError;
use std::fs::{File, OpenOptions};
use std::path::Path;

/// Open the log file for one run, creating its parent directory.
///
/// An existing file is truncated so each run starts with a fresh log.
pub fn open_log_file(path: &Path) -> Result<File, CliError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| CliError::FileWriteError(path.to_path_buf(), e.to_string()))?;
    }
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| CliError::FileWriteError(path.to_path_buf(), e.to_string()))
}
