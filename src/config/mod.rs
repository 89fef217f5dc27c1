//! Migration configuration
//!
//! Handles parsing of `roam-alma.toml` configuration files and environment
//! variable overrides. A configuration bundles the run settings, the status
//! policy and the term mapping tables.

pub mod mappings;
pub mod policy;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use mappings::{MappingConfig, TermMapping, TermValueMapping};
pub use policy::{ActiveStatusPolicy, StatusPair, StatusPolicy};

/// Default configuration filename
pub const CONFIG_FILENAME: &str = "roam-alma.toml";

/// Creator stamp written to `ownered_entity/created_by` by default
pub const DEFAULT_CREATED_BY: &str = "USMAI ROAM License to Alma License Converter";

/// Environment variable pointing at a configuration file
pub const ENV_CONFIG_PATH: &str = "ROAM_ALMA_CONFIG";

/// Environment variable for the XML output folder
pub const ENV_OUTPUT_FOLDER: &str = "ROAM_ALMA_OUTPUT_FOLDER";

/// Environment variable for the log level
pub const ENV_LOG_LEVEL: &str = "ROAM_ALMA_LOG_LEVEL";

/// Errors raised while loading or checking configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Failed to parse config: {0}")]
    ParseError(String),
    #[error("Failed to serialize config: {0}")]
    SerializationError(String),
    #[error("Term '{term_name}' maps to main code '{code}' which has no term value mapping")]
    UnmappedMainCode { term_name: String, code: String },
}

/// Run settings section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Strip HTML and compatibility characters from every text cell
    #[serde(default = "default_true")]
    pub clean: bool,

    /// Replace line breaks with spaces (only applies when `clean` is set)
    #[serde(default = "default_true")]
    pub remove_newline: bool,

    #[serde(default = "default_license_input")]
    pub license_input: String,

    #[serde(default = "default_license_terms_input")]
    pub license_terms_input: String,

    #[serde(default = "default_output_folder")]
    pub output_folder: String,

    /// Prefix of generated license codes (`<prefix>-<n>`)
    #[serde(default = "default_code_prefix")]
    pub code_prefix: String,

    /// Value of `ownered_entity/created_by` on every generated record
    #[serde(default = "default_created_by")]
    pub created_by: String,

    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    #[serde(default)]
    pub file_suffix: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_license_input() -> String {
    "input/licenses.xlsx".to_string()
}

fn default_license_terms_input() -> String {
    "input/license_terms.xlsx".to_string()
}

fn default_output_folder() -> String {
    "output".to_string()
}

fn default_code_prefix() -> String {
    "ROAM".to_string()
}

fn default_created_by() -> String {
    DEFAULT_CREATED_BY.to_string()
}

fn default_file_prefix() -> String {
    "license-".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            clean: true,
            remove_newline: true,
            license_input: default_license_input(),
            license_terms_input: default_license_terms_input(),
            output_folder: default_output_folder(),
            code_prefix: default_code_prefix(),
            created_by: default_created_by(),
            file_prefix: default_file_prefix(),
            file_suffix: String::new(),
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

/// Main configuration structure
///
/// Represents the `roam-alma.toml` configuration file format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MigrationConfig {
    #[serde(default)]
    pub settings: Settings,

    #[serde(default)]
    pub status_policy: ActiveStatusPolicy,

    #[serde(flatten)]
    pub mappings: MappingConfig,
}

impl MigrationConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `ROAM_ALMA_CONFIG` is consulted,
    /// then `roam-alma.toml` in the working directory, then built-in defaults.
    /// Mapping tables are validated after environment overrides are applied.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match Self::locate(path) {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path));
                }
                Self::from_file(&path)?
            }
            None => {
                tracing::debug!("No {} found, using built-in defaults", CONFIG_FILENAME);
                Self::default()
            }
        };

        config.apply_env_overrides();
        config.mappings.validate()?;
        Ok(config)
    }

    /// The file [`load`](Self::load) reads, or `None` for built-in defaults.
    ///
    /// An explicit path or `ROAM_ALMA_CONFIG` is returned whether or not it
    /// exists; the working-directory file only when present.
    pub fn locate(path: Option<&Path>) -> Option<PathBuf> {
        path.map(Path::to_path_buf)
            .or_else(|| std::env::var(ENV_CONFIG_PATH).ok().map(PathBuf::from))
            .or_else(|| {
                let local = Path::new(CONFIG_FILENAME);
                local.exists().then(|| local.to_path_buf())
            })
    }

    /// Read and parse a configuration file without env overrides.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        tracing::debug!("Read configuration from {}", path.display());
        Self::parse(&content)
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Convert configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::SerializationError(e.to_string()))
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        if let Ok(folder) = std::env::var(ENV_OUTPUT_FOLDER)
            && !folder.is_empty()
        {
            self.settings.output_folder = folder;
        }

        if let Ok(level) = std::env::var(ENV_LOG_LEVEL)
            && !level.is_empty()
        {
            self.settings.log_level = level;
        }
    }
}

/// Generate a sample configuration file content
pub fn sample_config() -> Result<String, ConfigError> {
    let body = MigrationConfig::default().to_toml()?;
    Ok(format!(
        "# ROAM to Alma license migration configuration\n\
         # term_mappings: ROAM term name = [main Alma code, notes Alma code]; \"\" disables a side\n\
         # term_value_mappings: per main code, the Alma value for ROAM Allowed = yes / no / n/a\n\n{}",
        body
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LicenseStatus, ReviewStatus};

    #[test]
    fn test_parse_partial_config_fills_defaults() {
        let config = MigrationConfig::parse(
            r#"
[settings]
code_prefix = "LIC"

[term_mappings]
"Copying" = ["DIGCOPY", "DIGCOPYN"]

[term_value_mappings.DIGCOPY]
yes = "PERMITTED"
no = "PROHIBITED"
"n/a" = "SILENT"
"#,
        )
        .unwrap();

        assert_eq!(config.settings.code_prefix, "LIC");
        assert!(config.settings.clean);
        assert_eq!(config.settings.output_folder, "output");
        assert_eq!(config.status_policy, ActiveStatusPolicy::default());
        let mapping = config.mappings.term_mapping("Copying").unwrap();
        assert_eq!(mapping.main_code, "DIGCOPY");
        assert_eq!(mapping.notes_code, "DIGCOPYN");
        assert_eq!(
            config.mappings.term_values("DIGCOPY").unwrap().not_applicable,
            "SILENT"
        );
    }

    #[test]
    fn test_status_policy_section() {
        let config = MigrationConfig::parse(
            r#"
[status_policy.inactive]
license_status = "EXPIRED"
review_status = "INREVIEW"
"#,
        )
        .unwrap();
        let policy = config.status_policy;
        assert_eq!(policy.inactive.license_status, LicenseStatus::Expired);
        assert_eq!(policy.inactive.review_status, ReviewStatus::InReview);
        assert_eq!(policy.active.license_status, LicenseStatus::Active);
    }

    #[test]
    fn test_sample_config_round_trips() {
        let sample = sample_config().unwrap();
        let parsed = MigrationConfig::parse(&sample).unwrap();
        assert_eq!(parsed, MigrationConfig::default());
    }

    #[test]
    fn test_malformed_mapping_is_parse_error() {
        let err = MigrationConfig::parse(
            r#"
[term_mappings]
"Copying" = "DIGCOPY"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
