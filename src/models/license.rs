//! Intermediate Alma license representation
//!
//! Both license rows and license-term rows convert into a [`LicenseRecord`]; the
//! merger then folds term records into their parent license.

use serde::{Deserialize, Serialize};

use super::enums::{LicenseStatus, LicenseType, ReviewStatus};

/// Creator stamp attached to license headers and notes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OwneredEntity {
    pub created_by: String,
}

/// License header fields.
///
/// `start_date` and `end_date` hold either an empty string or exactly eight
/// digits (`YYYYMMDD`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LicenseDetails {
    pub license_name: String,
    /// `PREFIX-<n>` for license rows, empty for term rows
    pub license_code: String,
    pub license_status: LicenseStatus,
    pub review_status: ReviewStatus,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(rename = "URI")]
    pub uri: String,
    #[serde(rename = "type")]
    pub license_type: LicenseType,
    pub ownered_entity: OwneredEntity,
}

/// One coded license term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermEntry {
    pub term_code: String,
    pub term_value: String,
}

impl TermEntry {
    pub fn new(term_code: impl Into<String>, term_value: impl Into<String>) -> Self {
        Self {
            term_code: term_code.into(),
            term_value: term_value.into(),
        }
    }
}

/// One free-text license note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteEntry {
    pub content: String,
}

impl NoteEntry {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Join key between a license and its license-term rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchKey<'a> {
    pub license_name: &'a str,
    pub start_date: &'a str,
}

/// A converted license or license-term row.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LicenseRecord {
    pub license_details: LicenseDetails,
    pub term_list: Vec<TermEntry>,
    pub note_list: Vec<NoteEntry>,
}

impl LicenseRecord {
    pub fn key(&self) -> MatchKey<'_> {
        MatchKey {
            license_name: &self.license_details.license_name,
            start_date: &self.license_details.start_date,
        }
    }

    pub fn name(&self) -> &str {
        &self.license_details.license_name
    }
}
