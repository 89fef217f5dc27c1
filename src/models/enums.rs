//! Alma controlled vocabularies used in license headers
//!
//! All values serialize in `SCREAMING_SNAKE_CASE`, which is the form the Alma
//! license migration schema expects on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LicenseStatus {
    #[default]
    Active,
    Deleted,
    Expired,
    Retired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewStatus {
    #[default]
    Accepted,
    #[serde(rename = "INREVIEW")]
    InReview,
    Pending,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LicenseType {
    #[default]
    License,
    Addendum,
}

impl LicenseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseStatus::Active => "ACTIVE",
            LicenseStatus::Deleted => "DELETED",
            LicenseStatus::Expired => "EXPIRED",
            LicenseStatus::Retired => "RETIRED",
        }
    }
}

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Accepted => "ACCEPTED",
            ReviewStatus::InReview => "INREVIEW",
            ReviewStatus::Pending => "PENDING",
            ReviewStatus::Rejected => "REJECTED",
        }
    }
}

impl LicenseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseType::License => "LICENSE",
            LicenseType::Addendum => "ADDENDUM",
        }
    }
}

impl fmt::Display for LicenseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for LicenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
