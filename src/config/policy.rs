//! Status derivation for license-term rows
//!
//! ROAM only records whether a license is "Active"; Alma wants both a license
//! status and a review status. A [`StatusPolicy`] decides both.

use serde::{Deserialize, Serialize};

use crate::models::{LicenseStatus, ReviewStatus};

/// Derives Alma statuses from the ROAM "Active" flag.
pub trait StatusPolicy {
    fn license_status(&self, active: bool) -> LicenseStatus;
    fn review_status(&self, active: bool) -> ReviewStatus;
}

/// A pair of plain functions also works as a policy.
impl<L, R> StatusPolicy for (L, R)
where
    L: Fn(bool) -> LicenseStatus,
    R: Fn(bool) -> ReviewStatus,
{
    fn license_status(&self, active: bool) -> LicenseStatus {
        (self.0)(active)
    }

    fn review_status(&self, active: bool) -> ReviewStatus {
        (self.1)(active)
    }
}

/// Status pair applied for one value of the "Active" flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPair {
    pub license_status: LicenseStatus,
    pub review_status: ReviewStatus,
}

/// Table-driven policy, configurable from the `[status_policy]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveStatusPolicy {
    #[serde(default = "default_active")]
    pub active: StatusPair,
    #[serde(default = "default_inactive")]
    pub inactive: StatusPair,
}

fn default_active() -> StatusPair {
    StatusPair {
        license_status: LicenseStatus::Active,
        review_status: ReviewStatus::Accepted,
    }
}

fn default_inactive() -> StatusPair {
    StatusPair {
        license_status: LicenseStatus::Retired,
        review_status: ReviewStatus::Pending,
    }
}

impl Default for ActiveStatusPolicy {
    fn default() -> Self {
        Self {
            active: default_active(),
            inactive: default_inactive(),
        }
    }
}

impl ActiveStatusPolicy {
    fn pair(&self, active: bool) -> &StatusPair {
        if active { &self.active } else { &self.inactive }
    }
}

impl StatusPolicy for ActiveStatusPolicy {
    fn license_status(&self, active: bool) -> LicenseStatus {
        self.pair(active).license_status
    }

    fn review_status(&self, active: bool) -> ReviewStatus {
        self.pair(active).review_status
    }
}
