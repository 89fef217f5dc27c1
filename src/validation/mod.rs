//! Validation functionality
//!
//! Provides structural validation of rendered Alma license XML documents.

pub mod xml;

pub use xml::{XmlValidationError, validate_license_xml};
