//! ROAM "Allowed" indicator translation

use std::fmt;
use std::str::FromStr;

use super::ConversionError;
use crate::config::MappingConfig;

/// Normalized form of the ROAM "Allowed" column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AllowedFlag {
    Yes,
    No,
    NotApplicable,
}

impl AllowedFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            AllowedFlag::Yes => "yes",
            AllowedFlag::No => "no",
            AllowedFlag::NotApplicable => "n/a",
        }
    }
}

impl FromStr for AllowedFlag {
    type Err = ConversionError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" => Ok(AllowedFlag::Yes),
            "no" => Ok(AllowedFlag::No),
            "n/a" => Ok(AllowedFlag::NotApplicable),
            _ => Err(ConversionError::UnknownAllowedValue(s.to_string())),
        }
    }
}

impl fmt::Display for AllowedFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Look up the Alma value of `term_code` for an "Allowed" indicator.
pub fn translate<'a>(
    mappings: &'a MappingConfig,
    term_code: &str,
    allowed: AllowedFlag,
) -> Result<&'a str, ConversionError> {
    let values = mappings
        .term_values(term_code)
        .ok_or_else(|| ConversionError::UnmappedTermCode(term_code.to_string()))?;

    Ok(match allowed {
        AllowedFlag::Yes => &values.yes,
        AllowedFlag::No => &values.no,
        AllowedFlag::NotApplicable => &values.not_applicable,
    })
}
