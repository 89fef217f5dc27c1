//! Term entry composition
//!
//! One ROAM term row yields up to two Alma terms: a coded main term carrying the
//! translated "Allowed" value, and a free-text notes term built from the
//! qualifier and description.

use super::ConversionError;
use super::term_value::{AllowedFlag, translate};
use crate::config::MappingConfig;
use crate::models::TermEntry;

/// Catch-all notes code shared by several ROAM terms; its text is prefixed with
/// the ROAM term name so the origin stays readable.
pub const OTHER_USER_RESTRICTIONS_CODE: &str = "OTHERUSERSTRN";

/// Builds Alma term entries from ROAM term fields.
#[derive(Debug, Clone, Copy)]
pub struct TermComposer<'a> {
    mappings: &'a MappingConfig,
}

impl<'a> TermComposer<'a> {
    pub fn new(mappings: &'a MappingConfig) -> Self {
        Self { mappings }
    }

    /// Compose the term entries for one ROAM term.
    ///
    /// The main term is emitted whenever a main code is configured. The notes
    /// term needs a notes code and a non-empty qualifier or description.
    /// `allowed` is only read when a main code is configured.
    pub fn compose(
        &self,
        term_name: &str,
        qualifier: &str,
        allowed: &str,
        description: &str,
    ) -> Result<Vec<TermEntry>, ConversionError> {
        let mapping = self
            .mappings
            .term_mapping(term_name)
            .ok_or_else(|| ConversionError::UnmappedTermName(term_name.to_string()))?;

        let mut terms = Vec::with_capacity(2);

        if !mapping.main_code.is_empty() {
            let flag: AllowedFlag = allowed.parse()?;
            let value = translate(self.mappings, &mapping.main_code, flag)?;
            terms.push(TermEntry::new(mapping.main_code.as_str(), value));
        }

        if !mapping.notes_code.is_empty() && (!qualifier.is_empty() || !description.is_empty()) {
            let text = notes_text(&mapping.notes_code, term_name, qualifier, description);
            terms.push(TermEntry::new(mapping.notes_code.as_str(), text));
        }

        Ok(terms)
    }
}

fn notes_text(notes_code: &str, term_name: &str, qualifier: &str, description: &str) -> String {
    let mut text = String::new();
    if notes_code == OTHER_USER_RESTRICTIONS_CODE {
        text.push_str(term_name);
        text.push_str(": ");
    }
    text.push_str(qualifier);
    if !qualifier.is_empty() && !description.is_empty() {
        text.push_str("; ");
    }
    text.push_str(description);
    text
}
