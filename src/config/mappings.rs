//! ROAM → Alma term mapping tables
//!
//! `term_mappings` maps a ROAM term name to the pair of Alma term codes it feeds:
//! the coded "main" term and the free-text "notes" term. Either code may be empty,
//! meaning that side is never emitted. `term_value_mappings` translates the ROAM
//! "Allowed" indicator into the vocabulary of each main term code.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ConfigError;

/// Alma term codes fed by one ROAM term name.
///
/// Serialized as a two-element array `[main_code, notes_code]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct TermMapping {
    pub main_code: String,
    pub notes_code: String,
}

impl TermMapping {
    pub fn new(main_code: impl Into<String>, notes_code: impl Into<String>) -> Self {
        Self {
            main_code: main_code.into(),
            notes_code: notes_code.into(),
        }
    }
}

impl From<(String, String)> for TermMapping {
    fn from((main_code, notes_code): (String, String)) -> Self {
        Self {
            main_code,
            notes_code,
        }
    }
}

impl From<TermMapping> for (String, String) {
    fn from(mapping: TermMapping) -> Self {
        (mapping.main_code, mapping.notes_code)
    }
}

/// Target values for one main term code, keyed by the ROAM "Allowed" indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermValueMapping {
    pub yes: String,
    pub no: String,
    #[serde(rename = "n/a")]
    pub not_applicable: String,
}

impl TermValueMapping {
    pub fn new(
        yes: impl Into<String>,
        no: impl Into<String>,
        not_applicable: impl Into<String>,
    ) -> Self {
        Self {
            yes: yes.into(),
            no: no.into(),
            not_applicable: not_applicable.into(),
        }
    }
}

/// The two lookup tables driving term conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingConfig {
    #[serde(default)]
    pub term_mappings: BTreeMap<String, TermMapping>,
    #[serde(default)]
    pub term_value_mappings: BTreeMap<String, TermValueMapping>,
}

impl MappingConfig {
    /// Empty tables. Every lookup against them fails.
    pub fn empty() -> Self {
        Self {
            term_mappings: BTreeMap::new(),
            term_value_mappings: BTreeMap::new(),
        }
    }

    pub fn term_mapping(&self, term_name: &str) -> Option<&TermMapping> {
        self.term_mappings.get(term_name)
    }

    pub fn term_values(&self, term_code: &str) -> Option<&TermValueMapping> {
        self.term_value_mappings.get(term_code)
    }

    /// Check that every configured main code has a value table.
    ///
    /// Notes codes carry free text and need no value table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (term_name, mapping) in &self.term_mappings {
            if !mapping.main_code.is_empty()
                && !self.term_value_mappings.contains_key(&mapping.main_code)
            {
                return Err(ConfigError::UnmappedMainCode {
                    term_name: term_name.clone(),
                    code: mapping.main_code.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Default for MappingConfig {
    /// Production tables for the USMAI ROAM export.
    fn default() -> Self {
        let term_mappings = [
            ("ADA Accessibility", "ACCESSIB", "ACCESSIB_N"),
            ("ADA Compliancy", "ACCESSIB", "ACCESSIB_N"),
            ("Archiving", "ARCHIVING", "ARCHIVEN"),
            ("Authentication", "AUTHNTIC", "AUTHNTIC_N"),
            ("Cancellation Policy", "CANC-POL", "CANC-POL_N"),
            (
                "Post Cancellation Rights/Perpetual Access",
                "TERM-RIGHT",
                "TERMRIGHTN",
            ),
            ("Copying", "COPY", "COPY_N"),
            ("Course Packs", "COURSEPACKELEC", "COURSEPACKN"),
            ("Course Reserves", "COURSERES", "COURSERESNOTE"),
            ("Downloading/Saving", "DL-SAVE", "DL-SAVE_N"),
            ("Interlibrary Loan (ILL)", "ILLELEC", "ILLN"),
            ("Inter-library loan", "ILLELEC", "ILLN"),
            ("International ILL", "INTL-ILL", "INTL-ILL_N"),
            (
                "Perpetual Access/Post Cancellation Rights",
                "PERPET-RT",
                "PERPETUALN",
            ),
            ("Printing", "PRINTCOPY", "PRINTCOPYN"),
            ("Public Performance", "PUB-PRFM", "PUB-PRFM_N"),
            ("Sharing/Linking", "ELECLINK", "ELECLINKNOTE"),
            ("Simultaneous Users", "CNCUR-USER", "CONCURUSERN"),
            ("Usage Statistics", "USE-STAT", "USE-STAT_N"),
            ("IP access", "IPACCESS", "IPACCESS_N"),
            ("Walk-in user", "WALK-IN", "WALKIN"),
        ]
        .into_iter()
        .map(|(name, main, notes)| (name.to_string(), TermMapping::new(main, notes)))
        .collect();

        let yes_no = ["ACCESSIB", "AUTHNTIC", "TERM-RIGHT", "USE-STAT"];
        let permitted = [
            "ARCHIVING",
            "CANC-POL",
            "COPY",
            "COURSEPACKELEC",
            "COURSERES",
            "DL-SAVE",
            "ILLELEC",
            "INTL-ILL",
            "PERPET-RT",
            "PRINTCOPY",
            "ELECLINK",
            "CNCUR-USER",
            "IPACCESS",
            "PUB-PRFM",
            "WALK-IN",
        ];

        let term_value_mappings = yes_no
            .into_iter()
            .map(|code| (code, TermValueMapping::new("YES", "NO", "SILENT")))
            .chain(
                permitted.into_iter().map(|code| {
                    (code, TermValueMapping::new("PERMITTED", "PROHIBITED", "SILENT"))
                }),
            )
            .map(|(code, values)| (code.to_string(), values))
            .collect();

        Self {
            term_mappings,
            term_value_mappings,
        }
    }
}
