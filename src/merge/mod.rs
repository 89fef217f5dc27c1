//! License / license-term merging
//!
//! ROAM exports licenses and their terms separately. Every converted term record
//! is joined to the licenses sharing its `(license_name, start_date)` key and its
//! terms, notes, links and statuses are folded into each match.
//!
//! Tie-break rules when several term records match one license:
//! - terms are concatenated in encounter order;
//! - notes and `URI` are taken from the first match that finds them empty;
//! - `license_status` / `review_status` are overwritten on every match, so the
//!   last match wins.
//!
//! The asymmetry between the note/link rule and the status rule is kept as-is.
//! Well-formed input has at most one term record per license, and the report
//! flags anything else.

use serde::Serialize;
use tracing::{debug, error, info};

use crate::models::{LicenseRecord, TermEntry};

/// Term record that matched no license
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnmatchedTerm {
    /// Position in the license-term collection
    pub index: usize,
    pub license_name: String,
    pub start_date: String,
}

/// Term record that matched more than one license
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultiplyMatchedTerm {
    pub index: usize,
    pub license_name: String,
    pub matches: usize,
    pub terms: Vec<TermEntry>,
}

/// Match accounting for one merge.
///
/// Unmatched and multiply-matched term records are diagnostics, not failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[must_use = "merge reports carry unmatched and duplicate term diagnostics"]
pub struct MergeReport {
    /// License/term pairs joined (a term matching two licenses counts twice)
    pub matched: usize,
    /// Per term record, how many licenses it matched
    pub match_counts: Vec<usize>,
    pub unmatched: Vec<UnmatchedTerm>,
    pub multiply_matched: Vec<MultiplyMatchedTerm>,
}

impl MergeReport {
    /// No unmatched and no multiply-matched term records
    pub fn is_clean(&self) -> bool {
        self.unmatched.is_empty() && self.multiply_matched.is_empty()
    }

    /// Emit the report through `tracing`.
    pub fn log(&self) {
        info!("License Terms Matched: {}", self.matched);
        info!("Number of license terms unmatched: {}", self.unmatched.len());
        if !self.unmatched.is_empty() {
            error!("Unmatched License Terms: {}", to_json(&self.unmatched));
        }
        info!(
            "Number of license terms matched more than once: {}",
            self.multiply_matched.len()
        );
        if !self.multiply_matched.is_empty() {
            error!(
                "License Terms Matched More Than Once: {}",
                to_json(&self.multiply_matched)
            );
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| format!("<unserializable: {}>", e))
}

/// Fold license-term records into their licenses in place.
///
/// Licenses are visited in order and, for each, term records in order, so the
/// outcome depends only on the two input orderings.
pub fn merge_license_terms(
    licenses: &mut [LicenseRecord],
    license_terms: &[LicenseRecord],
) -> MergeReport {
    info!("Combining Roam Licenses and License Terms...");

    let mut match_counts = vec![0usize; license_terms.len()];
    let mut matched = 0;

    for license in licenses.iter_mut() {
        debug!("Target Name: {}", license.name());

        for (index, term_record) in license_terms.iter().enumerate() {
            if term_record.key() != license.key() {
                continue;
            }

            match_counts[index] += 1;
            matched += 1;
            fold(license, term_record);
        }
    }

    let unmatched = license_terms
        .iter()
        .zip(&match_counts)
        .enumerate()
        .filter(|(_, (_, count))| **count == 0)
        .map(|(index, (record, _))| UnmatchedTerm {
            index,
            license_name: record.license_details.license_name.clone(),
            start_date: record.license_details.start_date.clone(),
        })
        .collect();

    let multiply_matched = license_terms
        .iter()
        .zip(&match_counts)
        .enumerate()
        .filter(|(_, (_, count))| **count > 1)
        .map(|(index, (record, count))| MultiplyMatchedTerm {
            index,
            license_name: record.license_details.license_name.clone(),
            matches: *count,
            terms: record.term_list.clone(),
        })
        .collect();

    let report = MergeReport {
        matched,
        match_counts,
        unmatched,
        multiply_matched,
    };
    report.log();
    report
}

fn fold(license: &mut LicenseRecord, term_record: &LicenseRecord) {
    license
        .term_list
        .extend(term_record.term_list.iter().cloned());

    if license.note_list.is_empty() {
        license.note_list = term_record.note_list.clone();
    }

    let details = &mut license.license_details;
    if details.uri.is_empty() {
        details.uri = term_record.license_details.uri.clone();
    }

    // Statuses come from the term export's Active column; the last match wins.
    details.license_status = term_record.license_details.license_status;
    details.review_status = term_record.license_details.review_status;
}
