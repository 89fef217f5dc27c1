//! License and license-term row conversion

use super::ConversionError;
use super::date::normalize_date;
use super::notes::compose_notes;
use super::terms::TermComposer;
use crate::config::{DEFAULT_CREATED_BY, MappingConfig, StatusPolicy};
use crate::models::{
    CellValue, LicenseDetails, LicenseRecord, LicenseStatus, LicenseType, OwneredEntity, RawRow,
    ReviewStatus,
};

/// ROAM column headers
pub mod columns {
    pub const NAME: &str = "Name";
    pub const LICENSE_NAME: &str = "License Name";
    pub const ACTIVE: &str = "Active";
    pub const START_DATE: &str = "Start Date";
    pub const END_DATE: &str = "End Date";
    pub const LICENSE_LINKS: &str = "License Links";
    pub const LICENSE_QUALIFIERS: &str = "License Qualifiers";
    pub const ALLOWED: &str = "Allowed";
    pub const DESCRIPTION: &str = "Description";
    pub const LICENSE_SUMMARY: &str = "License Summary";
    pub const LICENSE_NOTES: &str = "License Notes";
    pub const PUBLISHER: &str = "Publisher";

    /// Date columns present in both exports
    pub const DATE_COLUMNS: [&str; 2] = [START_DATE, END_DATE];
}

/// Sequential license code generator (`<prefix>-0`, `<prefix>-1`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseCodeCounter {
    prefix: String,
    next: usize,
}

impl LicenseCodeCounter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }

    /// Hand out the next code.
    pub fn next_code(&mut self) -> String {
        let code = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        code
    }

    /// Number of codes handed out so far
    pub fn issued(&self) -> usize {
        self.next
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

/// Converts ROAM rows into intermediate license records.
///
/// License rows draw their code from the owned counter, so one converter
/// corresponds to one batch.
pub struct RecordConverter<'a> {
    mappings: &'a MappingConfig,
    policy: &'a dyn StatusPolicy,
    counter: LicenseCodeCounter,
    created_by: String,
}

impl<'a> RecordConverter<'a> {
    pub fn new(
        mappings: &'a MappingConfig,
        policy: &'a dyn StatusPolicy,
        counter: LicenseCodeCounter,
    ) -> Self {
        Self {
            mappings,
            policy,
            counter,
            created_by: DEFAULT_CREATED_BY.to_string(),
        }
    }

    pub fn with_created_by(mut self, created_by: impl Into<String>) -> Self {
        self.created_by = created_by.into();
        self
    }

    pub fn counter(&self) -> &LicenseCodeCounter {
        &self.counter
    }

    /// Convert one license row.
    ///
    /// Status is fixed to ACTIVE/ACCEPTED; the merge later replaces it with the
    /// status derived from the matching term rows. `License Links` is optional.
    pub fn convert_license(
        &mut self,
        row: &RawRow,
        index: usize,
    ) -> Result<LicenseRecord, ConversionError> {
        let license_name = required(row, columns::NAME, index)?.as_text();
        let start_date = date_column(row, columns::START_DATE, index)?;
        let end_date = date_column(row, columns::END_DATE, index)?;
        let uri = row
            .get(columns::LICENSE_LINKS)
            .map(CellValue::as_text)
            .unwrap_or_default();

        let license_code = self.counter.next_code();
        tracing::debug!("License row {} '{}' -> {}", index, license_name, license_code);

        Ok(LicenseRecord {
            license_details: LicenseDetails {
                license_name,
                license_code,
                license_status: LicenseStatus::Active,
                review_status: ReviewStatus::Accepted,
                start_date,
                end_date: non_empty(end_date),
                uri,
                license_type: LicenseType::License,
                ownered_entity: self.owner(),
            },
            term_list: Vec::new(),
            note_list: Vec::new(),
        })
    }

    /// Convert one license-term row.
    ///
    /// Term rows carry no license code; they are joined to their license by
    /// name and start date.
    pub fn convert_license_term(
        &self,
        row: &RawRow,
        index: usize,
    ) -> Result<LicenseRecord, ConversionError> {
        let text = |column: &str| required(row, column, index).map(CellValue::as_text);

        let license_name = text(columns::LICENSE_NAME)?;
        let active = required(row, columns::ACTIVE, index)?.as_flag();
        let start_date = date_column(row, columns::START_DATE, index)?;
        let end_date = date_column(row, columns::END_DATE, index)?;
        let uri = text(columns::LICENSE_LINKS)?;

        let term_list = TermComposer::new(self.mappings).compose(
            &text(columns::NAME)?,
            &text(columns::LICENSE_QUALIFIERS)?,
            &text(columns::ALLOWED)?,
            &text(columns::DESCRIPTION)?,
        )?;
        let note_list = compose_notes(
            &text(columns::LICENSE_SUMMARY)?,
            &text(columns::LICENSE_NOTES)?,
            &text(columns::PUBLISHER)?,
        );

        Ok(LicenseRecord {
            license_details: LicenseDetails {
                license_name,
                license_code: String::new(),
                license_status: self.policy.license_status(active),
                review_status: self.policy.review_status(active),
                start_date,
                end_date: non_empty(end_date),
                uri,
                license_type: LicenseType::License,
                ownered_entity: self.owner(),
            },
            term_list,
            note_list,
        })
    }

    /// Convert license rows in order, aborting on the first failure.
    pub fn convert_licenses(
        &mut self,
        rows: &[RawRow],
    ) -> Result<Vec<LicenseRecord>, ConversionError> {
        rows.iter()
            .enumerate()
            .map(|(index, row)| self.convert_license(row, index))
            .collect()
    }

    /// Convert license-term rows in order, aborting on the first failure.
    pub fn convert_license_terms(
        &self,
        rows: &[RawRow],
    ) -> Result<Vec<LicenseRecord>, ConversionError> {
        rows.iter()
            .enumerate()
            .map(|(index, row)| self.convert_license_term(row, index))
            .collect()
    }

    fn owner(&self) -> OwneredEntity {
        OwneredEntity {
            created_by: self.created_by.clone(),
        }
    }
}

fn required<'r>(
    row: &'r RawRow,
    column: &str,
    index: usize,
) -> Result<&'r CellValue, ConversionError> {
    row.get(column).ok_or_else(|| ConversionError::MissingField {
        column: column.to_string(),
        row: index,
    })
}

fn date_column(row: &RawRow, column: &str, index: usize) -> Result<String, ConversionError> {
    normalize_date(column, required(row, column, index)?)
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
