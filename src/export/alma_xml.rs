//! Alma license XML exporter
//!
//! Writes one `license` document per merged record in the Alma license
//! migration namespace. Empty term and note lists are left out, as is an absent
//! end date.

use once_cell::sync::Lazy;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

use super::{ExportError, ExportResult};
use crate::models::{LicenseRecord, OwneredEntity};
use crate::validation::xml::validate_license_xml;

/// Namespace of the Alma license migration schema
pub const ALMA_LICENSE_NAMESPACE: &str =
    "http://com/exlibris/urm/repository/migration/license/xmlbeans";

const FORMAT: &str = "alma-license-xml";

static RE_FILE_NAME_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.,!'() &$%#@*/\\]").expect("Invalid regex"));

/// Files written by [`AlmaXmlExporter::export_all`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub written: Vec<PathBuf>,
}

impl ExportSummary {
    pub fn count(&self) -> usize {
        self.written.len()
    }
}

/// Output file name for the `index`-th license.
///
/// The license name is lower-cased and stripped of punctuation, spaces and
/// path separators.
pub fn output_file_name(index: usize, license_name: &str, prefix: &str, suffix: &str) -> String {
    let lowered = license_name.to_lowercase();
    let name = RE_FILE_NAME_CHARS.replace_all(&lowered, "");
    format!("{}-{}{}{}.xml", index, prefix, name, suffix)
}

/// Alma license XML exporter
#[derive(Debug, Clone)]
pub struct AlmaXmlExporter {
    file_prefix: String,
    file_suffix: String,
}

impl Default for AlmaXmlExporter {
    fn default() -> Self {
        Self::new("license-", "")
    }
}

impl AlmaXmlExporter {
    pub fn new(file_prefix: impl Into<String>, file_suffix: impl Into<String>) -> Self {
        Self {
            file_prefix: file_prefix.into(),
            file_suffix: file_suffix.into(),
        }
    }

    /// Render one license record.
    pub fn export(&self, record: &LicenseRecord) -> Result<ExportResult, ExportError> {
        Ok(ExportResult {
            content: render(record)?,
            format: FORMAT.to_string(),
        })
    }

    /// Render, write and validate every record under `output_folder`.
    ///
    /// The folder is created if needed. Stops at the first write or validation
    /// failure.
    pub fn export_all(
        &self,
        records: &[LicenseRecord],
        output_folder: &Path,
    ) -> Result<ExportSummary, ExportError> {
        tracing::info!("Exporting license XML files to {}", output_folder.display());
        fs::create_dir_all(output_folder).map_err(|e| {
            ExportError::IoError(format!("{}: {}", output_folder.display(), e))
        })?;

        let mut summary = ExportSummary::default();
        for (index, record) in records.iter().enumerate() {
            let file_name =
                output_file_name(index, record.name(), &self.file_prefix, &self.file_suffix);
            let path = output_folder.join(file_name);

            let xml = self.export(record)?.content;
            fs::write(&path, &xml)
                .map_err(|e| ExportError::IoError(format!("{}: {}", path.display(), e)))?;
            tracing::debug!("Wrote to {}", path.display());

            validate_license_xml(&xml).map_err(|e| {
                ExportError::ValidationError(format!("{}: {}", path.display(), e))
            })?;
            tracing::debug!("Validation for {} successful", path.display());

            summary.written.push(path);
        }

        tracing::info!(
            "Exported {} out of {} license records",
            summary.count(),
            records.len()
        );
        Ok(summary)
    }
}

fn render(record: &LicenseRecord) -> Result<String, ExportError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    let details = &record.license_details;

    write(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )?;

    let mut root = BytesStart::new("license");
    root.push_attribute(("xmlns", ALMA_LICENSE_NAMESPACE));
    write(&mut writer, Event::Start(root))?;

    start(&mut writer, "license_details")?;
    text_element(&mut writer, "license_code", &details.license_code)?;
    text_element(&mut writer, "license_name", &details.license_name)?;
    text_element(&mut writer, "license_status", details.license_status.as_str())?;
    text_element(&mut writer, "review_status", details.review_status.as_str())?;
    text_element(&mut writer, "type", details.license_type.as_str())?;
    text_element(&mut writer, "start_date", &details.start_date)?;
    if let Some(end_date) = &details.end_date {
        text_element(&mut writer, "end_date", end_date)?;
    }
    text_element(&mut writer, "URI", &details.uri)?;
    owner_element(&mut writer, &details.ownered_entity)?;
    end(&mut writer, "license_details")?;

    if !record.term_list.is_empty() {
        start(&mut writer, "term_list")?;
        for term in &record.term_list {
            start(&mut writer, "term")?;
            text_element(&mut writer, "term_code", &term.term_code)?;
            text_element(&mut writer, "term_value", &term.term_value)?;
            end(&mut writer, "term")?;
        }
        end(&mut writer, "term_list")?;
    }

    if !record.note_list.is_empty() {
        start(&mut writer, "note_list")?;
        for note in &record.note_list {
            start(&mut writer, "note")?;
            text_element(&mut writer, "content", &note.content)?;
            owner_element(&mut writer, &details.ownered_entity)?;
            end(&mut writer, "note")?;
        }
        end(&mut writer, "note_list")?;
    }

    end(&mut writer, "license")?;

    String::from_utf8(writer.into_inner())
        .map_err(|e| ExportError::SerializationError(e.to_string()))
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), ExportError> {
    writer
        .write_event(event)
        .map_err(|e| ExportError::SerializationError(e.to_string()))
}

fn start(writer: &mut Writer<Vec<u8>>, name: &str) -> Result<(), ExportError> {
    write(writer, Event::Start(BytesStart::new(name)))
}

fn end(writer: &mut Writer<Vec<u8>>, name: &str) -> Result<(), ExportError> {
    write(writer, Event::End(BytesEnd::new(name)))
}

fn text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<(), ExportError> {
    start(writer, name)?;
    // Written even when empty so the close tag stays on the same line.
    write(writer, Event::Text(BytesText::new(text)))?;
    end(writer, name)
}

fn owner_element(writer: &mut Writer<Vec<u8>>, owner: &OwneredEntity) -> Result<(), ExportError> {
    start(writer, "ownered_entity")?;
    text_element(writer, "created_by", &owner.created_by)?;
    end(writer, "ownered_entity")
}
