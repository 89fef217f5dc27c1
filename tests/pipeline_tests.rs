//! End-to-end migration tests

mod common;

use roam_alma_sdk::models::{LicenseStatus, NoteEntry, TermEntry};
use roam_alma_sdk::pipeline::{MigrationError, MigrationPipeline};
use roam_alma_sdk::validation::validate_license_xml;
use std::fs;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

use common::test_config;

const LICENSES: &str = "Name,Start Date,End Date,License Links\n\
Wiley,05/12/2020,07/24/2020,\n\
JSTOR,01/01/2019,,https://jstor.org/license\n";

const LICENSE_TERMS: &str = "License Name,Active,Start Date,End Date,License Links,Name,License Qualifiers,Allowed,Description,License Summary,License Notes,Publisher\n\
Wiley,TRUE,2020-05-12,2020-07-24,www.google.com,Copying,On Premesis,yes,<p>Reasonable amount by needed parties</p>,A summary,Here&#39;s the note!,Wiley Electronics\n\
Wiley,TRUE,2020-05-12,2020-07-24,,Usage Statistics,,yes,Counter Compliant will be provided.,,,\n\
JSTOR,FALSE,2019-01-01,,,Printing,,n/a,,,,\n\
Elsevier,TRUE,2018-01-01,,,Printing,,yes,,,,\n";

#[test]
fn test_run_files_and_export() {
    let dir = tempfile::tempdir().unwrap();
    let licenses = dir.path().join("licenses.csv");
    let terms = dir.path().join("license_terms.csv");
    fs::write(&licenses, LICENSES).unwrap();
    fs::write(&terms, LICENSE_TERMS).unwrap();

    let pipeline = MigrationPipeline::new(test_config());
    let output = pipeline.run_files(&licenses, &terms).unwrap();

    assert_eq!(output.licenses.len(), 2);
    assert_eq!(output.report.matched, 3);
    assert_eq!(output.report.unmatched.len(), 1);
    assert_eq!(output.report.unmatched[0].license_name, "Elsevier");

    let wiley = &output.licenses[0];
    assert_eq!(wiley.license_details.license_code, "ROAM-0");
    assert_eq!(wiley.license_details.uri, "www.google.com");
    assert_eq!(
        wiley.term_list,
        vec![
            TermEntry::new("DIGCOPY", "PERMITTED"),
            TermEntry::new("DIGCOPYN", "On Premesis; Reasonable amount by needed parties"),
            TermEntry::new(
                "OTHERUSERSTRN",
                "Usage Statistics: Counter Compliant will be provided."
            ),
        ]
    );
    assert_eq!(
        wiley.note_list,
        vec![
            NoteEntry::new("License Summary: A summary"),
            NoteEntry::new("License Notes: Here's the note!"),
            NoteEntry::new("Publisher: Wiley Electronics"),
        ]
    );

    let jstor = &output.licenses[1];
    assert_eq!(jstor.license_details.license_code, "ROAM-1");
    assert_eq!(jstor.license_details.uri, "https://jstor.org/license");
    assert_eq!(jstor.license_details.license_status, LicenseStatus::Retired);
    assert_eq!(jstor.license_details.end_date, None);
    assert_eq!(jstor.term_list, vec![TermEntry::new("PRINTCOPY", "SILENT")]);

    let out_dir = dir.path().join("output");
    let summary = pipeline.export(&output, &out_dir).unwrap();
    assert_eq!(summary.count(), 2);
    assert_eq!(summary.written[0], out_dir.join("0-license-wiley.xml"));
    assert_eq!(summary.written[1], out_dir.join("1-license-jstor.xml"));
    for path in &summary.written {
        validate_license_xml(&fs::read_to_string(path).unwrap()).unwrap();
    }
}

#[test]
fn test_run_without_cleaning_keeps_markup() {
    let dir = tempfile::tempdir().unwrap();
    let licenses = dir.path().join("licenses.csv");
    let terms = dir.path().join("license_terms.csv");
    fs::write(&licenses, LICENSES).unwrap();
    fs::write(&terms, LICENSE_TERMS).unwrap();

    let mut config = test_config();
    config.settings.clean = false;
    let output = MigrationPipeline::new(config)
        .run_files(&licenses, &terms)
        .unwrap();

    assert_eq!(
        output.licenses[0].term_list[1].term_value,
        "On Premesis; <p>Reasonable amount by needed parties</p>"
    );
}

#[test]
fn test_bad_date_aborts_run() {
    let dir = tempfile::tempdir().unwrap();
    let licenses = dir.path().join("licenses.csv");
    let terms = dir.path().join("license_terms.csv");
    fs::write(&licenses, "Name,Start Date,End Date\nWiley,12 May 2020,\n").unwrap();
    fs::write(&terms, LICENSE_TERMS).unwrap();

    let err = MigrationPipeline::new(test_config())
        .run_files(&licenses, &terms)
        .unwrap_err();
    assert!(matches!(err, MigrationError::Conversion(_)));
    assert!(err.to_string().contains("12 May 2020"));
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = MigrationPipeline::new(test_config())
        .run_files(&dir.path().join("a.csv"), &dir.path().join("b.csv"))
        .unwrap_err();
    assert!(matches!(err, MigrationError::Import(_)));
}

#[test]
fn test_empty_inputs() {
    let output = MigrationPipeline::new(test_config())
        .run(Vec::new(), Vec::new())
        .unwrap();
    assert!(output.licenses.is_empty());
    assert!(output.report.is_clean());
}

/// In-memory log sink for asserting on emitted events
#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLog {
    type Writer = CapturedLog;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn test_merge_report_logged_once_per_run() {
    let dir = tempfile::tempdir().unwrap();
    let licenses = dir.path().join("licenses.csv");
    let terms = dir.path().join("license_terms.csv");
    fs::write(&licenses, LICENSES).unwrap();
    fs::write(&terms, LICENSE_TERMS).unwrap();

    let log = CapturedLog::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(log.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();

    let pipeline = MigrationPipeline::new(test_config());
    tracing::subscriber::with_default(subscriber, || {
        pipeline.run_files(&licenses, &terms).unwrap();
    });

    let output = log.contents();
    assert_eq!(output.matches("License Terms Matched:").count(), 1);
    assert_eq!(output.matches("Unmatched License Terms:").count(), 1);
    assert_eq!(
        output
            .matches("Number of license terms matched more than once:")
            .count(),
        1
    );
}
