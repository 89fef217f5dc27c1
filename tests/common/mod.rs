//! Shared fixtures for the integration suites

#![allow(dead_code)]

use roam_alma_sdk::config::{MappingConfig, MigrationConfig};
use roam_alma_sdk::models::RawRow;

/// Development mapping tables, smaller than the production ones and using the
/// Alma codes of the sandbox instance.
pub const TEST_CONFIG: &str = r#"
[settings]
code_prefix = "ROAM"
file_prefix = "license-"

[term_mappings]
"ADA Accessibility" = ["ACCESSIBILITY", ""]
"Archiving" = ["ARCHIVE", "ARCHIVEN"]
"Authentication" = ["", "AUTHUSERDEF"]
"Cancellation Policy" = ["", "TERMREQS"]
"Copying" = ["DIGCOPY", "DIGCOPYN"]
"Course Packs" = ["COURSEPACKELEC", "COURSEPACKN"]
"Course Reserves" = ["COURSERES", "COURSERESNOTE"]
"Downloading/Saving" = ["DIGCOPY", "DIGCOPYN"]
"Interlibrary Loan (ILL)" = ["ILLELEC", "ILLN"]
"Perpetual Access/Post Cancellation Rights" = ["PERPETUAL", "PERPETUALN"]
"Printing" = ["PRINTCOPY", "PRINTCOPYN"]
"Public Performance" = ["", "OTHERUSERSTRN"]
"Sharing/Linking" = ["ELECLINK", "ELECLINKNOTE"]
"Simultaneous Users" = ["CONCURUSERN", "CONCURUSERN"]
"Usage Statistics" = ["", "OTHERUSERSTRN"]

[term_value_mappings.ACCESSIBILITY]
yes = "YES"
no = "NO"
"n/a" = "NO"

[term_value_mappings.ARCHIVE]
yes = "YES"
no = "NO"
"n/a" = "YES"

[term_value_mappings.DIGCOPY]
yes = "PERMITTED"
no = "PROHIBITED"
"n/a" = "SILENT"

[term_value_mappings.COURSEPACKELEC]
yes = "PERMITTED"
no = "PROHIBITED"
"n/a" = "SILENT"

[term_value_mappings.COURSERES]
yes = "PERMITTED"
no = "PROHIBITED"
"n/a" = "SILENT"

[term_value_mappings.ILLELEC]
yes = "PERMITTED"
no = "PROHIBITED"
"n/a" = "SILENT"

[term_value_mappings.PERPETUAL]
yes = "YES"
no = "NO"
"n/a" = "NO"

[term_value_mappings.PRINTCOPY]
yes = "PERMITTED"
no = "PROHIBITED"
"n/a" = "SILENT"

[term_value_mappings.ELECLINK]
yes = "PERMITTED"
no = "PROHIBITED"
"n/a" = "SILENT"

[term_value_mappings.CONCURUSERN]
yes = "Concurrent Users Permitted"
no = "Concurrent Users Prohibited"
"n/a" = "Silent"
"#;

pub fn test_config() -> MigrationConfig {
    MigrationConfig::parse(TEST_CONFIG).expect("test config parses")
}

pub fn test_mappings() -> MappingConfig {
    test_config().mappings
}

/// A license row as exported by ROAM
pub fn license_row(name: &str, start_date: &str, end_date: &str) -> RawRow {
    RawRow::new()
        .with("Name", name)
        .with("Start Date", start_date)
        .with("End Date", end_date)
}

/// A license-term row with empty notes columns
pub fn term_row(
    license_name: &str,
    start_date: &str,
    active: bool,
    term_name: &str,
    allowed: &str,
) -> RawRow {
    RawRow::new()
        .with("License Name", license_name)
        .with("Active", active)
        .with("Start Date", start_date)
        .with("End Date", "")
        .with("License Links", "")
        .with("Name", term_name)
        .with("License Qualifiers", "")
        .with("Allowed", allowed)
        .with("Description", "")
        .with("License Summary", "")
        .with("License Notes", "")
        .with("Publisher", "")
}
