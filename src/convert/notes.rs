//! License note composition

use crate::models::NoteEntry;

pub const SUMMARY_LABEL: &str = "License Summary: ";
pub const NOTES_LABEL: &str = "License Notes: ";
pub const PUBLISHER_LABEL: &str = "Publisher: ";

/// Labelled notes for the non-empty fields, always in summary, notes, publisher
/// order.
pub fn compose_notes(summary: &str, notes: &str, publisher: &str) -> Vec<NoteEntry> {
    [
        (SUMMARY_LABEL, summary),
        (NOTES_LABEL, notes),
        (PUBLISHER_LABEL, publisher),
    ]
    .into_iter()
    .filter(|(_, text)| !text.is_empty())
    .map(|(label, text)| NoteEntry::new(format!("{}{}", label, text)))
    .collect()
}
