//! Text cleanup for ROAM exports
//!
//! ROAM free-text fields carry HTML markup from its rich-text editor and
//! non-breaking spaces. Cleaning strips tags, decodes entities, applies Unicode
//! NFKD compatibility normalization and optionally flattens line breaks.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use unicode_normalization::UnicodeNormalization;

use crate::models::{CellValue, RawRow};

static RE_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<[A-Za-z/!][^<>]*>").expect("Invalid regex"));
static RE_ENTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z]+);").expect("Invalid regex")
});
static RE_LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\n|\r").expect("Invalid regex"));

/// Clean one text value.
pub fn clean_text(text: &str, remove_newline: bool) -> String {
    let stripped = RE_TAG.replace_all(text, "");
    let decoded = RE_ENTITY.replace_all(&stripped, |caps: &Captures| {
        decode_entity(&caps[1]).unwrap_or_else(|| caps[0].to_string())
    });
    let normalized: String = decoded.nfkd().collect();

    if remove_newline {
        RE_LINE_BREAK.replace_all(&normalized, " ").into_owned()
    } else {
        normalized
    }
}

/// Clean every text cell of every row in place. Typed cells are left alone.
pub fn clean_rows(rows: &mut [RawRow], remove_newline: bool) {
    for row in rows.iter_mut() {
        for cell in row.values_mut() {
            if let CellValue::Text(text) = cell
                && !text.is_empty()
            {
                *text = clean_text(text, remove_newline);
            }
        }
    }
}

fn decode_entity(entity: &str) -> Option<String> {
    if let Some(numeric) = entity.strip_prefix('#') {
        let code = match numeric.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => numeric.parse().ok()?,
        };
        return char::from_u32(code).map(String::from);
    }

    let decoded = match entity {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "nbsp" => "\u{a0}",
        _ => return None,
    };
    Some(decoded.to_string())
}
