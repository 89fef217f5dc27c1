//! XML validation utilities
//!
//! Checks a rendered Alma license document for well-formedness and for the
//! structure the Alma import requires. This is a structural check, not XSD
//! validation.

use quick_xml::Reader;
use quick_xml::events::Event;
use thiserror::Error;

/// Header elements that must be present with non-empty text
const REQUIRED_DETAILS: [&str; 5] = [
    "license_code",
    "license_name",
    "license_status",
    "review_status",
    "type",
];

/// Errors found while validating a license document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XmlValidationError {
    #[error("XML parsing error: {0}")]
    Malformed(String),
    #[error("Root element must be 'license', found '{0}'")]
    UnexpectedRoot(String),
    #[error("Expected exactly one license_details element, found {0}")]
    LicenseDetailsCount(usize),
    #[error("Required element '{0}' is missing or empty")]
    MissingElement(String),
    #[error("Element '{element}' must be a YYYYMMDD date, found '{value}'")]
    InvalidDate { element: String, value: String },
}

/// A closed element: its path from the root and its direct text content.
struct Closed {
    path: Vec<String>,
    text: String,
}

impl Closed {
    fn is(&self, path: &[&str]) -> bool {
        self.path.len() == path.len() && self.path.iter().zip(path).all(|(a, b)| a == b)
    }
}

fn parse_elements(xml_content: &str) -> Result<Vec<Closed>, XmlValidationError> {
    let mut reader = Reader::from_str(xml_content);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<(String, String)> = Vec::new();
    let mut closed = Vec::new();
    let mut saw_root = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                if stack.is_empty() {
                    if saw_root {
                        return Err(XmlValidationError::Malformed(
                            "multiple root elements".to_string(),
                        ));
                    }
                    saw_root = true;
                }
                stack.push((name, String::new()));
            }
            Ok(Event::Empty(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                let mut path: Vec<String> = stack.iter().map(|(n, _)| n.clone()).collect();
                path.push(name);
                closed.push(Closed {
                    path,
                    text: String::new(),
                });
            }
            Ok(Event::Text(t)) => {
                let text = t
                    .unescape()
                    .map_err(|e| XmlValidationError::Malformed(e.to_string()))?;
                if let Some((_, buf)) = stack.last_mut() {
                    buf.push_str(&text);
                }
            }
            Ok(Event::End(_)) => {
                let path: Vec<String> = stack.iter().map(|(n, _)| n.clone()).collect();
                if let Some((_, text)) = stack.pop() {
                    closed.push(Closed { path, text });
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => continue,
            Err(e) => return Err(XmlValidationError::Malformed(e.to_string())),
        }
    }

    if !stack.is_empty() {
        return Err(XmlValidationError::Malformed(
            "unexpected end of document".to_string(),
        ));
    }
    Ok(closed)
}

/// Validate a rendered Alma license document.
pub fn validate_license_xml(xml_content: &str) -> Result<(), XmlValidationError> {
    let elements = parse_elements(xml_content)?;

    let root = elements
        .iter()
        .find(|e| e.path.len() == 1)
        .ok_or_else(|| XmlValidationError::Malformed("no root element".to_string()))?;
    if root.path[0] != "license" {
        return Err(XmlValidationError::UnexpectedRoot(root.path[0].clone()));
    }

    let details = elements
        .iter()
        .filter(|e| e.is(&["license", "license_details"]))
        .count();
    if details != 1 {
        return Err(XmlValidationError::LicenseDetailsCount(details));
    }

    let detail = |name: &str| {
        elements
            .iter()
            .find(|e| e.is(&["license", "license_details", name]))
    };

    for name in REQUIRED_DETAILS {
        match detail(name) {
            Some(e) if !e.text.trim().is_empty() => {}
            _ => return Err(XmlValidationError::MissingElement(name.to_string())),
        }
    }

    for name in ["start_date", "end_date"] {
        if let Some(e) = detail(name) {
            let value = e.text.trim();
            if !value.is_empty() && !(value.len() == 8 && value.bytes().all(|b| b.is_ascii_digit()))
            {
                return Err(XmlValidationError::InvalidDate {
                    element: name.to_string(),
                    value: value.to_string(),
                });
            }
        }
    }

    let terms = elements
        .iter()
        .filter(|e| e.is(&["license", "term_list", "term", "term_code"]));
    for term_code in terms {
        if term_code.text.trim().is_empty() {
            return Err(XmlValidationError::MissingElement("term_code".to_string()));
        }
    }
    let term_count = elements
        .iter()
        .filter(|e| e.is(&["license", "term_list", "term"]))
        .count();
    let code_count = elements
        .iter()
        .filter(|e| e.is(&["license", "term_list", "term", "term_code"]))
        .count();
    if code_count < term_count {
        return Err(XmlValidationError::MissingElement("term_code".to_string()));
    }

    Ok(())
}
