//! Term composition and value translation tests

mod common;

use roam_alma_sdk::config::MappingConfig;
use roam_alma_sdk::convert::{AllowedFlag, ConversionError, TermComposer, translate};
use roam_alma_sdk::models::TermEntry;

use common::test_mappings;

struct Case {
    name: &'static str,
    allowed: &'static str,
    qualifier: &'static str,
    description: &'static str,
    expected: &'static [(&'static str, &'static str)],
}

const CASES: &[Case] = &[
    Case {
        name: "Printing",
        allowed: "yes",
        qualifier: "",
        description: "Reasonable amount by needed parties",
        expected: &[
            ("PRINTCOPY", "PERMITTED"),
            ("PRINTCOPYN", "Reasonable amount by needed parties"),
        ],
    },
    Case {
        name: "Copying",
        allowed: "n/a",
        qualifier: "On Premesis",
        description: "Reasonable amount by needed parties",
        expected: &[
            ("DIGCOPY", "SILENT"),
            ("DIGCOPYN", "On Premesis; Reasonable amount by needed parties"),
        ],
    },
    Case {
        name: "Interlibrary Loan (ILL)",
        allowed: "no",
        qualifier: "",
        description: "The license states you cannot transfer this data to other libraries.",
        expected: &[
            ("ILLELEC", "PROHIBITED"),
            (
                "ILLN",
                "The license states you cannot transfer this data to other libraries.",
            ),
        ],
    },
    Case {
        name: "ADA Accessibility",
        allowed: "yes",
        qualifier: "",
        description: "Accessibility terms available on our website at...",
        expected: &[("ACCESSIBILITY", "YES")],
    },
    Case {
        name: "ADA Accessibility",
        allowed: "n/a",
        qualifier: "",
        description: "",
        expected: &[("ACCESSIBILITY", "NO")],
    },
    Case {
        name: "Archiving",
        allowed: "no",
        qualifier: "",
        description: "We do not allow archiving of any materials.",
        expected: &[
            ("ARCHIVE", "NO"),
            ("ARCHIVEN", "We do not allow archiving of any materials."),
        ],
    },
    Case {
        name: "Archiving",
        allowed: "n/a",
        qualifier: "",
        description: "",
        expected: &[("ARCHIVE", "YES")],
    },
    Case {
        name: "Authentication",
        allowed: "yes",
        qualifier: "Walk-ins or IP-based",
        description: "IP users or walk-ins allowed.",
        expected: &[(
            "AUTHUSERDEF",
            "Walk-ins or IP-based; IP users or walk-ins allowed.",
        )],
    },
    Case {
        name: "Cancellation Policy",
        allowed: "yes",
        qualifier: "",
        description: "We must know 60 days before cancellation",
        expected: &[("TERMREQS", "We must know 60 days before cancellation")],
    },
    Case {
        name: "Downloading/Saving",
        allowed: "n/a",
        qualifier: "",
        description: "Fair Use Prevails.",
        expected: &[("DIGCOPY", "SILENT"), ("DIGCOPYN", "Fair Use Prevails.")],
    },
    Case {
        name: "Perpetual Access/Post Cancellation Rights",
        allowed: "no",
        qualifier: "",
        description: "Cease use upon cancellation.",
        expected: &[
            ("PERPETUAL", "NO"),
            ("PERPETUALN", "Cease use upon cancellation."),
        ],
    },
    Case {
        name: "Public Performance",
        allowed: "yes",
        qualifier: "CRED",
        description: "Please Give Credit.",
        expected: &[(
            "OTHERUSERSTRN",
            "Public Performance: CRED; Please Give Credit.",
        )],
    },
    Case {
        name: "Simultaneous Users",
        allowed: "yes",
        qualifier: "Unlimited",
        description: "Terms do not specify number of simultaneous users.",
        expected: &[
            ("CONCURUSERN", "Concurrent Users Permitted"),
            (
                "CONCURUSERN",
                "Unlimited; Terms do not specify number of simultaneous users.",
            ),
        ],
    },
    Case {
        name: "Usage Statistics",
        allowed: "yes",
        qualifier: "",
        description: "Counter Compliant will be provided.",
        expected: &[(
            "OTHERUSERSTRN",
            "Usage Statistics: Counter Compliant will be provided.",
        )],
    },
];

#[test]
fn test_compose_known_terms() {
    let mappings = test_mappings();
    let composer = TermComposer::new(&mappings);

    for case in CASES {
        let actual = composer
            .compose(case.name, case.qualifier, case.allowed, case.description)
            .unwrap_or_else(|e| panic!("{} ({}): {}", case.name, case.allowed, e));
        let expected: Vec<TermEntry> = case
            .expected
            .iter()
            .map(|(code, value)| TermEntry::new(*code, *value))
            .collect();
        assert_eq!(actual, expected, "{} ({})", case.name, case.allowed);
    }
}

#[test]
fn test_notes_only_term_ignores_allowed() {
    let mappings = test_mappings();
    let terms = TermComposer::new(&mappings)
        .compose("Authentication", "", "maybe", "Shibboleth")
        .unwrap();
    assert_eq!(terms, vec![TermEntry::new("AUTHUSERDEF", "Shibboleth")]);

    let terms = TermComposer::new(&mappings)
        .compose("Authentication", "", "yes", "")
        .unwrap();
    assert!(terms.is_empty());
}

#[test]
fn test_unknown_allowed_value_fails() {
    let mappings = test_mappings();
    let err = TermComposer::new(&mappings)
        .compose("Printing", "", "sometimes", "")
        .unwrap_err();
    assert_eq!(
        err,
        ConversionError::UnknownAllowedValue("sometimes".to_string())
    );
}

#[test]
fn test_unknown_term_name_fails() {
    let mappings = test_mappings();
    let err = TermComposer::new(&mappings)
        .compose("Walk-in user", "", "yes", "")
        .unwrap_err();
    assert_eq!(
        err,
        ConversionError::UnmappedTermName("Walk-in user".to_string())
    );
}

#[test]
fn test_translate_every_flag() {
    let mappings = test_mappings();
    let values: Vec<&str> = [AllowedFlag::Yes, AllowedFlag::No, AllowedFlag::NotApplicable]
        .into_iter()
        .map(|flag| translate(&mappings, "CONCURUSERN", flag).unwrap())
        .collect();
    assert_eq!(
        values,
        [
            "Concurrent Users Permitted",
            "Concurrent Users Prohibited",
            "Silent"
        ]
    );
}

#[test]
fn test_translate_unmapped_code() {
    let err = translate(&MappingConfig::empty(), "PRINTCOPY", AllowedFlag::Yes).unwrap_err();
    assert_eq!(
        err,
        ConversionError::UnmappedTermCode("PRINTCOPY".to_string())
    );
}

#[test]
fn test_allowed_flag_parsing_is_lenient_on_case_and_spaces() {
    assert_eq!(" YES ".parse::<AllowedFlag>().unwrap(), AllowedFlag::Yes);
    assert_eq!("No".parse::<AllowedFlag>().unwrap(), AllowedFlag::No);
    assert_eq!("N/A".parse::<AllowedFlag>().unwrap(), AllowedFlag::NotApplicable);
    assert!("".parse::<AllowedFlag>().is_err());
}
