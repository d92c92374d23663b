use pretty_assertions::assert_eq;
use shared_types::{
    initial_legal_basis, LegalKey, ProtocolNumber, ProtocolPrepared, ProtocolSummaryArgs,
    DEFAULT_DETENTION_MATERIALS, DEFAULT_DETENTION_PURPOSE,
};
use workflow::composer::*;

use crate::common::date;

#[test]
fn no_codes_gives_empty_clause() {
    assert_eq!(build_legal_basis_clause(&initial_legal_basis(), "Іваненко Петро", None), "");
}

#[test]
fn single_code_with_subject_and_birth_date() {
    let mut basis = initial_legal_basis();
    basis.insert(LegalKey::Art44P1Force, true);
    assert_eq!(
        build_legal_basis_clause(&basis, " Іваненко Петро ", Some(date(1990, 3, 7))),
        "Відповідно до частини 1 статті 44 ЗУ \"Про Національну поліцію\" - застосовано фізичну силу до Іваненко Петро 07.03.1990 р.н."
    );
}

#[test]
fn clauses_joined_in_declaration_order_without_subject() {
    let mut basis = initial_legal_basis();
    basis.insert(LegalKey::Art45P2ABaton, true);
    basis.insert(LegalKey::Art45P1AHandcuffs, true);
    let clause = build_legal_basis_clause(&basis, "", None);
    assert_eq!(
        clause,
        format!(
            "{} та {}.",
            LegalKey::Art45P1AHandcuffs.clause(),
            LegalKey::Art45P2ABaton.clause()
        )
    );
}

#[test]
fn birth_date_without_name_still_names_subject() {
    let mut basis = initial_legal_basis();
    basis.insert(LegalKey::Art45P3BTeargas, true);
    assert!(build_legal_basis_clause(&basis, "", Some(date(2000, 1, 1))).ends_with(" до 01.01.2000 р.н."));
}

#[test]
fn subject_sentence_ends_with_single_period() {
    let mut basis = initial_legal_basis();
    basis.insert(LegalKey::Art44P1Force, true);

    let with_dob = build_legal_basis_clause(&basis, "Іваненко Петро", Some(date(1990, 3, 7)));
    assert!(with_dob.ends_with("07.03.1990 р.н."));
    assert!(!with_dob.ends_with(".."));

    let name_only = build_legal_basis_clause(&basis, "Іваненко Петро", None);
    assert!(name_only.ends_with(" до Іваненко Петро."));
}

#[test]
fn protocol_not_prepared_with_and_without_reason() {
    let mut args = ProtocolSummaryArgs {
        protocol_prepared: ProtocolPrepared::No,
        ..ProtocolSummaryArgs::default()
    };
    assert_eq!(build_protocol_summary(&args), "Не складався. Причина: не вказано.");
    args.protocol_no_reason = " відмовився ".to_string();
    assert_eq!(build_protocol_summary(&args), "Не складався. Причина: відмовився.");
}

#[test]
fn protocol_unset_is_empty() {
    assert_eq!(build_protocol_summary(&ProtocolSummaryArgs::default()), "");
}

#[test]
fn protocol_prepared_fills_template() {
    let args = ProtocolSummaryArgs {
        protocol_prepared: ProtocolPrepared::Yes,
        protocol_series: "АБ".to_string(),
        protocol_number: "123456".to_string(),
        detention_from_date: "2024-05-01".to_string(),
        detention_from_time: "22:15".to_string(),
        detention_to_date: "2024-05-02".to_string(),
        detention_to_time: "01:40".to_string(),
        detention_purpose: "для встановлення особи".to_string(),
        detention_materials: "Складено протокол".to_string(),
        ..ProtocolSummaryArgs::default()
    };
    assert_eq!(
        build_protocol_summary(&args),
        "Складався, відповідно до статей 261, 262, 263 КУпАП, затриманий з 22 год. 15 хв. 01.05.2024 р. до 01 год. 40 хв. 02.05.2024 р., для встановлення особи. Складено протокол серії АБ номер 123456"
    );
}

#[test]
fn protocol_prepared_uses_placeholders_and_default_materials() {
    let args = ProtocolSummaryArgs {
        protocol_prepared: ProtocolPrepared::Yes,
        detention_from_date: "2024-05-01".to_string(),
        detention_from_time: "10:00".to_string(),
        detention_to_date: "2024-05-01".to_string(),
        detention_to_time: "12:00".to_string(),
        detention_purpose: "мета".to_string(),
        ..ProtocolSummaryArgs::default()
    };
    let summary = build_protocol_summary(&args);
    assert!(summary.ends_with(&format!("{DEFAULT_DETENTION_MATERIALS} серії ___ номер ___")));
}

#[test]
fn protocol_purpose_is_rendered_as_entered() {
    let mut args = ProtocolSummaryArgs {
        protocol_prepared: ProtocolPrepared::Yes,
        detention_from_date: "2024-05-01".to_string(),
        detention_from_time: "10:00".to_string(),
        detention_to_date: "2024-05-01".to_string(),
        detention_to_time: "12:00".to_string(),
        ..ProtocolSummaryArgs::default()
    };
    let blank = build_protocol_summary(&args);
    assert!(blank.contains("12 год. 00 хв. 01.05.2024 р., . Складено"));
    assert!(!blank.contains(DEFAULT_DETENTION_PURPOSE));

    args.detention_purpose = "  для доставлення до суду  ".to_string();
    assert!(build_protocol_summary(&args).contains("р., для доставлення до суду. "));
}

#[test]
fn new_form_prefills_standard_purpose() {
    let args = ProtocolSummaryArgs {
        protocol_prepared: ProtocolPrepared::Yes,
        ..ProtocolSummaryArgs::new_form()
    };
    assert_eq!(args.detention_purpose, DEFAULT_DETENTION_PURPOSE);
    assert!(build_protocol_summary(&args).contains(&format!("р., {DEFAULT_DETENTION_PURPOSE}. ")));
}

#[test]
fn parse_protocol_reference() {
    assert_eq!(
        parse_detention_protocol_value("Серія АБ № 123456"),
        ProtocolNumber {
            series: "АБ".to_string(),
            number: "123456".to_string()
        }
    );
    assert_eq!(
        parse_detention_protocol_value("серія ВАД №77").number,
        "77"
    );
}

#[test]
fn malformed_reference_parses_to_empty() {
    assert_eq!(parse_detention_protocol_value("123456"), ProtocolNumber::default());
    assert_eq!(parse_detention_protocol_value(""), ProtocolNumber::default());
}

#[test]
fn reference_helpers_invert_parser() {
    let stored = format_protocol_reference("ЕР", "0042");
    assert_eq!(stored, "Серія ЕР № 0042");
    let parsed = parse_detention_protocol_value(&stored);
    assert_eq!((parsed.series.as_str(), parsed.number.as_str()), ("ЕР", "0042"));
    assert_eq!(format_protocol_reference(" ", ""), "");
    assert_eq!(protocol_heading(&stored), "серія ЕР №0042");
    assert_eq!(protocol_heading("б/н"), "б/н");
}
