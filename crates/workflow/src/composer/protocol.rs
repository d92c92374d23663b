//! Detention-protocol summary and reference helpers.

use regex::Regex;
use shared_types::{
    ProtocolNumber, ProtocolPrepared, ProtocolSummaryArgs, DEFAULT_DETENTION_MATERIALS,
};
use std::sync::OnceLock;

use super::format::{format_date_ua, format_time_ua};

const PLACEHOLDER: &str = "___";

fn reference_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"(?i)^Серія\s+(.+?)\s+№\s*(.+)$").ok())
        .as_ref()
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}

/// One-paragraph summary of whether and how a detention protocol was drawn up.
pub fn build_protocol_summary(args: &ProtocolSummaryArgs) -> String {
    match args.protocol_prepared {
        ProtocolPrepared::No => format!(
            "Не складався. Причина: {}.",
            or_default(&args.protocol_no_reason, "не вказано")
        ),
        ProtocolPrepared::Yes => format!(
            "Складався, відповідно до статей 261, 262, 263 КУпАП, затриманий з {} {} р. до {} {} р., {}. {} серії {} номер {}",
            format_time_ua(&args.detention_from_time),
            format_date_ua(&args.detention_from_date),
            format_time_ua(&args.detention_to_time),
            format_date_ua(&args.detention_to_date),
            args.detention_purpose.trim(),
            or_default(&args.detention_materials, DEFAULT_DETENTION_MATERIALS),
            or_default(&args.protocol_series, PLACEHOLDER),
            or_default(&args.protocol_number, PLACEHOLDER),
        ),
        ProtocolPrepared::Unset => String::new(),
    }
}

/// Split a stored `Серія X № Y` reference back into series and number.
/// Input that does not match yields two empty strings.
pub fn parse_detention_protocol_value(value: &str) -> ProtocolNumber {
    match reference_pattern().and_then(|re| re.captures(value.trim())) {
        Some(caps) => ProtocolNumber {
            series: caps.get(1).map_or("", |m| m.as_str()).to_string(),
            number: caps.get(2).map_or("", |m| m.as_str()).trim().to_string(),
        },
        None => ProtocolNumber::default(),
    }
}

/// The stored form of a protocol reference. Empty when both parts are blank.
pub fn format_protocol_reference(series: &str, number: &str) -> String {
    let (series, number) = (series.trim(), number.trim());
    if series.is_empty() && number.is_empty() {
        return String::new();
    }
    format!(
        "Серія {} № {}",
        or_default(series, PLACEHOLDER),
        or_default(number, PLACEHOLDER)
    )
}

/// Heading used on printed documents: `серія X №Y`, or the raw value when it
/// is not a structured reference.
pub fn protocol_heading(value: &str) -> String {
    let parsed = parse_detention_protocol_value(value);
    if parsed.series.is_empty() && parsed.number.is_empty() {
        value.trim().to_string()
    } else {
        format!("серія {} №{}", parsed.series, parsed.number)
    }
}
