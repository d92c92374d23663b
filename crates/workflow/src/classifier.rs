//! Record classification and read-boundary decoding.
//!
//! Rows reach the core in their stored shape ([`StoredRecord`]): a kind tag
//! that older rows lack, an address column that doubles as a birth-date
//! slot, a free-form stage string and a JSON penalty list. Everything here is
//! total. Malformed legacy payloads are logged and replaced by a safe value.

use chrono::NaiveDate;
use shared_types::{
    AddressOrDob, DocumentType, FinalResult, InvestigationFields, InvestigationStage,
    LegacyPenalty, PenaltyEntry, RecordKind, RecordStatus, StoredRecord, UnifiedRecord,
    BIRTH_DATE_PREFIX,
};

/// Reference-number prefixes of rows written before the explicit tag column.
const PREFIX_RULES: &[(&str, RecordKind)] = &[
    ("APP-", RecordKind::Application),
    ("DET-", RecordKind::DetentionProtocol),
    ("DTP-", RecordKind::DetentionProtocol),
    ("ZV-", RecordKind::Zvern),
    ("ZVERN-", RecordKind::Zvern),
];

/// Map a stored tag and reference number to a record kind.
///
/// A recognised explicit tag wins. A blank or unknown tag falls through to
/// the prefix convention on the reference number (case-insensitive); any
/// other non-empty number is an EO registration and an empty one is OTHER.
pub fn classify(explicit_tag: Option<&str>, external_number: Option<&str>) -> RecordKind {
    if let Some(kind) = explicit_tag.and_then(RecordKind::from_tag) {
        return kind;
    }

    let number = external_number.map(str::trim).unwrap_or_default();
    if number.is_empty() {
        return RecordKind::Other;
    }

    let upper = number.to_uppercase();
    PREFIX_RULES
        .iter()
        .find(|(prefix, _)| upper.starts_with(prefix))
        .map(|(_, kind)| *kind)
        .unwrap_or(RecordKind::Eo)
}

/// Decode the dual-use address column for a record of the given kind.
///
/// Only application-like kinds carry a birth date. An unparseable `DOB:`
/// payload is kept verbatim as an address so re-encoding loses nothing.
pub fn decode_address_or_dob(kind: RecordKind, raw: Option<&str>) -> Option<AddressOrDob> {
    let raw = raw?;
    if raw.trim().is_empty() {
        return None;
    }
    if !kind.is_application_like() {
        return Some(AddressOrDob::Address(raw.to_string()));
    }
    match raw.strip_prefix(BIRTH_DATE_PREFIX) {
        Some(payload) => match NaiveDate::parse_from_str(payload.trim(), "%Y-%m-%d") {
            Ok(date) => Some(AddressOrDob::BirthDate(date)),
            Err(e) => {
                tracing::warn!(payload = %raw, error = %e, "malformed birth date in address column");
                Some(AddressOrDob::Address(raw.to_string()))
            }
        },
        None => Some(AddressOrDob::Address(raw.to_string())),
    }
}

/// Parse a stored stage. Missing or unknown values start at report review.
pub fn decode_stage(raw: Option<&str>) -> InvestigationStage {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => InvestigationStage::ReportReview,
        Some(tag) => InvestigationStage::from_tag(tag).unwrap_or_else(|| {
            tracing::warn!(stage = %tag, "unknown investigation stage, treating as report review");
            InvestigationStage::ReportReview
        }),
    }
}

/// Parse the serialized penalty list.
///
/// Accepts a JSON array or a JSON string holding one (older writers
/// double-encoded it). Anything unreadable becomes an empty list so the
/// ledger falls back to the legacy columns.
pub fn decode_penalty_items(raw: Option<&serde_json::Value>) -> Vec<PenaltyEntry> {
    let value = match raw {
        None | Some(serde_json::Value::Null) => return Vec::new(),
        Some(serde_json::Value::String(s)) if s.trim().is_empty() => return Vec::new(),
        Some(serde_json::Value::String(s)) => match serde_json::from_str(s) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "penalty list is not valid JSON");
                return Vec::new();
            }
        },
        Some(v) => v.clone(),
    };
    match serde_json::from_value::<Vec<PenaltyEntry>>(value) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(error = %e, "penalty list has an unexpected shape");
            Vec::new()
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Decode one stored row into the typed record. Classification happens here
/// and nowhere else; the stored tag is never trusted on its own.
pub fn normalize_record(row: &StoredRecord) -> UnifiedRecord {
    let kind = classify(row.record_type.as_deref(), row.external_number.as_deref());

    let status = RecordStatus::from_tag(&row.status).unwrap_or_else(|| {
        if !row.status.trim().is_empty() {
            tracing::warn!(record_id = %row.id, status = %row.status, "unknown record status");
        }
        RecordStatus::Pending
    });

    let investigation = InvestigationFields {
        stage: decode_stage(row.investigation_stage.as_deref()),
        document_type: row.document_type.as_deref().and_then(DocumentType::from_tag),
        violation_summary: row.violation_summary.clone(),
        order_number: row.order_number.clone(),
        order_date: row.order_date,
        conclusion_approved_at: row.conclusion_approved_at,
        penalty_items: decode_penalty_items(row.penalty_items.as_ref()),
        legacy_penalty: LegacyPenalty {
            officer_id: non_blank(&row.legacy_penalty_officer_id),
            penalty_type: non_blank(&row.legacy_penalty_type),
            penalty_other: non_blank(&row.legacy_penalty_other),
        },
        penalty_requires_order: row.penalty_requires_order,
        penalty_order_number: row.penalty_order_number.clone(),
        penalty_order_date: row.penalty_order_date,
        final_result: row.final_result.as_deref().and_then(FinalResult::from_tag),
        reviewed_at: row.reviewed_at,
        initiated_at: row.initiated_at,
        order_assigned_at: row.order_assigned_at,
        completed_at: row.completed_at,
    };

    UnifiedRecord {
        id: row.id,
        record_type: kind,
        status,
        external_number: row.external_number.clone().unwrap_or_default(),
        case_date: row.case_date,
        subject_name: row.subject_name.clone(),
        address_or_dob: decode_address_or_dob(kind, row.address.as_deref()),
        district: row.district.clone(),
        category: row.category.clone(),
        description: row.description.clone(),
        deadline: row.deadline,
        resolution: row.resolution.clone(),
        resolution_date: row.resolution_date,
        assigned_user_id: non_blank(&row.assigned_user_id),
        assigned_user: row.assigned_user.clone(),
        officer_ids: row
            .officer_ids
            .iter()
            .map(|id| id.trim())
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect(),
        officers: row.officers.clone(),
        concerns_officers: row.concerns_officers,
        investigation,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

/// Stored tag of a retired record kind whose rows are no longer listed.
const RETIRED_RAPORT_TAG: &str = "RAPORT";

/// Decode a fetched snapshot, dropping rows of the retired report kind.
pub fn normalize_records(rows: &[StoredRecord]) -> Vec<UnifiedRecord> {
    rows.iter()
        .filter(|row| {
            let retired = row
                .record_type
                .as_deref()
                .is_some_and(|tag| tag.trim().eq_ignore_ascii_case(RETIRED_RAPORT_TAG));
            if retired {
                tracing::debug!(record_id = %row.id, "skipping retired report row");
            }
            !retired
        })
        .map(normalize_record)
        .collect()
}
