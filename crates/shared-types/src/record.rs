use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::investigation::{DocumentType, FinalResult, InvestigationStage};
use crate::penalty::{LegacyPenalty, PenaltyEntry};

// ── Constants ───────────────────────────────────────────────────────

/// Sentinel prefix marking a birth date stored in the address column.
pub const BIRTH_DATE_PREFIX: &str = "DOB:";

// ── Enums ───────────────────────────────────────────────────────────

/// Closed set of administrative record kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordKind {
    Eo,
    Zvern,
    Application,
    DetentionProtocol,
    ServiceInvestigation,
    Other,
}

impl RecordKind {
    pub const ALL: [RecordKind; 6] = [
        RecordKind::Eo,
        RecordKind::Zvern,
        RecordKind::Application,
        RecordKind::DetentionProtocol,
        RecordKind::ServiceInvestigation,
        RecordKind::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Eo => "EO",
            RecordKind::Zvern => "ZVERN",
            RecordKind::Application => "APPLICATION",
            RecordKind::DetentionProtocol => "DETENTION_PROTOCOL",
            RecordKind::ServiceInvestigation => "SERVICE_INVESTIGATION",
            RecordKind::Other => "OTHER",
        }
    }

    /// Parse a stored tag, ignoring case and surrounding whitespace.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let upper = tag.trim().to_uppercase();
        Self::ALL.into_iter().find(|k| k.as_str() == upper)
    }

    /// Operator-facing caption.
    pub fn label(self) -> &'static str {
        match self {
            RecordKind::Eo => "ЄО",
            RecordKind::Zvern => "Звернення",
            RecordKind::Application => "Рапорт",
            RecordKind::DetentionProtocol => "Протокол затримання",
            RecordKind::ServiceInvestigation => "Службове розслідування",
            RecordKind::Other => "Інше",
        }
    }

    /// Kinds that reuse the address column for the subject's birth date.
    pub fn is_application_like(self) -> bool {
        matches!(self, RecordKind::Application | RecordKind::DetentionProtocol)
    }
}

/// Processing status of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordStatus {
    #[default]
    Pending,
    InProgress,
    Processed,
}

impl RecordStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordStatus::Pending => "PENDING",
            RecordStatus::InProgress => "IN_PROGRESS",
            RecordStatus::Processed => "PROCESSED",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_uppercase().as_str() {
            "PENDING" => Some(RecordStatus::Pending),
            "IN_PROGRESS" => Some(RecordStatus::InProgress),
            "PROCESSED" => Some(RecordStatus::Processed),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RecordStatus::Pending => "Очікує",
            RecordStatus::InProgress => "В роботі",
            RecordStatus::Processed => "Виконано",
        }
    }
}

/// The address column, decoded once at the read boundary.
///
/// Application-like records store the subject's birth date there behind
/// [`BIRTH_DATE_PREFIX`]; every other kind stores a free-text address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AddressOrDob {
    Address(String),
    BirthDate(NaiveDate),
}

impl AddressOrDob {
    /// Encode back into the stored column shape.
    pub fn encode(&self) -> String {
        match self {
            AddressOrDob::Address(s) => s.clone(),
            AddressOrDob::BirthDate(d) => format!("{BIRTH_DATE_PREFIX}{}", d.format("%Y-%m-%d")),
        }
    }

    /// Human-readable form: the address as-is, or the birth date as dd.mm.yyyy.
    pub fn display(&self) -> String {
        match self {
            AddressOrDob::Address(s) => s.clone(),
            AddressOrDob::BirthDate(d) => d.format("%d.%m.%Y").to_string(),
        }
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        match self {
            AddressOrDob::BirthDate(d) => Some(*d),
            AddressOrDob::Address(_) => None,
        }
    }
}

// ── Joined references ───────────────────────────────────────────────

/// An officer tagged on a record, as joined by the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct OfficerRef {
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub badge_number: Option<String>,
}

impl OfficerRef {
    /// "Last First", falling back to the badge number, then the id.
    pub fn display_name(&self) -> String {
        let name = join_name(self.last_name.as_deref(), self.first_name.as_deref());
        if !name.is_empty() {
            return name;
        }
        match self.badge_number.as_deref().map(str::trim) {
            Some(badge) if !badge.is_empty() => badge.to_string(),
            _ => self.id.clone(),
        }
    }
}

/// The inspector a record is assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct InspectorRef {
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl InspectorRef {
    pub fn display_name(&self) -> String {
        let name = join_name(self.last_name.as_deref(), self.first_name.as_deref());
        if !name.is_empty() {
            return name;
        }
        match self.username.as_deref().map(str::trim) {
            Some(u) if !u.is_empty() => u.to_string(),
            _ => "Призначено".to_string(),
        }
    }
}

fn join_name(last: Option<&str>, first: Option<&str>) -> String {
    [last, first]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

// ── Typed record ────────────────────────────────────────────────────

/// Investigation-only fields. Meaningful when the record kind is
/// [`RecordKind::ServiceInvestigation`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct InvestigationFields {
    pub stage: InvestigationStage,
    #[serde(default)]
    pub document_type: Option<DocumentType>,
    #[serde(default)]
    pub violation_summary: Option<String>,
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default)]
    pub order_date: Option<NaiveDate>,
    #[serde(default)]
    pub conclusion_approved_at: Option<NaiveDate>,
    #[serde(default)]
    pub penalty_items: Vec<PenaltyEntry>,
    #[serde(default)]
    pub legacy_penalty: LegacyPenalty,
    /// Tri-state: `None` means the flag was never recorded.
    #[serde(default)]
    pub penalty_requires_order: Option<bool>,
    #[serde(default)]
    pub penalty_order_number: Option<String>,
    #[serde(default)]
    pub penalty_order_date: Option<NaiveDate>,
    #[serde(default)]
    pub final_result: Option<FinalResult>,
    #[serde(default)]
    pub reviewed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub initiated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub order_assigned_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

/// One administrative case, with every ambiguous column already decoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UnifiedRecord {
    pub id: Uuid,
    pub record_type: RecordKind,
    pub status: RecordStatus,
    pub external_number: String,
    pub case_date: Option<DateTime<Utc>>,
    pub subject_name: Option<String>,
    pub address_or_dob: Option<AddressOrDob>,
    pub district: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub resolution: Option<String>,
    pub resolution_date: Option<NaiveDate>,
    pub assigned_user_id: Option<String>,
    #[serde(default)]
    pub assigned_user: Option<InspectorRef>,
    #[serde(default)]
    pub officer_ids: BTreeSet<String>,
    #[serde(default)]
    pub officers: Vec<OfficerRef>,
    #[serde(default)]
    pub concerns_officers: bool,
    #[serde(default)]
    pub investigation: InvestigationFields,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UnifiedRecord {
    /// A fresh record of the given kind with every optional field empty.
    pub fn new(id: Uuid, record_type: RecordKind, external_number: &str, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            record_type,
            status: RecordStatus::Pending,
            external_number: external_number.to_string(),
            case_date: None,
            subject_name: None,
            address_or_dob: None,
            district: None,
            category: None,
            description: None,
            deadline: None,
            resolution: None,
            resolution_date: None,
            assigned_user_id: None,
            assigned_user: None,
            officer_ids: BTreeSet::new(),
            officers: Vec::new(),
            concerns_officers: false,
            investigation: InvestigationFields::default(),
            created_at,
            updated_at: created_at,
        }
    }

    /// Display name of a tagged officer, falling back to the raw id.
    pub fn officer_display_name(&self, officer_id: &str) -> String {
        self.officers
            .iter()
            .find(|o| o.id == officer_id)
            .map(OfficerRef::display_name)
            .unwrap_or_else(|| officer_id.to_string())
    }

    /// "Не призначено" when nobody is assigned.
    pub fn inspector_name(&self) -> String {
        match (&self.assigned_user, &self.assigned_user_id) {
            (Some(user), _) => user.display_name(),
            (None, Some(_)) => "Призначено".to_string(),
            (None, None) => "Не призначено".to_string(),
        }
    }
}

// ── Persisted row ───────────────────────────────────────────────────

/// Row shape exchanged with the persistence layer. Columns keep their raw
/// storage encoding; decoding into [`UnifiedRecord`] happens once at read time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: Uuid,
    /// Explicit kind tag. Missing on rows that predate the column.
    #[serde(default)]
    pub record_type: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub external_number: Option<String>,
    #[serde(default)]
    pub case_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub subject_name: Option<String>,
    /// Free-text address, or `DOB:<iso date>` for application-like kinds.
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub resolution: Option<String>,
    #[serde(default)]
    pub resolution_date: Option<NaiveDate>,
    #[serde(default)]
    pub assigned_user_id: Option<String>,
    #[serde(default)]
    pub assigned_user: Option<InspectorRef>,
    #[serde(default)]
    pub officer_ids: Vec<String>,
    #[serde(default)]
    pub officers: Vec<OfficerRef>,
    #[serde(default)]
    pub concerns_officers: bool,
    #[serde(default)]
    pub investigation_stage: Option<String>,
    #[serde(default)]
    pub document_type: Option<String>,
    #[serde(default)]
    pub violation_summary: Option<String>,
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default)]
    pub order_date: Option<NaiveDate>,
    #[serde(default)]
    pub conclusion_approved_at: Option<NaiveDate>,
    /// Serialized penalty ledger (JSON array).
    #[serde(default)]
    pub penalty_items: Option<serde_json::Value>,
    #[serde(default)]
    pub legacy_penalty_officer_id: Option<String>,
    #[serde(default)]
    pub legacy_penalty_type: Option<String>,
    #[serde(default)]
    pub legacy_penalty_other: Option<String>,
    #[serde(default)]
    pub penalty_requires_order: Option<bool>,
    #[serde(default)]
    pub penalty_order_number: Option<String>,
    #[serde(default)]
    pub penalty_order_date: Option<NaiveDate>,
    #[serde(default)]
    pub final_result: Option<String>,
    #[serde(default)]
    pub reviewed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub initiated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub order_assigned_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
}

impl From<&UnifiedRecord> for StoredRecord {
    fn from(r: &UnifiedRecord) -> Self {
        let inv = &r.investigation;
        Self {
            id: r.id,
            record_type: Some(r.record_type.as_str().to_string()),
            status: r.status.as_str().to_string(),
            external_number: Some(r.external_number.clone()),
            case_date: r.case_date,
            subject_name: r.subject_name.clone(),
            address: r.address_or_dob.as_ref().map(AddressOrDob::encode),
            district: r.district.clone(),
            category: r.category.clone(),
            description: r.description.clone(),
            deadline: r.deadline,
            resolution: r.resolution.clone(),
            resolution_date: r.resolution_date,
            assigned_user_id: r.assigned_user_id.clone(),
            assigned_user: r.assigned_user.clone(),
            officer_ids: r.officer_ids.iter().cloned().collect(),
            officers: r.officers.clone(),
            concerns_officers: r.concerns_officers,
            investigation_stage: Some(inv.stage.as_str().to_string()),
            document_type: inv.document_type.map(|d| d.as_str().to_string()),
            violation_summary: inv.violation_summary.clone(),
            order_number: inv.order_number.clone(),
            order_date: inv.order_date,
            conclusion_approved_at: inv.conclusion_approved_at,
            penalty_items: if inv.penalty_items.is_empty() {
                None
            } else {
                serde_json::to_value(&inv.penalty_items).ok()
            },
            legacy_penalty_officer_id: inv.legacy_penalty.officer_id.clone(),
            legacy_penalty_type: inv.legacy_penalty.penalty_type.clone(),
            legacy_penalty_other: inv.legacy_penalty.penalty_other.clone(),
            penalty_requires_order: inv.penalty_requires_order,
            penalty_order_number: inv.penalty_order_number.clone(),
            penalty_order_date: inv.penalty_order_date,
            final_result: inv.final_result.map(|f| f.as_str().to_string()),
            reviewed_at: inv.reviewed_at,
            initiated_at: inv.initiated_at,
            order_assigned_at: inv.order_assigned_at,
            completed_at: inv.completed_at,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}
