//! Seams to the systems this core does not own: record storage, the audit
//! trail and the authenticated actor.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared_types::{AppError, OfficerRef, StoredRecord, UnifiedRecord};
use uuid::Uuid;

// ── Actor ────────────────────────────────────────────────────────────

/// The authenticated operator. Permission checks happen before the core is
/// called; the id is only recorded and compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorContext {
    pub actor_id: String,
}

impl ActorContext {
    pub fn new(actor_id: impl Into<String>) -> Self {
        Self {
            actor_id: actor_id.into(),
        }
    }
}

// ── Persistence ─────────────────────────────────────────────────────

/// Field-level update written after a successful transition.
///
/// Values use the stored column encoding. `expected_stage` is the stage the
/// transition was validated against; a repository that finds a different
/// stage must reject the write with a conflict so the caller re-fetches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestigationPatch {
    pub record_id: Uuid,
    pub expected_stage: String,
    pub investigation_stage: String,
    pub status: String,
    pub officer_ids: Vec<String>,
    pub officers: Vec<OfficerRef>,
    pub deadline: Option<DateTime<Utc>>,
    pub resolution_date: Option<NaiveDate>,
    pub violation_summary: Option<String>,
    pub order_number: Option<String>,
    pub order_date: Option<NaiveDate>,
    pub conclusion_approved_at: Option<NaiveDate>,
    pub penalty_items: Option<serde_json::Value>,
    pub legacy_penalty_officer_id: Option<String>,
    pub legacy_penalty_type: Option<String>,
    pub legacy_penalty_other: Option<String>,
    pub penalty_requires_order: Option<bool>,
    pub penalty_order_number: Option<String>,
    pub penalty_order_date: Option<NaiveDate>,
    pub final_result: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub initiated_at: Option<DateTime<Utc>>,
    pub order_assigned_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl InvestigationPatch {
    /// Patch carrying every workflow-owned column of `record`.
    pub fn from_record(record: &UnifiedRecord, expected_stage: &str) -> Self {
        let row = StoredRecord::from(record);
        Self {
            record_id: row.id,
            expected_stage: expected_stage.to_string(),
            investigation_stage: row.investigation_stage.unwrap_or_default(),
            status: row.status,
            officer_ids: row.officer_ids,
            officers: row.officers,
            deadline: row.deadline,
            resolution_date: row.resolution_date,
            violation_summary: row.violation_summary,
            order_number: row.order_number,
            order_date: row.order_date,
            conclusion_approved_at: row.conclusion_approved_at,
            penalty_items: row.penalty_items,
            legacy_penalty_officer_id: row.legacy_penalty_officer_id,
            legacy_penalty_type: row.legacy_penalty_type,
            legacy_penalty_other: row.legacy_penalty_other,
            penalty_requires_order: row.penalty_requires_order,
            penalty_order_number: row.penalty_order_number,
            penalty_order_date: row.penalty_order_date,
            final_result: row.final_result,
            reviewed_at: row.reviewed_at,
            initiated_at: row.initiated_at,
            order_assigned_at: row.order_assigned_at,
            completed_at: row.completed_at,
            updated_at: row.updated_at,
        }
    }

    /// Copy the patched columns onto a stored row.
    pub fn apply_to(&self, row: &mut StoredRecord) {
        row.investigation_stage = Some(self.investigation_stage.clone());
        row.status = self.status.clone();
        row.officer_ids = self.officer_ids.clone();
        row.officers = self.officers.clone();
        row.deadline = self.deadline;
        row.resolution_date = self.resolution_date;
        row.violation_summary = self.violation_summary.clone();
        row.order_number = self.order_number.clone();
        row.order_date = self.order_date;
        row.conclusion_approved_at = self.conclusion_approved_at;
        row.penalty_items = self.penalty_items.clone();
        row.legacy_penalty_officer_id = self.legacy_penalty_officer_id.clone();
        row.legacy_penalty_type = self.legacy_penalty_type.clone();
        row.legacy_penalty_other = self.legacy_penalty_other.clone();
        row.penalty_requires_order = self.penalty_requires_order;
        row.penalty_order_number = self.penalty_order_number.clone();
        row.penalty_order_date = self.penalty_order_date;
        row.final_result = self.final_result.clone();
        row.reviewed_at = self.reviewed_at;
        row.initiated_at = self.initiated_at;
        row.order_assigned_at = self.order_assigned_at;
        row.completed_at = self.completed_at;
        row.updated_at = self.updated_at;
    }
}

/// Record storage.
pub trait RecordRepository: Send + Sync {
    /// Fetch one row, or `None` if it does not exist.
    fn get(&self, id: Uuid) -> Result<Option<StoredRecord>, AppError>;

    /// Apply a transition's field patch atomically.
    fn update_investigation(&self, patch: &InvestigationPatch) -> Result<(), AppError>;

    /// Snapshot of every listable row.
    fn query(&self) -> Result<Vec<StoredRecord>, AppError>;
}

// ── Audit ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditMetadata {
    pub old_stage: String,
    pub new_stage: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub penalty_summary: Option<String>,
}

/// One applied transition, as reported to the audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    pub actor_id: String,
    pub action: String,
    pub record_id: Uuid,
    pub metadata: AuditMetadata,
    pub occurred_at: DateTime<Utc>,
}

/// Append-only audit trail. Delivery is fire-and-forget from the core's side.
pub trait AuditSink: Send + Sync {
    fn append(&self, event: AuditEvent) -> Result<(), AppError>;
}
