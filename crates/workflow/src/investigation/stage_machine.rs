//! Service-investigation stage machine.
//!
//! ```text
//! REPORT_REVIEW ──INITIATE_SR──▶ SR_INITIATED ──SET_ORDER──▶ SR_ORDER_ASSIGNED
//!       │                                                     │        │
//! CLOSE_NO_VIOLATION                               COMPLETE_LAWFUL  COMPLETE_UNLAWFUL
//!       ▼                                                     ▼        ▼
//! CHECK_COMPLETED_NO_VIOLATION                  SR_COMPLETED_LAWFUL  SR_COMPLETED_UNLAWFUL
//! ```
//!
//! [`StageMachine::apply`] validates against the stage of the record it is
//! given, never a cached one, and builds the successor on a copy. On error
//! the caller's record is untouched and nothing is returned to persist.

use chrono::{DateTime, Days, NaiveDate, Utc};
use shared_types::{
    allowed_actions, FinalResult, InvestigationStage, LegacyPenalty, OfficerRef,
    OrderAssignment, RecordKind, RecordStatus, ServiceAction, ServiceActionKind, UnifiedRecord,
    UnlawfulConclusion, WorkflowError, WorkflowSettings,
};

use super::penalty_ledger::PenaltyLedger;

/// Outcome of a successful transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub from: InvestigationStage,
    pub to: InvestigationStage,
    pub action: ServiceActionKind,
    /// The record with every effect of the transition applied.
    pub record: UnifiedRecord,
}

/// Whether `action` may be submitted while a record sits in `stage`.
pub fn is_allowed(stage: InvestigationStage, action: ServiceActionKind) -> bool {
    allowed_actions(stage).contains(&action)
}

/// Stage the action leads to. Only meaningful for allowed pairs.
pub fn target_stage(action: ServiceActionKind) -> InvestigationStage {
    match action {
        ServiceActionKind::CloseNoViolation => InvestigationStage::CheckCompletedNoViolation,
        ServiceActionKind::InitiateSr => InvestigationStage::SrInitiated,
        ServiceActionKind::SetOrder => InvestigationStage::SrOrderAssigned,
        ServiceActionKind::CompleteLawful => InvestigationStage::SrCompletedLawful,
        ServiceActionKind::CompleteUnlawful => InvestigationStage::SrCompletedUnlawful,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageMachine {
    investigation_term_days: i64,
}

impl Default for StageMachine {
    fn default() -> Self {
        Self::from_settings(&WorkflowSettings::default())
    }
}

impl StageMachine {
    pub fn new(investigation_term_days: i64) -> Self {
        Self {
            investigation_term_days: investigation_term_days.max(0),
        }
    }

    pub fn from_settings(settings: &WorkflowSettings) -> Self {
        Self::new(settings.investigation_term_days)
    }

    pub fn investigation_term_days(&self) -> i64 {
        self.investigation_term_days
    }

    /// Deadline for an investigation appointed on `order_date`: the end of
    /// the last day of the term.
    pub fn investigation_deadline(&self, order_date: NaiveDate) -> Option<DateTime<Utc>> {
        order_date
            .checked_add_days(Days::new(self.investigation_term_days as u64))
            .and_then(|d| d.and_hms_opt(23, 59, 59))
            .map(|dt| dt.and_utc())
    }

    /// Apply one operator action to a record.
    pub fn apply(
        &self,
        record: &UnifiedRecord,
        action: &ServiceAction,
        now: DateTime<Utc>,
    ) -> Result<Transition, WorkflowError> {
        if record.record_type != RecordKind::ServiceInvestigation {
            return Err(WorkflowError::NotAnInvestigation {
                kind: record.record_type,
            });
        }

        let from = record.investigation.stage;
        let kind = action.kind();
        if !is_allowed(from, kind) {
            return Err(WorkflowError::InvalidTransition {
                stage: from,
                action: kind,
            });
        }

        let mut next = record.clone();
        match action {
            ServiceAction::CloseNoViolation => close_no_violation(&mut next, now),
            ServiceAction::InitiateSr => initiate(&mut next, now),
            ServiceAction::SetOrder(order) => self.set_order(&mut next, order, now)?,
            ServiceAction::CompleteLawful => complete_lawful(&mut next, now),
            ServiceAction::CompleteUnlawful(conclusion) => {
                complete_unlawful(&mut next, conclusion, now)?
            }
        }

        let to = target_stage(kind);
        next.investigation.stage = to;
        next.updated_at = now;

        Ok(Transition {
            from,
            to,
            action: kind,
            record: next,
        })
    }

    fn set_order(
        &self,
        record: &mut UnifiedRecord,
        order: &OrderAssignment,
        now: DateTime<Utc>,
    ) -> Result<(), WorkflowError> {
        let stage = record.investigation.stage;
        let number = order.order_number.trim();
        if number.is_empty() {
            return Err(WorkflowError::missing("order_number", stage));
        }
        let order_date = order
            .order_date
            .ok_or_else(|| WorkflowError::missing("order_date", stage))?;

        let inv = &mut record.investigation;
        inv.order_number = Some(number.to_string());
        inv.order_date = Some(order_date);
        inv.order_assigned_at = Some(now);
        record.deadline = self.investigation_deadline(order_date);
        record.status = RecordStatus::InProgress;
        Ok(())
    }
}

fn stamp_review(record: &mut UnifiedRecord, now: DateTime<Utc>) {
    if record.investigation.reviewed_at.is_none() {
        record.investigation.reviewed_at = Some(now);
    }
}

fn finish(record: &mut UnifiedRecord, result: Option<FinalResult>, now: DateTime<Utc>) {
    record.investigation.final_result = result;
    record.investigation.completed_at = Some(now);
    record.status = RecordStatus::Processed;
    record.resolution_date = Some(now.date_naive());
}

fn close_no_violation(record: &mut UnifiedRecord, now: DateTime<Utc>) {
    stamp_review(record, now);
    finish(record, None, now);
}

fn initiate(record: &mut UnifiedRecord, now: DateTime<Utc>) {
    stamp_review(record, now);
    record.investigation.initiated_at = Some(now);
    record.status = RecordStatus::InProgress;
}

fn complete_lawful(record: &mut UnifiedRecord, now: DateTime<Utc>) {
    finish(record, Some(FinalResult::Lawful), now);
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Add officers tagged on the completion form. Known officers keep their
/// existing reference; blank ids are ignored.
fn tag_officers(record: &mut UnifiedRecord, tagged: &[OfficerRef]) {
    for officer in tagged {
        let id = officer.id.trim();
        if id.is_empty() || !record.officer_ids.insert(id.to_string()) {
            continue;
        }
        if !record.officers.iter().any(|o| o.id == id) {
            record.officers.push(OfficerRef {
                id: id.to_string(),
                ..officer.clone()
            });
        }
    }
}

fn complete_unlawful(
    record: &mut UnifiedRecord,
    conclusion: &UnlawfulConclusion,
    now: DateTime<Utc>,
) -> Result<(), WorkflowError> {
    let stage = record.investigation.stage;
    let approved_at = conclusion
        .conclusion_approved_at
        .ok_or_else(|| WorkflowError::missing("conclusion_approved_at", stage))?;

    tag_officers(record, &conclusion.tagged_officers);

    let mut ledger = PenaltyLedger::new();
    for input in &conclusion.penalties {
        let officer_id = input.officer_id.trim();
        if !record.officer_ids.contains(officer_id) {
            return Err(WorkflowError::OfficerNotTagged {
                officer_id: officer_id.to_string(),
            });
        }
        ledger.upsert_entry(
            officer_id,
            input.decision_type,
            input.penalty_text.as_deref(),
            input.penalty_other.as_deref(),
        );
    }

    let persisted = ledger.to_persisted_list();
    let requires_order = persisted.iter().any(|e| e.decision_type.requires_order());

    let (order_number, order_date) = if requires_order {
        let number = non_blank(conclusion.penalty_order_number.as_deref())
            .ok_or_else(|| WorkflowError::missing("penalty_order_number", stage))?;
        let date = conclusion
            .penalty_order_date
            .ok_or_else(|| WorkflowError::missing("penalty_order_date", stage))?;
        (Some(number), Some(date))
    } else {
        (None, None)
    };

    let inv = &mut record.investigation;
    inv.conclusion_approved_at = Some(approved_at);
    if let Some(summary) = non_blank(conclusion.violation_summary.as_deref()) {
        inv.violation_summary = Some(summary);
    }
    inv.legacy_penalty = persisted
        .first()
        .map(|first| LegacyPenalty {
            officer_id: Some(first.officer_id.clone()),
            penalty_type: Some(first.penalty_text.clone()),
            penalty_other: first.penalty_other_text.clone(),
        })
        .unwrap_or_default();
    inv.penalty_items = persisted;
    inv.penalty_requires_order = Some(requires_order);
    inv.penalty_order_number = order_number;
    inv.penalty_order_date = order_date;

    finish(record, Some(FinalResult::Unlawful), now);
    Ok(())
}
