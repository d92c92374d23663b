//! Orchestration of one investigation action: fetch, transition, persist,
//! audit. Also the read-side views built on the same fetch path.

use chrono::{DateTime, Utc};
use shared_types::{
    AppError, RecordFilters, RecordStats, ServiceAction, TimelineItem, UnifiedRecord,
    WorkflowSettings,
};
use uuid::Uuid;

use crate::classifier::{normalize_record, normalize_records};
use crate::collaborators::{
    ActorContext, AuditEvent, AuditMetadata, AuditSink, InvestigationPatch, RecordRepository,
};
use crate::investigation::{build_timeline, PenaltyLedger, StageMachine};
use crate::query;

pub struct InvestigationService<R, A> {
    repo: R,
    audit: A,
    machine: StageMachine,
    due_soon_hours: i64,
}

impl<R: RecordRepository, A: AuditSink> InvestigationService<R, A> {
    pub fn new(repo: R, audit: A, settings: &WorkflowSettings) -> Self {
        Self {
            repo,
            audit,
            machine: StageMachine::from_settings(settings),
            due_soon_hours: settings.due_soon_hours,
        }
    }

    /// Service configured from `config.toml` (see [`crate::config::load_settings`]).
    pub fn from_config(repo: R, audit: A) -> Self {
        Self::new(repo, audit, crate::config::load_settings())
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn audit_sink(&self) -> &A {
        &self.audit
    }

    fn fetch(&self, record_id: Uuid) -> Result<UnifiedRecord, AppError> {
        let row = self
            .repo
            .get(record_id)?
            .ok_or_else(|| AppError::not_found(format!("Record {} not found", record_id)))?;
        Ok(normalize_record(&row))
    }

    /// Apply one action to the latest stored state of a record.
    ///
    /// Nothing is written unless the transition validates. The audit event
    /// is sent after the write; a failing sink is logged and ignored.
    #[tracing::instrument(skip(self, actor, action), fields(actor = %actor.actor_id, action = action.kind().as_str()))]
    pub fn process(
        &self,
        actor: &ActorContext,
        record_id: Uuid,
        action: &ServiceAction,
        now: DateTime<Utc>,
    ) -> Result<UnifiedRecord, AppError> {
        let record = self.fetch(record_id)?;

        let transition = self.machine.apply(&record, action, now).map_err(|e| {
            tracing::info!(error = %e, "transition rejected");
            AppError::from(e)
        })?;

        let patch = InvestigationPatch::from_record(&transition.record, transition.from.as_str());
        self.repo.update_investigation(&patch)?;

        tracing::info!(
            record_id = %record_id,
            from = transition.from.as_str(),
            to = transition.to.as_str(),
            "investigation stage changed"
        );

        let ledger = PenaltyLedger::from_record(&transition.record);
        let summary = ledger.summary(&transition.record);
        let event = AuditEvent {
            actor_id: actor.actor_id.clone(),
            action: transition.action.as_str().to_string(),
            record_id,
            metadata: AuditMetadata {
                old_stage: transition.from.as_str().to_string(),
                new_stage: transition.to.as_str().to_string(),
                penalty_summary: if summary.is_empty() { None } else { Some(summary) },
            },
            occurred_at: now,
        };
        if let Err(e) = self.audit.append(event) {
            tracing::warn!(error = %e, "failed to append audit event");
        }

        Ok(transition.record)
    }

    pub fn timeline(&self, record_id: Uuid) -> Result<Vec<TimelineItem>, AppError> {
        Ok(build_timeline(&self.fetch(record_id)?))
    }

    pub fn ledger(&self, record_id: Uuid) -> Result<PenaltyLedger, AppError> {
        Ok(PenaltyLedger::from_record(&self.fetch(record_id)?))
    }

    /// Filtered and sorted record list.
    pub fn list(&self, filters: &RecordFilters, now: DateTime<Utc>) -> Result<Vec<UnifiedRecord>, AppError> {
        let records = normalize_records(&self.repo.query()?);
        Ok(query::filter_records(&records, filters, now))
    }

    pub fn stats(&self, now: DateTime<Utc>) -> Result<RecordStats, AppError> {
        let records = normalize_records(&self.repo.query()?);
        Ok(query::record_stats(&records, now, self.due_soon_hours))
    }

    pub fn due_soon(&self, now: DateTime<Utc>) -> Result<Vec<UnifiedRecord>, AppError> {
        let records = normalize_records(&self.repo.query()?);
        Ok(query::due_soon_records(&records, now, self.due_soon_hours))
    }
}
