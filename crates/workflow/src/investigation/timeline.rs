//! Read-only lifecycle checkpoints for the audit view.
//!
//! Always five items in process order. An item is `done` when its timestamp
//! is recorded, `current` when it is the record's present stage, `done` when
//! the process has already moved past it without a timestamp, and `pending`
//! otherwise. On the no-violation path the investigation steps never apply
//! and are reported as `skipped`, whatever their timestamps say.

use chrono::{DateTime, NaiveDate, Utc};
use shared_types::{
    FinalResult, InvestigationStage, TimelineItem, TimelineKey, TimelineStatus, UnifiedRecord,
};

use super::penalty_ledger::PenaltyLedger;

const SKIPPED_HINT: &str = "Не застосовується: порушень службової дисципліни не виявлено";

fn ua_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

fn derive_status(
    key: TimelineKey,
    at: Option<DateTime<Utc>>,
    item_is_current: bool,
    current: InvestigationStage,
) -> TimelineStatus {
    if at.is_some() {
        TimelineStatus::Done
    } else if item_is_current {
        TimelineStatus::Current
    } else if current.order() > key.position() {
        TimelineStatus::Done
    } else {
        TimelineStatus::Pending
    }
}

fn item(
    key: TimelineKey,
    label: &str,
    at: Option<DateTime<Utc>>,
    item_is_current: bool,
    current: InvestigationStage,
    hint: Option<String>,
) -> TimelineItem {
    TimelineItem {
        key,
        label: label.to_string(),
        at,
        status: derive_status(key, at, item_is_current, current),
        hint,
    }
}

fn skipped(key: TimelineKey, label: &str) -> TimelineItem {
    TimelineItem {
        key,
        label: label.to_string(),
        at: None,
        status: TimelineStatus::Skipped,
        hint: Some(SKIPPED_HINT.to_string()),
    }
}

fn final_label(record: &UnifiedRecord) -> &'static str {
    let inv = &record.investigation;
    if inv.stage == InvestigationStage::CheckCompletedNoViolation {
        "Завершено: порушень дисципліни не виявлено"
    } else if inv.stage == InvestigationStage::SrCompletedUnlawful
        || inv.final_result == Some(FinalResult::Unlawful)
    {
        "Завершено: дії неправомірні"
    } else if inv.stage == InvestigationStage::SrCompletedLawful
        || inv.final_result == Some(FinalResult::Lawful)
    {
        "Завершено: дії правомірні"
    } else {
        "Очікує завершення"
    }
}

fn final_hint(record: &UnifiedRecord) -> Option<String> {
    let inv = &record.investigation;
    let mut parts = Vec::new();

    let summary = PenaltyLedger::from_record(record).summary(record);
    if !summary.is_empty() {
        parts.push(summary);
    }
    if let Some(approved) = inv.conclusion_approved_at {
        parts.push(format!("Висновок затверджено {}", ua_date(approved)));
    }
    if let Some(number) = inv
        .penalty_order_number
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
    {
        let mut reference = format!("Наказ про стягнення № {number}");
        if let Some(date) = inv.penalty_order_date {
            reference.push_str(&format!(" від {}", ua_date(date)));
        }
        parts.push(reference);
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" • "))
    }
}

fn order_hint(record: &UnifiedRecord) -> Option<String> {
    let inv = &record.investigation;
    let number = inv.order_number.as_deref().map(str::trim).filter(|n| !n.is_empty())?;
    Some(match inv.order_date {
        Some(date) => format!("Наказ № {number} від {}", ua_date(date)),
        None => format!("Наказ № {number}"),
    })
}

/// Derive the checkpoint list for an investigation record.
pub fn build_timeline(record: &UnifiedRecord) -> Vec<TimelineItem> {
    let inv = &record.investigation;
    let current = inv.stage;
    let no_violation = current == InvestigationStage::CheckCompletedNoViolation;

    let registered = TimelineItem {
        key: TimelineKey::Registered,
        label: "Зареєстровано".to_string(),
        at: Some(record.created_at),
        status: TimelineStatus::Done,
        hint: None,
    };

    let review = item(
        TimelineKey::Review,
        "Розгляд рапорту/доповідної",
        inv.reviewed_at,
        current == InvestigationStage::ReportReview,
        current,
        inv.document_type.map(|d| d.label().to_string()),
    );

    let (initiate, order) = if no_violation {
        (
            skipped(TimelineKey::Initiate, "Ініційовано службове розслідування"),
            skipped(TimelineKey::Order, "Призначено службове розслідування"),
        )
    } else {
        (
            item(
                TimelineKey::Initiate,
                "Ініційовано службове розслідування",
                inv.initiated_at,
                current == InvestigationStage::SrInitiated,
                current,
                None,
            ),
            item(
                TimelineKey::Order,
                "Призначено службове розслідування",
                inv.order_assigned_at,
                current == InvestigationStage::SrOrderAssigned,
                current,
                order_hint(record),
            ),
        )
    };

    let finished = item(
        TimelineKey::Final,
        final_label(record),
        inv.completed_at,
        current.is_terminal(),
        current,
        final_hint(record),
    );

    vec![registered, review, initiate, order, finished]
}
