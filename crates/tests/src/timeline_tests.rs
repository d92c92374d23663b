use pretty_assertions::assert_eq;
use shared_types::{
    DecisionType, DocumentType, FinalResult, InvestigationStage, TimelineItem, TimelineKey,
    TimelineStatus,
};
use workflow::investigation::{build_timeline, PenaltyLedger};

use crate::common::{date, investigation, ts};

fn statuses(items: &[TimelineItem]) -> Vec<TimelineStatus> {
    items.iter().map(|i| i.status).collect()
}

#[test]
fn always_five_items_in_order() {
    let items = build_timeline(&investigation(InvestigationStage::ReportReview));
    let keys: Vec<TimelineKey> = items.iter().map(|i| i.key).collect();
    assert_eq!(
        keys,
        vec![
            TimelineKey::Registered,
            TimelineKey::Review,
            TimelineKey::Initiate,
            TimelineKey::Order,
            TimelineKey::Final,
        ]
    );
    assert_eq!(items[0].at, Some(ts(2024, 3, 1, 9, 0)));
    assert_eq!(items[0].label, "Зареєстровано");
}

#[test]
fn fresh_record_is_under_review() {
    use TimelineStatus::*;
    let items = build_timeline(&investigation(InvestigationStage::ReportReview));
    assert_eq!(statuses(&items), vec![Done, Current, Pending, Pending, Pending]);
    assert_eq!(items[4].label, "Очікує завершення");
}

#[test]
fn review_hint_names_document_type() {
    let mut record = investigation(InvestigationStage::ReportReview);
    record.investigation.document_type = Some(DocumentType::Memo);
    assert_eq!(build_timeline(&record)[1].hint.as_deref(), Some("Доповідна записка"));
}

#[test]
fn passed_steps_without_timestamps_count_as_done() {
    use TimelineStatus::*;
    let record = investigation(InvestigationStage::SrOrderAssigned);
    let items = build_timeline(&record);
    assert_eq!(statuses(&items), vec![Done, Done, Done, Current, Pending]);
    assert!(items[1].at.is_none());
}

#[test]
fn initiated_stage_statuses() {
    use TimelineStatus::*;
    let mut record = investigation(InvestigationStage::SrInitiated);
    record.investigation.reviewed_at = Some(ts(2024, 3, 2, 10, 0));
    let items = build_timeline(&record);
    assert_eq!(statuses(&items), vec![Done, Done, Current, Pending, Pending]);
    assert_eq!(items[1].at, Some(ts(2024, 3, 2, 10, 0)));
}

#[test]
fn order_hint_shows_number_and_date() {
    let mut record = investigation(InvestigationStage::SrOrderAssigned);
    record.investigation.order_number = Some("155".to_string());
    record.investigation.order_date = Some(date(2024, 3, 10));
    assert_eq!(
        build_timeline(&record)[3].hint.as_deref(),
        Some("Наказ № 155 від 10.03.2024")
    );

    record.investigation.order_date = None;
    assert_eq!(build_timeline(&record)[3].hint.as_deref(), Some("Наказ № 155"));
}

#[test]
fn no_violation_path_skips_investigation_steps() {
    use TimelineStatus::*;
    let mut record = investigation(InvestigationStage::CheckCompletedNoViolation);
    record.investigation.reviewed_at = Some(ts(2024, 3, 2, 10, 0));
    record.investigation.initiated_at = Some(ts(2024, 3, 3, 10, 0));
    record.investigation.order_assigned_at = Some(ts(2024, 3, 4, 10, 0));
    record.investigation.completed_at = Some(ts(2024, 3, 5, 10, 0));

    let items = build_timeline(&record);
    assert_eq!(statuses(&items), vec![Done, Done, Skipped, Skipped, Done]);
    for skipped in &items[2..4] {
        assert_eq!(skipped.at, None);
        assert_eq!(
            skipped.hint.as_deref(),
            Some("Не застосовується: порушень службової дисципліни не виявлено")
        );
    }
    assert_eq!(items[4].label, "Завершено: порушень дисципліни не виявлено");
}

#[test]
fn terminal_without_completion_stamp_is_current() {
    let record = investigation(InvestigationStage::SrCompletedLawful);
    let items = build_timeline(&record);
    assert_eq!(items[3].status, TimelineStatus::Done);
    assert_eq!(items[4].status, TimelineStatus::Current);
    assert_eq!(items[4].label, "Завершено: дії правомірні");
}

#[test]
fn final_label_prefers_no_violation_then_unlawful() {
    let mut record = investigation(InvestigationStage::CheckCompletedNoViolation);
    record.investigation.final_result = Some(FinalResult::Unlawful);
    assert_eq!(build_timeline(&record)[4].label, "Завершено: порушень дисципліни не виявлено");

    let mut record = investigation(InvestigationStage::SrOrderAssigned);
    record.investigation.final_result = Some(FinalResult::Unlawful);
    assert_eq!(build_timeline(&record)[4].label, "Завершено: дії неправомірні");

    record.investigation.final_result = Some(FinalResult::Lawful);
    assert_eq!(build_timeline(&record)[4].label, "Завершено: дії правомірні");
}

#[test]
fn final_hint_joins_penalties_conclusion_and_order() {
    let mut record = investigation(InvestigationStage::SrCompletedUnlawful);
    let mut ledger = PenaltyLedger::new();
    ledger.upsert_entry("off-1", DecisionType::Article13, Some("догана"), None);
    record.investigation.penalty_items = ledger.to_persisted_list();
    record.investigation.conclusion_approved_at = Some(date(2024, 3, 20));
    record.investigation.penalty_order_number = Some("88-ОС".to_string());
    record.investigation.penalty_order_date = Some(date(2024, 3, 22));
    record.investigation.completed_at = Some(ts(2024, 3, 22, 16, 0));

    let last = build_timeline(&record).pop().unwrap();
    assert_eq!(last.status, TimelineStatus::Done);
    assert_eq!(
        last.hint.as_deref(),
        Some("Петренко Іван: догана • Висновок затверджено 20.03.2024 • Наказ про стягнення № 88-ОС від 22.03.2024")
    );
}

#[test]
fn final_hint_absent_without_details() {
    let record = investigation(InvestigationStage::SrCompletedLawful);
    assert_eq!(build_timeline(&record)[4].hint, None);
}
