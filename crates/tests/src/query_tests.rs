use chrono::Duration;
use pretty_assertions::assert_eq;
use shared_types::{
    AddressOrDob, AssignmentFilter, QuickPreset, RecordFilters, RecordKind, RecordStats,
    RecordStatus, SortKey, StatusFilter, UnifiedRecord,
};
use workflow::query::{
    due_soon_records, filter_records, is_due_soon, is_overdue, natural_cmp, overdue_records,
    record_categories, record_stats,
};

use crate::common::{date, make_record, officer, ts};

fn numbers(records: &[UnifiedRecord]) -> Vec<&str> {
    records.iter().map(|r| r.external_number.as_str()).collect()
}

fn open_with_deadline(number: &str, deadline: chrono::DateTime<chrono::Utc>) -> UnifiedRecord {
    let mut record = make_record(RecordKind::Eo, number);
    record.status = RecordStatus::InProgress;
    record.deadline = Some(deadline);
    record
}

/// A small mixed snapshot.
fn snapshot() -> Vec<UnifiedRecord> {
    let mut a = make_record(RecordKind::Eo, "ЄО-10");
    a.case_date = Some(ts(2024, 3, 1, 8, 0));
    a.created_at = ts(2024, 3, 1, 9, 0);
    a.category = Some("ДТП".to_string());
    a.subject_name = Some("Шевченко Тарас".to_string());
    a.assigned_user_id = Some("insp-1".to_string());

    let mut b = make_record(RecordKind::Eo, "ЄО-9");
    b.case_date = Some(ts(2024, 3, 5, 23, 30));
    b.created_at = ts(2024, 3, 6, 9, 0);
    b.category = Some("Крадіжка".to_string());
    b.description = Some("Викрадено велосипед".to_string());
    b.status = RecordStatus::Processed;
    b.assigned_user_id = Some("insp-2".to_string());

    let mut c = make_record(RecordKind::Application, "ЗВ-1");
    c.case_date = Some(ts(2024, 2, 20, 12, 0));
    c.created_at = ts(2024, 2, 20, 13, 0);
    c.address_or_dob = Some(AddressOrDob::Address("вул. Хрещатик, 1".to_string()));
    c.category = Some("ДТП".to_string());

    let mut d = make_record(RecordKind::ServiceInvestigation, "СР-2");
    d.created_at = ts(2024, 3, 3, 9, 0);
    d.status = RecordStatus::InProgress;
    d.deadline = Some(ts(2024, 3, 4, 0, 0));
    d.officers = vec![officer("off-1", "Петренко", "Іван")];

    vec![a, b, c, d]
}

// ── Deadlines ───────────────────────────────────────────────────────

#[test]
fn overdue_starts_after_deadline() {
    let deadline = ts(2024, 3, 10, 12, 0);
    let record = open_with_deadline("1", deadline);
    assert!(!is_overdue(&record, deadline));
    assert!(is_overdue(&record, deadline + Duration::seconds(1)));
    assert!(!is_overdue(&record, deadline - Duration::seconds(1)));
}

#[test]
fn processed_records_are_never_overdue() {
    let mut record = open_with_deadline("1", ts(2024, 3, 10, 12, 0));
    record.status = RecordStatus::Processed;
    assert!(!is_overdue(&record, ts(2024, 4, 1, 0, 0)));
    assert!(!is_due_soon(&record, ts(2024, 3, 10, 0, 0), Duration::hours(24)));
}

#[test]
fn records_without_deadline_are_never_flagged() {
    let mut record = make_record(RecordKind::Eo, "1");
    record.status = RecordStatus::InProgress;
    assert!(!is_overdue(&record, ts(2030, 1, 1, 0, 0)));
    assert!(!is_due_soon(&record, ts(2030, 1, 1, 0, 0), Duration::hours(24)));
}

#[test]
fn due_soon_window_is_inclusive() {
    let now = ts(2024, 3, 10, 12, 0);
    let window = Duration::hours(24);
    assert!(is_due_soon(&open_with_deadline("1", now), now, window));
    assert!(is_due_soon(&open_with_deadline("2", now + window), now, window));
    assert!(!is_due_soon(&open_with_deadline("3", now + window + Duration::seconds(1)), now, window));
    assert!(!is_due_soon(&open_with_deadline("4", now - Duration::seconds(1)), now, window));
}

#[test]
fn deadline_lists_sort_by_deadline() {
    let now = ts(2024, 3, 10, 12, 0);
    let records = vec![
        open_with_deadline("late", now + Duration::hours(20)),
        open_with_deadline("soon", now + Duration::hours(2)),
        open_with_deadline("past-2", now - Duration::hours(2)),
        open_with_deadline("past-9", now - Duration::hours(9)),
        open_with_deadline("far", now + Duration::hours(48)),
    ];
    assert_eq!(numbers(&due_soon_records(&records, now, 24)), vec!["soon", "late"]);
    assert_eq!(numbers(&overdue_records(&records, now)), vec!["past-9", "past-2"]);
}

// ── Sorting ─────────────────────────────────────────────────────────

#[test]
fn natural_order_compares_digit_runs() {
    use std::cmp::Ordering;
    assert_eq!(natural_cmp("ЄО-9", "ЄО-10"), Ordering::Less);
    assert_eq!(natural_cmp("єо-10", "ЄО-10"), Ordering::Equal);
    assert_eq!(natural_cmp("A-007", "a-7"), Ordering::Equal);
    assert_eq!(natural_cmp("A-7b", "A-7"), Ordering::Greater);
}

#[test]
fn sorts_by_reference_naturally() {
    let records = snapshot();
    let filters = RecordFilters {
        kind: Some(RecordKind::Eo),
        sort: SortKey::ReferenceAsc,
        ..Default::default()
    };
    let now = ts(2024, 3, 10, 0, 0);
    assert_eq!(numbers(&filter_records(&records, &filters, now)), vec!["ЄО-9", "ЄО-10"]);

    let filters = RecordFilters {
        sort: SortKey::ReferenceDesc,
        ..filters
    };
    assert_eq!(numbers(&filter_records(&records, &filters, now)), vec!["ЄО-10", "ЄО-9"]);
}

#[test]
fn sorts_by_registration_and_event_time() {
    let records = snapshot();
    let now = ts(2024, 3, 10, 0, 0);

    let newest = filter_records(&records, &RecordFilters::default(), now);
    assert_eq!(numbers(&newest), vec!["ЄО-9", "СР-2", "ЄО-10", "ЗВ-1"]);

    let filters = RecordFilters {
        sort: SortKey::RegistrationOldest,
        ..Default::default()
    };
    assert_eq!(
        numbers(&filter_records(&records, &filters, now)),
        vec!["ЗВ-1", "ЄО-10", "СР-2", "ЄО-9"]
    );

    // Missing event dates sort as the oldest.
    let filters = RecordFilters {
        sort: SortKey::EventOldest,
        ..Default::default()
    };
    assert_eq!(
        numbers(&filter_records(&records, &filters, now)),
        vec!["СР-2", "ЗВ-1", "ЄО-10", "ЄО-9"]
    );
}

// ── Filters ─────────────────────────────────────────────────────────

#[test]
fn search_covers_text_fields() {
    let records = snapshot();
    let now = ts(2024, 3, 10, 0, 0);
    let search = |needle: &str| {
        let filters = RecordFilters {
            search: needle.to_string(),
            ..Default::default()
        };
        let mut found: Vec<String> = filter_records(&records, &filters, now)
            .into_iter()
            .map(|r| r.external_number)
            .collect();
        found.sort();
        found
    };

    assert_eq!(search("велосипед"), vec!["ЄО-9"]);
    assert_eq!(search("ХРЕЩАТИК"), vec!["ЗВ-1"]);
    assert_eq!(search("шевченко"), vec!["ЄО-10"]);
    assert_eq!(search("петренко"), vec!["СР-2"]);
    assert_eq!(search("зв-"), vec!["ЗВ-1"]);
    assert_eq!(search("   ").len(), 4);
}

#[test]
fn status_and_assignment_filters() {
    let records = snapshot();
    let now = ts(2024, 3, 10, 0, 0);

    let processed = RecordFilters {
        status: StatusFilter::Processed,
        ..Default::default()
    };
    assert_eq!(numbers(&filter_records(&records, &processed, now)), vec!["ЄО-9"]);

    let pending = RecordFilters {
        status: StatusFilter::Pending,
        assignment: AssignmentFilter::Unassigned,
        sort: SortKey::ReferenceAsc,
        ..Default::default()
    };
    assert_eq!(numbers(&filter_records(&records, &pending, now)), vec!["ЗВ-1", "СР-2"]);

    let assigned = RecordFilters {
        assignment: AssignmentFilter::Assigned,
        inspector_id: Some("insp-1".to_string()),
        ..Default::default()
    };
    assert_eq!(numbers(&filter_records(&records, &assigned, now)), vec!["ЄО-10"]);
}

#[test]
fn category_and_reference_filters() {
    let records = snapshot();
    let now = ts(2024, 3, 10, 0, 0);
    let filters = RecordFilters {
        category: Some("ДТП".to_string()),
        reference_number: "єо".to_string(),
        ..Default::default()
    };
    assert_eq!(numbers(&filter_records(&records, &filters, now)), vec!["ЄО-10"]);
}

#[test]
fn blank_category_and_inspector_match_everything() {
    let records = snapshot();
    let now = ts(2024, 3, 10, 0, 0);
    for blank in ["", "  "] {
        let filters = RecordFilters {
            category: Some(blank.to_string()),
            inspector_id: Some(blank.to_string()),
            sort: SortKey::ReferenceAsc,
            ..Default::default()
        };
        assert_eq!(filter_records(&records, &filters, now).len(), records.len());
    }
}

#[test]
fn quick_presets() {
    let records = snapshot();
    let now = ts(2024, 3, 10, 0, 0);
    let with_preset = |preset: QuickPreset, user: Option<&str>| {
        let filters = RecordFilters {
            preset,
            current_user_id: user.map(str::to_string),
            sort: SortKey::ReferenceAsc,
            ..Default::default()
        };
        filter_records(&records, &filters, now)
            .into_iter()
            .map(|r| r.external_number)
            .collect::<Vec<_>>()
    };

    assert_eq!(with_preset(QuickPreset::Mine, Some("insp-2")), vec!["ЄО-9"]);
    assert!(with_preset(QuickPreset::Mine, None).is_empty());
    assert_eq!(with_preset(QuickPreset::Unassigned, None), vec!["ЗВ-1", "СР-2"]);
    assert_eq!(with_preset(QuickPreset::Overdue, None), vec!["СР-2"]);
}

#[test]
fn period_bounds_cover_whole_days() {
    let records = snapshot();
    let now = ts(2024, 3, 10, 0, 0);
    let filters = RecordFilters {
        period_from: Some(date(2024, 3, 1)),
        period_to: Some(date(2024, 3, 5)),
        sort: SortKey::ReferenceAsc,
        ..Default::default()
    };
    // СР-2 has no event date and is excluded once a bound is set.
    assert_eq!(numbers(&filter_records(&records, &filters, now)), vec!["ЄО-9", "ЄО-10"]);

    let filters = RecordFilters {
        period_to: Some(date(2024, 3, 4)),
        ..filters
    };
    assert_eq!(numbers(&filter_records(&records, &filters, now)), vec!["ЄО-10"]);
}

#[test]
fn kind_tab_filter() {
    let records = snapshot();
    let filters = RecordFilters {
        kind: Some(RecordKind::ServiceInvestigation),
        ..Default::default()
    };
    assert_eq!(numbers(&filter_records(&records, &filters, ts(2024, 3, 10, 0, 0))), vec!["СР-2"]);
}

// ── Aggregates ──────────────────────────────────────────────────────

#[test]
fn categories_are_distinct_in_first_seen_order() {
    let mut records = snapshot();
    records[3].category = Some("  ".to_string());
    assert_eq!(record_categories(&records), vec!["ДТП", "Крадіжка"]);
}

#[test]
fn stats_count_each_bucket() {
    let mut records = snapshot();
    records.push(open_with_deadline("soon", ts(2024, 3, 10, 6, 0)));
    let stats = record_stats(&records, ts(2024, 3, 10, 0, 0), 24);
    assert_eq!(
        stats,
        RecordStats {
            total: 5,
            processed: 1,
            unassigned: 3,
            overdue: 1,
            due_soon: 1,
        }
    );
}

#[test]
fn oversized_window_has_no_upper_bound() {
    let now = ts(2024, 3, 10, 12, 0);
    let records = vec![
        open_with_deadline("far", now + Duration::days(3650)),
        open_with_deadline("past", now - Duration::hours(1)),
    ];
    assert_eq!(numbers(&due_soon_records(&records, now, 1_000_000_000_000)), vec!["far"]);
    assert_eq!(record_stats(&records, now, i64::MAX).due_soon, 1);
    assert!(is_due_soon(&records[0], now, Duration::MAX));
}

#[test]
fn negative_window_only_matches_deadline_now() {
    let now = ts(2024, 3, 10, 12, 0);
    let records = vec![
        open_with_deadline("now", now),
        open_with_deadline("soon", now + Duration::hours(1)),
    ];
    assert_eq!(numbers(&due_soon_records(&records, now, -5)), vec!["now"]);
}
