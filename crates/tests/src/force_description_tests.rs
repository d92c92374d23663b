use pretty_assertions::assert_eq;
use shared_types::{initial_force_usage, ForceKey, ForceMeasureEntry, ForceUsage};
use workflow::composer::*;

fn usage_with(entries: &[(ForceKey, ForceMeasureEntry)]) -> ForceUsage {
    let mut usage = initial_force_usage();
    for (key, entry) in entries {
        usage.insert(*key, entry.clone());
    }
    usage
}

#[test]
fn nothing_enabled_is_an_error() {
    let err = build_force_description(&initial_force_usage()).unwrap_err();
    assert_eq!(err, ForceUsageError::NoMeasureSelected);
    assert_eq!(err.to_string(), "Оберіть щонайменше один засіб застосування");
}

#[test]
fn baton_alone_renders_moment() {
    let usage = usage_with(&[(ForceKey::Baton, ForceMeasureEntry::at("2024-05-01", "14:30"))]);
    assert_eq!(
        build_force_description(&usage).unwrap(),
        "гумовий кийок — 01.05.2024 о 14:30"
    );
}

#[test]
fn weapon_without_time_names_the_measure() {
    let mut entry = ForceMeasureEntry::at("2024-05-01", "");
    entry.time.clear();
    let usage = usage_with(&[(ForceKey::Weapon, entry)]);
    let err = build_force_description(&usage).unwrap_err();
    assert_eq!(err, ForceUsageError::MissingTime(ForceKey::Weapon));
    assert_eq!(err.to_string(), "Для \"Зброя\" потрібно вказати час");
}

#[test]
fn missing_date_reported_before_time() {
    let usage = usage_with(&[(ForceKey::PhysicalForce, ForceMeasureEntry::at("", ""))]);
    let err = build_force_description(&usage).unwrap_err();
    assert_eq!(err, ForceUsageError::MissingDate(ForceKey::PhysicalForce));
    assert_eq!(err.to_string(), "Для \"Фізична сила\" потрібно вказати дату");
}

#[test]
fn handcuffs_require_both_interval_ends() {
    let usage = usage_with(&[(ForceKey::Handcuffs, ForceMeasureEntry::between("2024-05-01", "10:00", ""))]);
    let err = build_force_description(&usage).unwrap_err();
    assert_eq!(err.measure(), Some(ForceKey::Handcuffs));
    assert_eq!(err.to_string(), "Для \"Кайданки\" потрібно вказати період часу з-по");
}

#[test]
fn handcuffs_crossing_midnight_advance_end_date() {
    let usage = usage_with(&[(
        ForceKey::Handcuffs,
        ForceMeasureEntry::between("2024-05-01", "23:50", "00:10"),
    )]);
    assert_eq!(
        build_force_description(&usage).unwrap(),
        "кайданки — з 23:50 01.05.2024 по 00:10 02.05.2024"
    );
}

#[test]
fn handcuffs_same_day_keep_date() {
    let usage = usage_with(&[(
        ForceKey::Handcuffs,
        ForceMeasureEntry::between("2024-12-31", "10:00", "11:15"),
    )]);
    assert_eq!(
        build_force_description(&usage).unwrap(),
        "кайданки — з 10:00 31.12.2024 по 11:15 31.12.2024"
    );
}

#[test]
fn handcuffs_rollover_crosses_year() {
    let usage = usage_with(&[(
        ForceKey::Handcuffs,
        ForceMeasureEntry::between("2024-12-31", "22:00", "01:00"),
    )]);
    assert!(build_force_description(&usage).unwrap().ends_with("по 01:00 01.01.2025"));
}

#[test]
fn clauses_follow_declaration_order() {
    let usage = usage_with(&[
        (ForceKey::PhysicalForce, ForceMeasureEntry::at("2024-05-01", "10:05")),
        (ForceKey::Weapon, ForceMeasureEntry::at("2024-05-01", "10:00")),
    ]);
    assert_eq!(
        build_force_description(&usage).unwrap(),
        "зброя — 01.05.2024 о 10:00; фізична сила — 01.05.2024 о 10:05"
    );
}

#[test]
fn first_invalid_measure_in_order_wins() {
    let usage = usage_with(&[
        (ForceKey::Handcuffs, ForceMeasureEntry::between("", "", "")),
        (ForceKey::TearGas, ForceMeasureEntry::at("2024-05-01", "")),
    ]);
    assert_eq!(
        build_force_description(&usage).unwrap_err(),
        ForceUsageError::MissingTime(ForceKey::TearGas)
    );
}

#[test]
fn disabled_entries_are_not_validated() {
    let mut disabled = ForceMeasureEntry::at("", "");
    disabled.enabled = false;
    let usage = usage_with(&[
        (ForceKey::Weapon, disabled),
        (ForceKey::Baton, ForceMeasureEntry::at("2024-05-01", "09:00")),
    ]);
    assert!(build_force_description(&usage).is_ok());
}

#[test]
fn date_and_time_helpers() {
    assert_eq!(format_date_ua("2024-05-01"), "01.05.2024");
    assert_eq!(format_date_ua("вчора"), "вчора");
    assert_eq!(format_time_ua("08:05"), "08 год. 05 хв.");
    assert_eq!(format_time_ua(""), "");
    assert!(is_time_earlier("00:10", "23:50"));
    assert!(!is_time_earlier("10:00", "10:00"));
    assert!(!is_time_earlier("", "10:00"));
    assert_eq!(add_one_day("2024-02-28"), "2024-02-29");
    assert_eq!(add_one_day("bad"), "bad");
}
