//! Filtering, sorting and deadline aggregates over an in-memory snapshot of
//! records. No I/O; the caller fetches the snapshot.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use shared_types::{
    AssignmentFilter, QuickPreset, RecordFilters, RecordStats, RecordStatus, SortKey,
    StatusFilter, UnifiedRecord,
};
use std::cmp::Ordering;

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

fn is_open(record: &UnifiedRecord) -> bool {
    record.status != RecordStatus::Processed
}

/// Open and past its deadline.
pub fn is_overdue(record: &UnifiedRecord, now: DateTime<Utc>) -> bool {
    is_open(record) && record.deadline.is_some_and(|d| d < now)
}

/// Open with a deadline inside `[now, now + window]`. A window reaching past
/// the representable range has no upper bound.
pub fn is_due_soon(record: &UnifiedRecord, now: DateTime<Utc>, window: Duration) -> bool {
    let end = now.checked_add_signed(window);
    is_open(record)
        && record
            .deadline
            .is_some_and(|d| d >= now && end.map_or(true, |end| d <= end))
}

/// Window length for a configured hour count; out-of-range counts saturate.
fn window_of(hours: i64) -> Duration {
    Duration::try_hours(hours.max(0)).unwrap_or(Duration::MAX)
}

fn contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| h.to_lowercase().contains(needle))
}

fn matches_search(record: &UnifiedRecord, needle: &str) -> bool {
    contains_ci(Some(&record.external_number), needle)
        || contains_ci(record.description.as_deref(), needle)
        || contains_ci(record.address_or_dob.as_ref().map(|a| a.display()).as_deref(), needle)
        || contains_ci(record.subject_name.as_deref(), needle)
        || record.officers.iter().any(|o| {
            contains_ci(o.last_name.as_deref(), needle) || contains_ci(o.first_name.as_deref(), needle)
        })
}

fn start_of_day(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc())
}

fn end_of_day(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_milli_opt(23, 59, 59, 999).map(|dt| dt.and_utc())
}

/// A blank selection means "any".
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn matches(record: &UnifiedRecord, filters: &RecordFilters, now: DateTime<Utc>) -> bool {
    if filters.kind.is_some_and(|k| record.record_type != k) {
        return false;
    }

    let search = filters.search.trim().to_lowercase();
    if !search.is_empty() && !matches_search(record, &search) {
        return false;
    }

    if let Some(category) = non_blank(filters.category.as_deref()) {
        if record.category.as_deref() != Some(category) {
            return false;
        }
    }

    match filters.status {
        StatusFilter::All => {}
        StatusFilter::Pending if !is_open(record) => return false,
        StatusFilter::Processed if is_open(record) => return false,
        _ => {}
    }

    match filters.assignment {
        AssignmentFilter::All => {}
        AssignmentFilter::Assigned if record.assigned_user_id.is_none() => return false,
        AssignmentFilter::Unassigned if record.assigned_user_id.is_some() => return false,
        _ => {}
    }

    let reference = filters.reference_number.trim().to_lowercase();
    if !reference.is_empty() && !contains_ci(Some(&record.external_number), &reference) {
        return false;
    }

    if let Some(inspector) = non_blank(filters.inspector_id.as_deref()) {
        if record.assigned_user_id.as_deref() != Some(inspector) {
            return false;
        }
    }

    let preset_ok = match filters.preset {
        QuickPreset::All => true,
        QuickPreset::Mine => {
            filters.current_user_id.is_some()
                && record.assigned_user_id.as_deref() == filters.current_user_id.as_deref()
        }
        QuickPreset::Unassigned => record.assigned_user_id.is_none(),
        QuickPreset::Overdue => is_overdue(record, now),
    };
    if !preset_ok {
        return false;
    }

    if let Some(from) = filters.period_from.and_then(start_of_day) {
        if !record.case_date.is_some_and(|d| d >= from) {
            return false;
        }
    }
    if let Some(to) = filters.period_to.and_then(end_of_day) {
        if !record.case_date.is_some_and(|d| d <= to) {
            return false;
        }
    }

    true
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Case-insensitive comparison that orders digit runs by numeric value,
/// so `ЄО-9` sorts before `ЄО-10`.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let start_a = i;
            while i < a.len() && a[i].is_ascii_digit() {
                i += 1;
            }
            let start_b = j;
            while j < b.len() && b[j].is_ascii_digit() {
                j += 1;
            }
            let run_a: String = a[start_a..i].iter().collect();
            let run_b: String = b[start_b..j].iter().collect();
            let trimmed_a = run_a.trim_start_matches('0');
            let trimmed_b = run_b.trim_start_matches('0');
            let ord = trimmed_a
                .len()
                .cmp(&trimmed_b.len())
                .then_with(|| trimmed_a.cmp(trimmed_b));
            if ord != Ordering::Equal {
                return ord;
            }
        } else {
            let ord = a[i].cmp(&b[j]);
            if ord != Ordering::Equal {
                return ord;
            }
            i += 1;
            j += 1;
        }
    }

    (a.len() - i).cmp(&(b.len() - j))
}

fn epoch_or(value: Option<DateTime<Utc>>) -> DateTime<Utc> {
    value.unwrap_or_default()
}

fn compare(a: &UnifiedRecord, b: &UnifiedRecord, sort: SortKey) -> Ordering {
    let primary = match sort {
        SortKey::RegistrationNewest => b.created_at.cmp(&a.created_at),
        SortKey::RegistrationOldest => a.created_at.cmp(&b.created_at),
        SortKey::EventNewest => epoch_or(b.case_date).cmp(&epoch_or(a.case_date)),
        SortKey::EventOldest => epoch_or(a.case_date).cmp(&epoch_or(b.case_date)),
        SortKey::ReferenceAsc => natural_cmp(&a.external_number, &b.external_number),
        SortKey::ReferenceDesc => natural_cmp(&b.external_number, &a.external_number),
    };
    primary.then_with(|| a.id.cmp(&b.id))
}

// ---------------------------------------------------------------------------
// Public queries
// ---------------------------------------------------------------------------

/// Apply every active filter (logical AND) and sort by the chosen key.
/// Ties are broken by record id so the order is total.
pub fn filter_records(
    records: &[UnifiedRecord],
    filters: &RecordFilters,
    now: DateTime<Utc>,
) -> Vec<UnifiedRecord> {
    let mut result: Vec<UnifiedRecord> = records
        .iter()
        .filter(|r| matches(r, filters, now))
        .cloned()
        .collect();
    result.sort_by(|a, b| compare(a, b, filters.sort));
    tracing::debug!(total = records.len(), matched = result.len(), "filtered records");
    result
}

fn by_deadline(records: &mut [UnifiedRecord]) {
    records.sort_by(|a, b| {
        epoch_or(a.deadline)
            .cmp(&epoch_or(b.deadline))
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Open records past their deadline, earliest deadline first.
pub fn overdue_records(records: &[UnifiedRecord], now: DateTime<Utc>) -> Vec<UnifiedRecord> {
    let mut result: Vec<UnifiedRecord> = records
        .iter()
        .filter(|r| is_overdue(r, now))
        .cloned()
        .collect();
    by_deadline(&mut result);
    result
}

/// Open records due within `window_hours`, earliest deadline first.
pub fn due_soon_records(
    records: &[UnifiedRecord],
    now: DateTime<Utc>,
    window_hours: i64,
) -> Vec<UnifiedRecord> {
    let window = window_of(window_hours);
    let mut result: Vec<UnifiedRecord> = records
        .iter()
        .filter(|r| is_due_soon(r, now, window))
        .cloned()
        .collect();
    by_deadline(&mut result);
    result
}

/// Distinct non-empty categories in first-seen order.
pub fn record_categories(records: &[UnifiedRecord]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for category in records
        .iter()
        .filter_map(|r| r.category.as_deref())
        .map(str::trim)
        .filter(|c| !c.is_empty())
    {
        if !seen.iter().any(|s| s == category) {
            seen.push(category.to_string());
        }
    }
    seen
}

pub fn record_stats(records: &[UnifiedRecord], now: DateTime<Utc>, window_hours: i64) -> RecordStats {
    let window = window_of(window_hours);
    RecordStats {
        total: records.len(),
        processed: records.iter().filter(|r| !is_open(r)).count(),
        unassigned: records.iter().filter(|r| r.assigned_user_id.is_none()).count(),
        overdue: records.iter().filter(|r| is_overdue(r, now)).count(),
        due_soon: records.iter().filter(|r| is_due_soon(r, now, window)).count(),
    }
}
