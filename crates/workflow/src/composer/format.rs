use chrono::{Days, NaiveDate, NaiveTime};

const ISO_DATE: &str = "%Y-%m-%d";

fn parse_iso(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE).ok()
}

fn parse_clock(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

/// `YYYY-MM-DD` → `dd.mm.yyyy`. Anything unparseable is returned as given.
pub fn format_date_ua(value: &str) -> String {
    match parse_iso(value) {
        Some(date) => date.format("%d.%m.%Y").to_string(),
        None => value.to_string(),
    }
}

/// `HH:MM` → `HH год. MM хв.`. Anything unparseable is returned as given.
pub fn format_time_ua(value: &str) -> String {
    match parse_clock(value) {
        Some(time) => time.format("%H год. %M хв.").to_string(),
        None => value.to_string(),
    }
}

/// True when clock time `a` is strictly earlier than `b` on the same day.
/// Unparseable input never counts as earlier.
pub fn is_time_earlier(a: &str, b: &str) -> bool {
    match (parse_clock(a), parse_clock(b)) {
        (Some(a), Some(b)) => a < b,
        _ => false,
    }
}

/// The ISO date one calendar day later. Unparseable input is returned as given.
pub fn add_one_day(value: &str) -> String {
    match parse_iso(value).and_then(|d| d.checked_add_days(Days::new(1))) {
        Some(next) => next.format(ISO_DATE).to_string(),
        None => value.to_string(),
    }
}
