//! Force-usage description builder.
//!
//! Turns the per-measure entries from the intake form into one sentence,
//! e.g. `зброя — 01.05.2024 о 10:15; кайданки — з 23:50 01.05.2024 по 00:10 02.05.2024`.

use std::fmt;

use shared_types::{ForceKey, ForceMeasureEntry, ForceUsage};

use super::format::{add_one_day, format_date_ua, is_time_earlier};

/// Why a description could not be built. `Display` is the operator message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForceUsageError {
    NoMeasureSelected,
    MissingDate(ForceKey),
    MissingTime(ForceKey),
    MissingInterval(ForceKey),
}

impl ForceUsageError {
    /// The measure the failure is about, if any.
    pub fn measure(&self) -> Option<ForceKey> {
        match self {
            ForceUsageError::NoMeasureSelected => None,
            ForceUsageError::MissingDate(k)
            | ForceUsageError::MissingTime(k)
            | ForceUsageError::MissingInterval(k) => Some(*k),
        }
    }
}

impl fmt::Display for ForceUsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForceUsageError::NoMeasureSelected => {
                write!(f, "Оберіть щонайменше один засіб застосування")
            }
            ForceUsageError::MissingDate(k) => {
                write!(f, "Для \"{}\" потрібно вказати дату", k.label())
            }
            ForceUsageError::MissingTime(k) => {
                write!(f, "Для \"{}\" потрібно вказати час", k.label())
            }
            ForceUsageError::MissingInterval(k) => {
                write!(f, "Для \"{}\" потрібно вказати період часу з-по", k.label())
            }
        }
    }
}

impl std::error::Error for ForceUsageError {}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn validate(key: ForceKey, entry: &ForceMeasureEntry) -> Result<(), ForceUsageError> {
    if blank(&entry.date) {
        return Err(ForceUsageError::MissingDate(key));
    }
    if key.is_interval() {
        if blank(&entry.from) || blank(&entry.to) {
            return Err(ForceUsageError::MissingInterval(key));
        }
    } else if blank(&entry.time) {
        return Err(ForceUsageError::MissingTime(key));
    }
    Ok(())
}

fn render(key: ForceKey, entry: &ForceMeasureEntry) -> String {
    let label = key.label().to_lowercase();
    let date = entry.date.trim();
    if key.is_interval() {
        let from = entry.from.trim();
        let to = entry.to.trim();
        // An end clock-earlier than the start means the interval crossed midnight.
        let end_date = if is_time_earlier(to, from) {
            add_one_day(date)
        } else {
            date.to_string()
        };
        format!(
            "{label} — з {from} {} по {to} {}",
            format_date_ua(date),
            format_date_ua(&end_date)
        )
    } else {
        format!("{label} — {} о {}", format_date_ua(date), entry.time.trim())
    }
}

/// Build the force-usage sentence.
///
/// Measures are visited in declaration order; the first invalid enabled
/// entry decides the error.
pub fn build_force_description(usage: &ForceUsage) -> Result<String, ForceUsageError> {
    let enabled: Vec<(ForceKey, &ForceMeasureEntry)> = ForceKey::ALL
        .into_iter()
        .filter_map(|key| usage.get(&key).filter(|e| e.enabled).map(|e| (key, e)))
        .collect();

    if enabled.is_empty() {
        return Err(ForceUsageError::NoMeasureSelected);
    }

    for (key, entry) in &enabled {
        validate(*key, entry)?;
    }

    Ok(enabled
        .into_iter()
        .map(|(key, entry)| render(key, entry))
        .collect::<Vec<_>>()
        .join("; "))
}
