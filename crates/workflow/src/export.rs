//! Export handoff: flat spreadsheet rows and Latin transliteration for
//! rendering targets without Cyrillic glyphs.

use serde::{Deserialize, Serialize};
use shared_types::{RecordStatus, UnifiedRecord};

const EMPTY_CELL: &str = "-";

/// One spreadsheet row. Column headers are the serialized field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    #[serde(rename = "Дата звернення")]
    pub case_date: String,
    #[serde(rename = "№ ЄО/Звернення")]
    pub reference_number: String,
    #[serde(rename = "Заявник")]
    pub subject: String,
    #[serde(rename = "Виконавець")]
    pub inspector: String,
    #[serde(rename = "Тип")]
    pub kind: String,
    #[serde(rename = "Категорія")]
    pub category: String,
    #[serde(rename = "Статус")]
    pub status: String,
    #[serde(rename = "Рішення")]
    pub resolution: String,
}

fn cell(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => EMPTY_CELL.to_string(),
    }
}

pub fn export_row(record: &UnifiedRecord) -> ExportRow {
    ExportRow {
        case_date: record
            .case_date
            .map(|d| d.format("%d.%m.%Y").to_string())
            .unwrap_or_else(|| EMPTY_CELL.to_string()),
        reference_number: cell(Some(&record.external_number)),
        subject: cell(record.subject_name.as_deref()),
        inspector: record.inspector_name(),
        kind: record.record_type.label().to_string(),
        category: cell(record.category.as_deref()),
        status: match record.status {
            RecordStatus::Processed => "Опрацьовано",
            RecordStatus::Pending | RecordStatus::InProgress => "В роботі",
        }
        .to_string(),
        resolution: cell(record.resolution.as_deref()),
    }
}

pub fn export_rows(records: &[UnifiedRecord]) -> Vec<ExportRow> {
    records.iter().map(export_row).collect()
}

// ── Transliteration ─────────────────────────────────────────────────

fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '’' | 'ʼ' | '`')
}

/// Latin form of one lowercase letter; the second element is the
/// word-initial form where the table has one.
fn latin(c: char) -> Option<(&'static str, &'static str)> {
    let pair = match c {
        'а' => ("a", "a"),
        'б' => ("b", "b"),
        'в' => ("v", "v"),
        'г' => ("h", "h"),
        'ґ' => ("g", "g"),
        'д' => ("d", "d"),
        'е' => ("e", "e"),
        'є' => ("ie", "ye"),
        'ж' => ("zh", "zh"),
        'з' => ("z", "z"),
        'и' => ("y", "y"),
        'і' => ("i", "i"),
        'ї' => ("i", "yi"),
        'й' => ("i", "y"),
        'к' => ("k", "k"),
        'л' => ("l", "l"),
        'м' => ("m", "m"),
        'н' => ("n", "n"),
        'о' => ("o", "o"),
        'п' => ("p", "p"),
        'р' => ("r", "r"),
        'с' => ("s", "s"),
        'т' => ("t", "t"),
        'у' => ("u", "u"),
        'ф' => ("f", "f"),
        'х' => ("kh", "kh"),
        'ц' => ("ts", "ts"),
        'ч' => ("ch", "ch"),
        'ш' => ("sh", "sh"),
        'щ' => ("shch", "shch"),
        'ь' => ("", ""),
        'ю' => ("iu", "yu"),
        'я' => ("ia", "ya"),
        _ => return None,
    };
    Some(pair)
}

fn capitalize(s: &str, all_caps: bool) -> String {
    if all_caps {
        return s.to_uppercase();
    }
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Transliterate Ukrainian text with the official Cabinet of Ministers table.
///
/// Characters outside the alphabet pass through unchanged; soft signs and
/// apostrophes are dropped.
pub fn transliterate(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        if is_apostrophe(c) {
            continue;
        }
        let lower = c.to_lowercase().next().unwrap_or(c);
        let Some((medial, initial)) = latin(lower) else {
            out.push(c);
            continue;
        };

        let prev = i.checked_sub(1).map(|p| chars[p]);
        let word_initial = prev.map_or(true, |p| !p.is_alphabetic() && !is_apostrophe(p));

        let mapped = if lower == 'г' && prev.is_some_and(|p| p.to_lowercase().next() == Some('з')) {
            "gh"
        } else if word_initial {
            initial
        } else {
            medial
        };

        if c.is_uppercase() {
            let next_upper = chars.get(i + 1).is_some_and(|n| n.is_uppercase());
            let prev_upper = prev.is_some_and(|p| p.is_uppercase());
            out.push_str(&capitalize(mapped, next_upper || (prev_upper && !word_initial)));
        } else {
            out.push_str(mapped);
        }
    }

    out
}
