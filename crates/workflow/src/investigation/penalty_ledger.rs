//! Per-officer penalty decisions of a service investigation.
//!
//! The structured list is authoritative. Rows written before it existed only
//! carry a single officer/penalty triple; [`infer_from_legacy`] rebuilds a
//! one-entry ledger from it on a best-effort basis and marks the entry as
//! inferred. Which entries were inferred is never written back.

use shared_types::{
    DecisionType, EntryOrigin, LegacyPenalty, PenaltyEntry, UnifiedRecord,
    ARTICLE_19_PART_11_PHRASE, ARTICLE_19_PART_13_PHRASE,
};

/// Ordered set of decisions, at most one per officer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PenaltyLedger {
    entries: Vec<PenaltyEntry>,
}

fn clean(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl PenaltyLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[PenaltyEntry] {
        &self.entries
    }

    pub fn get(&self, officer_id: &str) -> Option<&PenaltyEntry> {
        self.entries.iter().find(|e| e.officer_id == officer_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or replace the decision for one officer, keeping its position.
    ///
    /// Article 19 decisions always carry their canonical phrase; any text the
    /// caller supplied for them is discarded.
    pub fn upsert_entry(
        &mut self,
        officer_id: &str,
        decision_type: DecisionType,
        penalty_text: Option<&str>,
        penalty_other: Option<&str>,
    ) {
        let officer_id = officer_id.trim().to_string();
        let entry = match decision_type.canonical_phrase() {
            Some(phrase) => PenaltyEntry {
                officer_id,
                decision_type,
                penalty_text: phrase.to_string(),
                penalty_other_text: None,
                origin: EntryOrigin::Confirmed,
            },
            None => PenaltyEntry {
                officer_id,
                decision_type,
                penalty_text: clean(penalty_text).unwrap_or_default(),
                penalty_other_text: clean(penalty_other),
                origin: EntryOrigin::Confirmed,
            },
        };

        match self.entries.iter_mut().find(|e| e.officer_id == entry.officer_id) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    /// Drop the decision for one officer. Returns the removed entry.
    pub fn remove_entry(&mut self, officer_id: &str) -> Option<PenaltyEntry> {
        let index = self.entries.iter().position(|e| e.officer_id == officer_id)?;
        Some(self.entries.remove(index))
    }

    pub fn has_article13_entry(&self) -> bool {
        self.entries
            .iter()
            .any(|e| e.decision_type == DecisionType::Article13)
    }

    /// Whether a separate disciplinary order must be issued.
    pub fn requires_order(&self) -> bool {
        self.has_article13_entry()
    }

    /// Entries fit for storage. Article 13 entries without penalty text are
    /// incomplete and left out; Article 19 entries are always well-formed.
    pub fn to_persisted_list(&self) -> Vec<PenaltyEntry> {
        self.entries
            .iter()
            .filter(|e| {
                e.decision_type != DecisionType::Article13 || !e.penalty_text.trim().is_empty()
            })
            .cloned()
            .collect()
    }

    /// Rebuild a ledger from stored data, preferring the structured list.
    pub fn from_persisted_or_legacy(
        items: &[PenaltyEntry],
        legacy: &LegacyPenalty,
        legacy_requires_order: Option<bool>,
    ) -> Self {
        if !items.is_empty() {
            return Self {
                entries: items.to_vec(),
            };
        }
        Self {
            entries: infer_from_legacy(legacy, legacy_requires_order)
                .into_iter()
                .collect(),
        }
    }

    pub fn from_record(record: &UnifiedRecord) -> Self {
        let inv = &record.investigation;
        Self::from_persisted_or_legacy(
            &inv.penalty_items,
            &inv.legacy_penalty,
            inv.penalty_requires_order,
        )
    }

    /// `Прізвище Ім'я: догана; ...`, resolving names through the record's
    /// officer references.
    pub fn summary(&self, record: &UnifiedRecord) -> String {
        self.entries
            .iter()
            .map(|e| format!("{}: {}", record.officer_display_name(&e.officer_id), e.display_text()))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Guess the decision behind a legacy officer/penalty triple.
///
/// An explicit "requires order" flag means Article 13. Otherwise the text is
/// matched against the Article 19 canonical phrases; a free-form Article 13
/// penalty that happens to contain the same words is misread. Returns `None`
/// when the triple is incomplete.
pub fn infer_from_legacy(
    legacy: &LegacyPenalty,
    legacy_requires_order: Option<bool>,
) -> Option<PenaltyEntry> {
    if legacy.is_empty() {
        return None;
    }
    let officer_id = legacy.officer_id.as_deref()?.trim().to_string();
    let penalty_type = legacy.penalty_type.as_deref()?.trim().to_string();
    let lowered = penalty_type.to_lowercase();

    let decision_type = if legacy_requires_order == Some(true) {
        DecisionType::Article13
    } else if lowered.contains("обмежено") {
        DecisionType::Article19Part13
    } else if lowered.contains("необхідність дотримання") {
        DecisionType::Article19Part11
    } else {
        DecisionType::Article13
    };

    let (penalty_text, penalty_other_text) = match decision_type {
        DecisionType::Article19Part11 => (ARTICLE_19_PART_11_PHRASE.to_string(), None),
        DecisionType::Article19Part13 => (ARTICLE_19_PART_13_PHRASE.to_string(), None),
        DecisionType::Article13 => (penalty_type, clean(legacy.penalty_other.as_deref())),
    };

    tracing::debug!(
        officer_id = %officer_id,
        decision_type = decision_type.as_str(),
        "inferred penalty entry from legacy columns"
    );

    Some(PenaltyEntry {
        officer_id,
        decision_type,
        penalty_text,
        penalty_other_text,
        origin: EntryOrigin::InferredFromLegacy,
    })
}
