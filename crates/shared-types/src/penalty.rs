use serde::{Deserialize, Serialize};

// ── Canonical phrases ───────────────────────────────────────────────

/// Fixed penalty text for a decision under Article 19, Part 11.
pub const ARTICLE_19_PART_11_PHRASE: &str =
    "попереджено про необхідність дотримання службової дисципліни";

/// Fixed penalty text for a decision under Article 19, Part 13.
pub const ARTICLE_19_PART_13_PHRASE: &str = "обмежено раніше накладеним стягненням";

/// Catalogue option whose real text lives in `penalty_other_text`.
pub const OTHER_PENALTY_OPTION: &str = "інший варіант";

/// Penalty options offered on the completion form, in display order.
pub const PENALTY_OPTIONS: &[&str] = &[
    "зауваження",
    "догана",
    "сувора догана",
    "попереджено про неповну службову відповідність",
    "звільнення",
    ARTICLE_19_PART_13_PHRASE,
    ARTICLE_19_PART_11_PHRASE,
    OTHER_PENALTY_OPTION,
];

/// Options that are valid free choices under Article 13.
pub fn article_13_options() -> impl Iterator<Item = &'static str> {
    PENALTY_OPTIONS
        .iter()
        .copied()
        .filter(|o| *o != ARTICLE_19_PART_11_PHRASE && *o != ARTICLE_19_PART_13_PHRASE)
}

// ── Decision type ───────────────────────────────────────────────────

/// Legal basis for concluding a case against one officer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum DecisionType {
    #[serde(rename = "ARTICLE_13")]
    Article13,
    #[serde(rename = "ARTICLE_19_PART_11")]
    Article19Part11,
    #[serde(rename = "ARTICLE_19_PART_13")]
    Article19Part13,
}

impl DecisionType {
    pub fn as_str(self) -> &'static str {
        match self {
            DecisionType::Article13 => "ARTICLE_13",
            DecisionType::Article19Part11 => "ARTICLE_19_PART_11",
            DecisionType::Article19Part13 => "ARTICLE_19_PART_13",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DecisionType::Article13 => "ст. 13 Дисциплінарного статуту",
            DecisionType::Article19Part11 => "ч. 11 ст. 19 Дисциплінарного статуту",
            DecisionType::Article19Part13 => "ч. 13 ст. 19 Дисциплінарного статуту",
        }
    }

    /// The fixed text the Article 19 variants always resolve to.
    pub fn canonical_phrase(self) -> Option<&'static str> {
        match self {
            DecisionType::Article13 => None,
            DecisionType::Article19Part11 => Some(ARTICLE_19_PART_11_PHRASE),
            DecisionType::Article19Part13 => Some(ARTICLE_19_PART_13_PHRASE),
        }
    }

    /// Only Article 13 penalties are imposed by a separate disciplinary order.
    pub fn requires_order(self) -> bool {
        matches!(self, DecisionType::Article13)
    }
}

// ── Entries ─────────────────────────────────────────────────────────

/// Where a ledger entry came from. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EntryOrigin {
    /// Written through the structured ledger by an operator.
    #[default]
    Confirmed,
    /// Reconstructed from the legacy single-officer columns. Best effort.
    InferredFromLegacy,
}

/// One officer's decision, embedded in the record's serialized penalty list.
///
/// The list predates this crate's naming, so its keys stay camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PenaltyEntry {
    pub officer_id: String,
    pub decision_type: DecisionType,
    #[serde(default)]
    pub penalty_text: String,
    #[serde(default, rename = "penaltyOther", skip_serializing_if = "Option::is_none")]
    pub penalty_other_text: Option<String>,
    #[serde(skip)]
    pub origin: EntryOrigin,
}

impl PenaltyEntry {
    /// Text to show: the free-text alternative when "other" was chosen.
    pub fn display_text(&self) -> &str {
        if self.penalty_text == OTHER_PENALTY_OPTION {
            if let Some(other) = self.penalty_other_text.as_deref() {
                if !other.trim().is_empty() {
                    return other.trim();
                }
            }
        }
        &self.penalty_text
    }

    pub fn is_inferred(&self) -> bool {
        self.origin == EntryOrigin::InferredFromLegacy
    }
}

/// Single-officer penalty columns written before per-officer entries existed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LegacyPenalty {
    #[serde(default)]
    pub officer_id: Option<String>,
    #[serde(default)]
    pub penalty_type: Option<String>,
    #[serde(default)]
    pub penalty_other: Option<String>,
}

impl LegacyPenalty {
    pub fn is_empty(&self) -> bool {
        let blank = |v: &Option<String>| v.as_deref().map_or(true, |s| s.trim().is_empty());
        blank(&self.officer_id) || blank(&self.penalty_type)
    }
}
