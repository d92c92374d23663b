//! Structured operator input for the generated report and protocol texts.
//!
//! Dates arrive as ISO `YYYY-MM-DD` strings and times as `HH:MM`, exactly as
//! the intake form submits them; the composers tolerate anything else.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ── Force usage ─────────────────────────────────────────────────────

/// Coercive measures, in declaration order (the order validation runs in).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub enum ForceKey {
    Weapon,
    TearGas,
    Baton,
    Handcuffs,
    #[serde(alias = "force")]
    PhysicalForce,
}

impl ForceKey {
    pub const ALL: [ForceKey; 5] = [
        ForceKey::Weapon,
        ForceKey::TearGas,
        ForceKey::Baton,
        ForceKey::Handcuffs,
        ForceKey::PhysicalForce,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ForceKey::Weapon => "Зброя",
            ForceKey::TearGas => "Засоби, споряджені речовинами сльозогінної та дратівної дії",
            ForceKey::Baton => "Гумовий кийок",
            ForceKey::Handcuffs => "Кайданки",
            ForceKey::PhysicalForce => "Фізична сила",
        }
    }

    /// Handcuffs are recorded as an interval, everything else as a moment.
    pub fn is_interval(self) -> bool {
        matches!(self, ForceKey::Handcuffs)
    }
}

/// One measure's row on the intake form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct ForceMeasureEntry {
    pub enabled: bool,
    pub date: String,
    pub time: String,
    pub from: String,
    pub to: String,
}

impl ForceMeasureEntry {
    /// Enabled moment-type entry.
    pub fn at(date: &str, time: &str) -> Self {
        Self {
            enabled: true,
            date: date.to_string(),
            time: time.to_string(),
            ..Self::default()
        }
    }

    /// Enabled interval-type entry.
    pub fn between(date: &str, from: &str, to: &str) -> Self {
        Self {
            enabled: true,
            date: date.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            ..Self::default()
        }
    }
}

pub type ForceUsage = BTreeMap<ForceKey, ForceMeasureEntry>;

/// All five measures present and disabled.
pub fn initial_force_usage() -> ForceUsage {
    ForceKey::ALL
        .into_iter()
        .map(|k| (k, ForceMeasureEntry::default()))
        .collect()
}

// ── Legal basis ─────────────────────────────────────────────────────

/// Legal-basis codes for force usage under the National Police Act.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum LegalKey {
    Art44P1Force,
    Art45P1AHandcuffs,
    Art45P1BHandcuffs,
    Art45P1VHandcuffs,
    Art45P1GHandcuffs,
    Art45P1GgHandcuffs,
    Art45P2ABaton,
    Art45P2BBaton,
    Art45P2VBaton,
    Art45P3ATeargas,
    Art45P3BTeargas,
}

impl LegalKey {
    pub const ALL: [LegalKey; 11] = [
        LegalKey::Art44P1Force,
        LegalKey::Art45P1AHandcuffs,
        LegalKey::Art45P1BHandcuffs,
        LegalKey::Art45P1VHandcuffs,
        LegalKey::Art45P1GHandcuffs,
        LegalKey::Art45P1GgHandcuffs,
        LegalKey::Art45P2ABaton,
        LegalKey::Art45P2BBaton,
        LegalKey::Art45P2VBaton,
        LegalKey::Art45P3ATeargas,
        LegalKey::Art45P3BTeargas,
    ];

    /// The fixed clause appended to the report when this code is set.
    pub fn clause(self) -> &'static str {
        match self {
            LegalKey::Art44P1Force => {
                "Відповідно до частини 1 статті 44 ЗУ \"Про Національну поліцію\" - застосовано фізичну силу"
            }
            LegalKey::Art45P1AHandcuffs => {
                "відповідно до ч.3 п.1 пп.а) ст. 45 ЗУ \"Про Національну поліцію\" - застосовані кайданки"
            }
            LegalKey::Art45P1BHandcuffs => {
                "відповідно до ч.3 п.1 пп.б) ст. 45 ЗУ \"Про Національну поліцію\" - застосовані кайданки"
            }
            LegalKey::Art45P1VHandcuffs => {
                "відповідно до ч.3 п.1 пп.в) ст. 45 ЗУ \"Про Національну поліцію\" - застосовані кайданки"
            }
            LegalKey::Art45P1GHandcuffs => {
                "відповідно до ч.3 п.1 пп.г) ст. 45 ЗУ \"Про Національну поліцію\" - застосовані кайданки"
            }
            LegalKey::Art45P1GgHandcuffs => {
                "відповідно до ч.3 п.1 пп.ґ) ст. 45 ЗУ \"Про Національну поліцію\" - застосовані кайданки"
            }
            LegalKey::Art45P2ABaton => {
                "відповідно до ч.3 п.2 пп.а) ст. 45 ЗУ \"Про Національну поліцію\" - застосовано гумовий кийок"
            }
            LegalKey::Art45P2BBaton => {
                "відповідно до ч.3 п.2 пп.б) ст. 45 ЗУ \"Про Національну поліцію\" - застосовано гумовий кийок"
            }
            LegalKey::Art45P2VBaton => {
                "відповідно до ч.3 п.2 пп.в) ст. 45 ЗУ \"Про Національну поліцію\" - застосовано гумовий кийок"
            }
            LegalKey::Art45P3ATeargas => {
                "відповідно до ч.3 п.3 пп.а) ст. 45 ЗУ \"Про Національну поліцію\" - застосовані засоби сльозогінної та дратівної дії"
            }
            LegalKey::Art45P3BTeargas => {
                "відповідно до ч.3 п.3 пп.б) ст. 45 ЗУ \"Про Національну поліцію\" - застосовані засоби сльозогінної та дратівної дії"
            }
        }
    }
}

pub type LegalBasisState = BTreeMap<LegalKey, bool>;

/// All eleven codes present and unset.
pub fn initial_legal_basis() -> LegalBasisState {
    LegalKey::ALL.into_iter().map(|k| (k, false)).collect()
}

// ── Detention protocol ──────────────────────────────────────────────

/// Initial wording of the purpose input on a new detention form.
pub const DEFAULT_DETENTION_PURPOSE: &str =
    "для припинення адміністративного правопорушення оформлення адміністративних матеріалів";
pub const DEFAULT_DETENTION_MATERIALS: &str = "Складено постанову/протокол";

/// Tri-state answer to "was a detention protocol prepared?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum ProtocolPrepared {
    #[serde(rename = "YES")]
    Yes,
    #[serde(rename = "NO")]
    No,
    #[default]
    #[serde(rename = "")]
    Unset,
}

/// Detention-window form fields feeding the protocol summary.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct ProtocolSummaryArgs {
    pub protocol_prepared: ProtocolPrepared,
    pub protocol_no_reason: String,
    pub protocol_series: String,
    pub protocol_number: String,
    pub detention_from_date: String,
    pub detention_from_time: String,
    pub detention_to_date: String,
    pub detention_to_time: String,
    pub detention_purpose: String,
    pub detention_materials: String,
}

impl ProtocolSummaryArgs {
    /// Fields as a new form starts out: the purpose pre-filled with the
    /// standard wording, everything else blank.
    pub fn new_form() -> Self {
        Self {
            detention_purpose: DEFAULT_DETENTION_PURPOSE.to_string(),
            ..Self::default()
        }
    }
}

/// Series and number recovered from a stored "Серія X № Y" reference.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProtocolNumber {
    pub series: String,
    pub number: String,
}
