use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::RecordKind;

// ---------------------------------------------------------------------------
// Filter enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusFilter {
    #[default]
    All,
    /// Anything not yet processed.
    Pending,
    Processed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentFilter {
    #[default]
    All,
    Assigned,
    Unassigned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuickPreset {
    #[default]
    All,
    Mine,
    Overdue,
    Unassigned,
}

/// Sort orders offered on the record list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum SortKey {
    #[default]
    #[serde(rename = "registration_newest")]
    RegistrationNewest,
    #[serde(rename = "registration_oldest")]
    RegistrationOldest,
    #[serde(rename = "newest")]
    EventNewest,
    #[serde(rename = "oldest")]
    EventOldest,
    #[serde(rename = "eo_asc")]
    ReferenceAsc,
    #[serde(rename = "eo_desc")]
    ReferenceDesc,
}

// ---------------------------------------------------------------------------
// Filter set
// ---------------------------------------------------------------------------

/// Independent predicates combined with AND, plus one sort key.
///
/// `None`/`All`/empty-string values disable their predicate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct RecordFilters {
    /// Kind tab; `None` shows every kind.
    pub kind: Option<RecordKind>,
    pub search: String,
    pub category: Option<String>,
    pub status: StatusFilter,
    pub assignment: AssignmentFilter,
    pub reference_number: String,
    pub inspector_id: Option<String>,
    pub preset: QuickPreset,
    pub period_from: Option<NaiveDate>,
    pub period_to: Option<NaiveDate>,
    /// Actor id the `Mine` preset compares against.
    pub current_user_id: Option<String>,
    pub sort: SortKey,
}

/// Dashboard counters over a record snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RecordStats {
    pub total: usize,
    pub processed: usize,
    pub unassigned: usize,
    pub overdue: usize,
    pub due_soon: usize,
}
