use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::penalty::DecisionType;
use crate::record::OfficerRef;

// ---------------------------------------------------------------------------
// Stages
// ---------------------------------------------------------------------------

/// Lifecycle stage of a service investigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestigationStage {
    #[default]
    ReportReview,
    SrInitiated,
    SrOrderAssigned,
    SrCompletedLawful,
    SrCompletedUnlawful,
    CheckCompletedNoViolation,
}

impl InvestigationStage {
    pub const ALL: [InvestigationStage; 6] = [
        InvestigationStage::ReportReview,
        InvestigationStage::SrInitiated,
        InvestigationStage::SrOrderAssigned,
        InvestigationStage::SrCompletedLawful,
        InvestigationStage::SrCompletedUnlawful,
        InvestigationStage::CheckCompletedNoViolation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InvestigationStage::ReportReview => "REPORT_REVIEW",
            InvestigationStage::SrInitiated => "SR_INITIATED",
            InvestigationStage::SrOrderAssigned => "SR_ORDER_ASSIGNED",
            InvestigationStage::SrCompletedLawful => "SR_COMPLETED_LAWFUL",
            InvestigationStage::SrCompletedUnlawful => "SR_COMPLETED_UNLAWFUL",
            InvestigationStage::CheckCompletedNoViolation => "CHECK_COMPLETED_NO_VIOLATION",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_uppercase().as_str() {
            "REPORT_REVIEW" => Some(InvestigationStage::ReportReview),
            "SR_INITIATED" => Some(InvestigationStage::SrInitiated),
            "SR_ORDER_ASSIGNED" => Some(InvestigationStage::SrOrderAssigned),
            "SR_COMPLETED_LAWFUL" => Some(InvestigationStage::SrCompletedLawful),
            "SR_COMPLETED_UNLAWFUL" => Some(InvestigationStage::SrCompletedUnlawful),
            "CHECK_COMPLETED_NO_VIOLATION" => Some(InvestigationStage::CheckCompletedNoViolation),
            _ => None,
        }
    }

    /// Position along the process. All terminal stages share the last slot.
    pub fn order(self) -> u8 {
        match self {
            InvestigationStage::ReportReview => 1,
            InvestigationStage::SrInitiated => 2,
            InvestigationStage::SrOrderAssigned => 3,
            InvestigationStage::SrCompletedLawful
            | InvestigationStage::SrCompletedUnlawful
            | InvestigationStage::CheckCompletedNoViolation => 4,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            InvestigationStage::SrCompletedLawful
                | InvestigationStage::SrCompletedUnlawful
                | InvestigationStage::CheckCompletedNoViolation
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            InvestigationStage::ReportReview => "Етап 1: розгляд рапорту/доповідної",
            InvestigationStage::SrInitiated => "Етап 2: ініційовано службове розслідування",
            InvestigationStage::SrOrderAssigned => "Етап 3: наказ про призначення СР",
            InvestigationStage::SrCompletedLawful => "Завершено: дії правомірні",
            InvestigationStage::SrCompletedUnlawful => "Завершено: дії неправомірні",
            InvestigationStage::CheckCompletedNoViolation => {
                "Завершено: порушень дисципліни не виявлено"
            }
        }
    }
}

/// Outcome of a completed investigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinalResult {
    Lawful,
    Unlawful,
}

impl FinalResult {
    pub fn as_str(self) -> &'static str {
        match self {
            FinalResult::Lawful => "LAWFUL",
            FinalResult::Unlawful => "UNLAWFUL",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_uppercase().as_str() {
            "LAWFUL" => Some(FinalResult::Lawful),
            "UNLAWFUL" => Some(FinalResult::Unlawful),
            _ => None,
        }
    }
}

/// Document that opened the investigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    Report,
    Memo,
}

impl DocumentType {
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentType::Report => "REPORT",
            DocumentType::Memo => "MEMO",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_uppercase().as_str() {
            "REPORT" => Some(DocumentType::Report),
            "MEMO" => Some(DocumentType::Memo),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentType::Report => "Рапорт",
            DocumentType::Memo => "Доповідна записка",
        }
    }
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// Payload-free action discriminant, used for catalogues and audit names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceActionKind {
    CloseNoViolation,
    InitiateSr,
    SetOrder,
    CompleteLawful,
    CompleteUnlawful,
}

impl ServiceActionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceActionKind::CloseNoViolation => "CLOSE_NO_VIOLATION",
            ServiceActionKind::InitiateSr => "INITIATE_SR",
            ServiceActionKind::SetOrder => "SET_ORDER",
            ServiceActionKind::CompleteLawful => "COMPLETE_LAWFUL",
            ServiceActionKind::CompleteUnlawful => "COMPLETE_UNLAWFUL",
        }
    }

    /// Button caption shown to the operator.
    pub fn label(self) -> &'static str {
        match self {
            ServiceActionKind::CloseNoViolation => {
                "Проведено перевірку - порушень службової дисципліни не виявлено"
            }
            ServiceActionKind::InitiateSr => "Ініційовано проведення службового розслідування",
            ServiceActionKind::SetOrder => "Призначено СР (Наказ № ... від ...)",
            ServiceActionKind::CompleteLawful => "Проведено СР - дії правомірні",
            ServiceActionKind::CompleteUnlawful => "Завершити СР (дії неправомірні)",
        }
    }
}

/// Returns the actions an operator may submit in the given stage.
pub fn allowed_actions(stage: InvestigationStage) -> &'static [ServiceActionKind] {
    match stage {
        InvestigationStage::ReportReview => &[
            ServiceActionKind::CloseNoViolation,
            ServiceActionKind::InitiateSr,
        ],
        InvestigationStage::SrInitiated => &[ServiceActionKind::SetOrder],
        InvestigationStage::SrOrderAssigned => &[
            ServiceActionKind::CompleteLawful,
            ServiceActionKind::CompleteUnlawful,
        ],
        InvestigationStage::SrCompletedLawful
        | InvestigationStage::SrCompletedUnlawful
        | InvestigationStage::CheckCompletedNoViolation => &[],
    }
}

/// Order appointing the investigation (SET_ORDER payload).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct OrderAssignment {
    #[serde(default)]
    pub order_number: String,
    #[serde(default)]
    pub order_date: Option<NaiveDate>,
}

/// One officer's decision as submitted from the completion form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PenaltyInput {
    pub officer_id: String,
    pub decision_type: DecisionType,
    #[serde(default)]
    pub penalty_text: Option<String>,
    #[serde(default)]
    pub penalty_other: Option<String>,
}

/// Conclusion of an investigation that found unlawful actions
/// (COMPLETE_UNLAWFUL payload).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UnlawfulConclusion {
    #[serde(default)]
    pub conclusion_approved_at: Option<NaiveDate>,
    #[serde(default)]
    pub violation_summary: Option<String>,
    /// Officers tagged on the completion form. Merged into the record's
    /// officer list before penalties are checked.
    #[serde(default)]
    pub tagged_officers: Vec<OfficerRef>,
    #[serde(default)]
    pub penalties: Vec<PenaltyInput>,
    #[serde(default)]
    pub penalty_order_number: Option<String>,
    #[serde(default)]
    pub penalty_order_date: Option<NaiveDate>,
}

/// A stage transition intent: one constructor per action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(tag = "action", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceAction {
    CloseNoViolation,
    InitiateSr,
    SetOrder(OrderAssignment),
    CompleteLawful,
    CompleteUnlawful(UnlawfulConclusion),
}

impl ServiceAction {
    pub fn kind(&self) -> ServiceActionKind {
        match self {
            ServiceAction::CloseNoViolation => ServiceActionKind::CloseNoViolation,
            ServiceAction::InitiateSr => ServiceActionKind::InitiateSr,
            ServiceAction::SetOrder(_) => ServiceActionKind::SetOrder,
            ServiceAction::CompleteLawful => ServiceActionKind::CompleteLawful,
            ServiceAction::CompleteUnlawful(_) => ServiceActionKind::CompleteUnlawful,
        }
    }
}

// ---------------------------------------------------------------------------
// Form fields
// ---------------------------------------------------------------------------

/// Investigation form inputs whose visibility depends on the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    OrderNumber,
    OrderDate,
    TaggedOfficers,
    PenaltyEntries,
    ViolationSummary,
    ConclusionApprovedAt,
    PenaltyOrderNumber,
    PenaltyOrderDate,
    CompletionNotice,
}
