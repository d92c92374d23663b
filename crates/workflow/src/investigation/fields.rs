use std::collections::BTreeSet;

use shared_types::{FormField, InvestigationStage};

use super::penalty_ledger::PenaltyLedger;

/// Form inputs the operator works with while a record is in `stage`.
pub fn visible_fields(stage: InvestigationStage) -> BTreeSet<FormField> {
    let fields: &[FormField] = match stage {
        InvestigationStage::ReportReview => &[],
        InvestigationStage::SrInitiated => &[FormField::OrderNumber, FormField::OrderDate],
        InvestigationStage::SrOrderAssigned => &[
            FormField::TaggedOfficers,
            FormField::PenaltyEntries,
            FormField::ViolationSummary,
            FormField::ConclusionApprovedAt,
            FormField::PenaltyOrderNumber,
            FormField::PenaltyOrderDate,
        ],
        InvestigationStage::SrCompletedLawful
        | InvestigationStage::SrCompletedUnlawful
        | InvestigationStage::CheckCompletedNoViolation => &[FormField::CompletionNotice],
    };
    fields.iter().copied().collect()
}

/// Like [`visible_fields`], but hides the disciplinary-order inputs until the
/// draft ledger holds a decision that needs an order.
pub fn visible_fields_for_draft(
    stage: InvestigationStage,
    draft: &PenaltyLedger,
) -> BTreeSet<FormField> {
    let mut fields = visible_fields(stage);
    if !draft.requires_order() {
        fields.remove(&FormField::PenaltyOrderNumber);
        fields.remove(&FormField::PenaltyOrderDate);
    }
    fields
}
