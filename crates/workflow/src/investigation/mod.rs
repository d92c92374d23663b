//! Service-investigation lifecycle: transitions, penalty decisions, the
//! derived timeline and stage-dependent form fields.

pub mod fields;
pub mod penalty_ledger;
pub mod stage_machine;
pub mod timeline;

pub use fields::{visible_fields, visible_fields_for_draft};
pub use penalty_ledger::{infer_from_legacy, PenaltyLedger};
pub use stage_machine::{is_allowed, target_stage, StageMachine, Transition};
pub use timeline::build_timeline;
