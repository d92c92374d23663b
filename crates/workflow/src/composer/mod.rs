//! Canonical legal text assembled from structured operator input.
//!
//! Every function here is pure. Validation failures come back as values so
//! the calling form stays interactive.

pub mod force;
pub mod format;
pub mod legal;
pub mod protocol;

pub use force::{build_force_description, ForceUsageError};
pub use format::{add_one_day, format_date_ua, format_time_ua, is_time_earlier};
pub use legal::build_legal_basis_clause;
pub use protocol::{
    build_protocol_summary, format_protocol_reference, parse_detention_protocol_value,
    protocol_heading,
};
