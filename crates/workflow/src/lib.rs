//! Workflow core for unified administrative records.
//!
//! Pure engines (classification, legal-text composition, the investigation
//! stage machine, penalty ledger, timeline and record queries) plus a thin
//! service layer that wires them to the persistence and audit collaborators.

pub mod classifier;
pub mod collaborators;
pub mod composer;
pub mod config;
pub mod export;
pub mod investigation;
pub mod query;
pub mod service;
