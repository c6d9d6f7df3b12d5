//! Claims Triage Domain
//!
//! This crate scores an incoming claim submission ahead of adjudication.
//!
//! # Pipeline
//!
//! ```text
//! ClaimSubmission -> (validate) -> ClaimRequest -> RuleSet -> RuleEvaluation
//!                                                          -> classify -> ClaimResponse
//! ```
//!
//! The rule evaluation step is pure: no I/O, no logging, no hidden state.
//! Validation and response assembly live around it.

pub mod schema;
pub mod rules;
pub mod classification;
pub mod response;
pub mod triage;
pub mod error;

pub use schema::{
    Attachments, AttachmentsSubmission, Claimant, ClaimantSubmission, ClaimRequest,
    ClaimSubmission, Policy,
};
pub use rules::{evaluate_rules, RuleEvaluation, RuleSet, RuleThresholds, TriageRule, RULES_VERSION};
pub use classification::{classify, Classification, Complexity, RecommendedPath, SlaPriority};
pub use response::ClaimResponse;
pub use triage::ClaimTriage;
pub use error::TriageError;
