//! Data transfer objects
//!
//! Claim submissions and triage responses are domain types and go over the
//! wire as-is; only shapes without a domain counterpart live here.

pub mod rules;
