//! Request handlers

pub mod health;
pub mod rules;
pub mod triage;
