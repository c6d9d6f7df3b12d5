//! Core Kernel - Foundational types shared by the claims triage crates
//!
//! This crate provides the building blocks used across the workspace:
//! - Money and ISO 4217 currency codes with precise decimal arithmetic
//! - Calendar-day arithmetic on dates (policy age and friends)
//! - The common kernel error type

pub mod money;
pub mod temporal;
pub mod error;

pub use money::{ensure_positive, Money, Currency, MoneyError};
pub use temporal::{DateSpan, TemporalError, days_between};
pub use error::CoreError;
