//! Property-Based Test Generators
//!
//! Provides proptest strategies that produce valid claim data.

use chrono::{Days, NaiveDate};
use core_kernel::Currency;
use domain_triage::ClaimRequest;
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::builders::ClaimBuilder;

/// Strategy for generating valid Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::ALL.to_vec())
}

/// Strategy for generating positive amounts with two decimal places
/// (0.01 to 1,000,000.00)
pub fn positive_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for generating policy start dates between 2015 and 2025
pub fn policy_start_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..3650u64).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2015, 1, 1).unwrap() + Days::new(offset)
    })
}

/// Strategy for generating policy ages, weighted towards the new-policy window
pub fn policy_age_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![
        3 => 0i64..120i64,
        1 => 120i64..3000i64,
    ]
}

/// Strategy for generating non-negative evidence and history counts
pub fn count_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![
        3 => 0i64..6i64,
        1 => 6i64..500i64,
    ]
}

/// Strategy for generating short identifier strings
pub fn identifier_strategy() -> impl Strategy<Value = String> {
    "[A-Z]{3}-[0-9]{1,8}"
}

/// Strategy for generating claim types
pub fn claim_type_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["auto", "property", "health", "travel", "liability"])
        .prop_map(str::to_string)
}

/// Strategy for generating a builder that produces a valid claim
pub fn claim_builder_strategy() -> impl Strategy<Value = ClaimBuilder> {
    (
        (identifier_strategy(), claim_type_strategy(), currency_strategy()),
        positive_amount_strategy(),
        policy_start_strategy(),
        policy_age_strategy(),
        (count_strategy(), count_strategy(), count_strategy()),
    )
        .prop_map(
            |((claim_id, claim_type, currency), amount, start, age, (prior, photos, docs))| {
                ClaimBuilder::new()
                    .with_claim_id(claim_id)
                    .with_claim_type(claim_type)
                    .with_currency(currency.code())
                    .with_amount(amount)
                    .with_policy_start(start)
                    .with_policy_age_days(age)
                    .with_prior_claims(prior)
                    .with_photos(photos)
                    .with_documents(docs)
            },
        )
}

/// Strategy for generating valid claim requests
pub fn claim_request_strategy() -> impl Strategy<Value = ClaimRequest> {
    claim_builder_strategy().prop_map(|builder| builder.build())
}
