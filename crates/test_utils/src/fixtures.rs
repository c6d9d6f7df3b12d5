//! Pre-built Test Fixtures
//!
//! Ready-to-use dates, factor texts and the reference triage scenarios.
//! Everything here is deterministic.

use chrono::NaiveDate;
use domain_triage::ClaimRequest;
use rust_decimal_macros::dec;

use crate::builders::ClaimBuilder;

/// Factor text of the new-policy/high-amount rule
pub const NEW_POLICY_FACTOR: &str = "New policy with high claim amount";
/// Factor text of the prior-claims rule
pub const PRIOR_CLAIMS_FACTOR: &str = "Multiple prior claims";
/// Factor text of the photo-evidence rule
pub const LOW_PHOTOS_FACTOR: &str = "Low number of supporting photos";

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard policy start date (Jan 1, 2024)
    pub fn policy_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    /// Policy start for a long-standing policy (Jan 1, 2020)
    pub fn mature_policy_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
    }

    /// Standard submission date, well past the new-policy window
    pub fn submission_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    /// Standard incident date, a few days before submission
    pub fn incident_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 28).unwrap()
    }
}

/// Fixture for string test data
pub struct StringFixtures;

impl StringFixtures {
    pub fn claim_id() -> &'static str {
        "CLM-0001"
    }

    pub fn policy_id() -> &'static str {
        "POL-0001"
    }

    pub fn claim_type() -> &'static str {
        "auto"
    }
}

/// The four reference scenarios for the standard rule table
pub struct ScenarioFixtures;

impl ScenarioFixtures {
    /// 14-day-old policy, 6000 claimed, clean history, 3 photos
    ///
    /// Expect risk 0.3, fraud 0.2, new-policy factor only.
    pub fn new_policy_high_amount() -> ClaimRequest {
        ClaimBuilder::new()
            .with_policy_start(TemporalFixtures::policy_start())
            .with_submission_date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
            .with_amount(dec!(6000))
            .with_prior_claims(0)
            .with_photos(3)
            .build()
    }

    /// Four-year-old policy, 100 claimed, 5 prior claims, no photos
    ///
    /// Expect risk 0.2, fraud 0.2, prior-claims then low-photos factors.
    pub fn repeat_claimant_without_photos() -> ClaimRequest {
        ClaimBuilder::new()
            .with_policy_start(TemporalFixtures::mature_policy_start())
            .with_submission_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .with_amount(dec!(100))
            .with_prior_claims(5)
            .with_photos(0)
            .build()
    }

    /// 60-day-old policy, 10000 claimed, clean history, 5 photos
    ///
    /// Expect zero scores and no factors.
    pub fn clean_claim() -> ClaimRequest {
        ClaimBuilder::new()
            .with_policy_start(TemporalFixtures::policy_start())
            .with_submission_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
            .with_amount(dec!(10000))
            .with_prior_claims(0)
            .with_photos(5)
            .build()
    }

    /// 10-day-old policy, 8000 claimed, 4 prior claims, 1 photo
    ///
    /// Expect risk 0.5, fraud 0.4, all three factors in rule order.
    pub fn all_rules_triggered() -> ClaimRequest {
        ClaimBuilder::new()
            .with_policy_start(TemporalFixtures::policy_start())
            .with_policy_age_days(10)
            .with_amount(dec!(8000))
            .with_prior_claims(4)
            .with_photos(1)
            .build()
    }
}
