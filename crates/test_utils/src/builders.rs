//! Test Data Builders
//!
//! Provides a builder for claim submissions with sensible defaults, so
//! tests only spell out the fields the rule under test looks at.

use chrono::{Days, NaiveDate};
use domain_triage::{
    Attachments, AttachmentsSubmission, Claimant, ClaimantSubmission, ClaimRequest,
    ClaimSubmission, Policy, TriageError,
};
use core_kernel::Currency;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

use crate::fixtures::{StringFixtures, TemporalFixtures};

/// Builder for claim submissions and validated claim requests
#[derive(Debug, Clone)]
pub struct ClaimBuilder {
    claim_id: String,
    claim_type: String,
    claim_amount: Decimal,
    currency: String,
    incident_date: Option<NaiveDate>,
    submission_date: NaiveDate,
    policy_id: String,
    policy_start_date: NaiveDate,
    prior_claims_count: i64,
    photos_count: i64,
    documents_count: i64,
}

impl Default for ClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimBuilder {
    /// Creates a builder for a clean claim: mature policy, modest amount,
    /// no prior claims and three photos
    pub fn new() -> Self {
        Self {
            claim_id: StringFixtures::claim_id().to_string(),
            claim_type: StringFixtures::claim_type().to_string(),
            claim_amount: dec!(1000.00),
            currency: Currency::USD.code().to_string(),
            incident_date: Some(TemporalFixtures::incident_date()),
            submission_date: TemporalFixtures::submission_date(),
            policy_id: StringFixtures::policy_id().to_string(),
            policy_start_date: TemporalFixtures::policy_start(),
            prior_claims_count: 0,
            photos_count: 3,
            documents_count: 1,
        }
    }

    pub fn with_claim_id(mut self, id: impl Into<String>) -> Self {
        self.claim_id = id.into();
        self
    }

    pub fn with_claim_type(mut self, claim_type: impl Into<String>) -> Self {
        self.claim_type = claim_type.into();
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.claim_amount = amount;
        self
    }

    pub fn with_currency(mut self, code: impl Into<String>) -> Self {
        self.currency = code.into();
        self
    }

    pub fn with_policy_id(mut self, id: impl Into<String>) -> Self {
        self.policy_id = id.into();
        self
    }

    pub fn with_policy_start(mut self, date: NaiveDate) -> Self {
        self.policy_start_date = date;
        self
    }

    /// Sets the submission date; the incident date follows it unless set explicitly
    pub fn with_submission_date(mut self, date: NaiveDate) -> Self {
        self.submission_date = date;
        self.incident_date = None;
        self
    }

    pub fn with_incident_date(mut self, date: NaiveDate) -> Self {
        self.incident_date = Some(date);
        self
    }

    /// Places the submission `days` calendar days after the policy start
    ///
    /// Negative values put the submission before the policy start.
    pub fn with_policy_age_days(self, days: i64) -> Self {
        let start = self.policy_start_date;
        let submitted = if days >= 0 {
            start + Days::new(days.unsigned_abs())
        } else {
            start - Days::new(days.unsigned_abs())
        };
        self.with_submission_date(submitted)
    }

    pub fn with_prior_claims(mut self, count: i64) -> Self {
        self.prior_claims_count = count;
        self
    }

    pub fn with_photos(mut self, count: i64) -> Self {
        self.photos_count = count;
        self
    }

    pub fn with_documents(mut self, count: i64) -> Self {
        self.documents_count = count;
        self
    }

    fn incident(&self) -> NaiveDate {
        self.incident_date.unwrap_or(self.submission_date)
    }

    /// Builds the raw, unvalidated submission
    pub fn build_submission(&self) -> ClaimSubmission {
        ClaimSubmission {
            claim_id: self.claim_id.clone(),
            claim_type: self.claim_type.clone(),
            claim_amount: self.claim_amount,
            currency: self.currency.clone(),
            incident_date: self.incident(),
            submission_date: self.submission_date,
            policy: Policy {
                policy_id: self.policy_id.clone(),
                policy_start_date: self.policy_start_date,
            },
            claimant: ClaimantSubmission {
                prior_claims_count: self.prior_claims_count,
            },
            attachments: AttachmentsSubmission {
                photos_count: self.photos_count,
                documents_count: self.documents_count,
            },
        }
    }

    /// Validates the submission into a request
    pub fn try_build(&self) -> Result<ClaimRequest, TriageError> {
        ClaimRequest::try_from(self.build_submission())
    }

    /// Builds a validated request
    ///
    /// # Panics
    ///
    /// Panics if the builder holds data that fails validation
    pub fn build(&self) -> ClaimRequest {
        match self.try_build() {
            Ok(request) => request,
            Err(e) => panic!("ClaimBuilder produced an invalid claim: {}", e),
        }
    }

    /// Builds a request without validation
    ///
    /// Lets tests reach states validation forbids, such as a submission
    /// before the policy start.
    ///
    /// # Panics
    ///
    /// Panics on an unknown currency or a count outside `u32`
    pub fn build_unchecked(&self) -> ClaimRequest {
        let count = |v: i64| u32::try_from(v).expect("count must fit in u32");
        ClaimRequest {
            claim_id: self.claim_id.clone(),
            claim_type: self.claim_type.clone(),
            claim_amount: self.claim_amount,
            currency: self.currency.parse().expect("known currency"),
            incident_date: self.incident(),
            submission_date: self.submission_date,
            policy: Policy {
                policy_id: self.policy_id.clone(),
                policy_start_date: self.policy_start_date,
            },
            claimant: Claimant {
                prior_claims_count: count(self.prior_claims_count),
            },
            attachments: Attachments {
                photos_count: count(self.photos_count),
                documents_count: count(self.documents_count),
            },
        }
    }

    /// The submission as a JSON body
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self.build_submission()).expect("submission serializes")
    }
}
