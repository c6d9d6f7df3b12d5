//! Triage service
//!
//! Glues validation, rule evaluation and classification together and logs
//! one structured event per assessed claim.

use tracing::{debug, info, warn};

use crate::classification::classify;
use crate::error::TriageError;
use crate::response::ClaimResponse;
use crate::rules::{RuleSet, RuleThresholds};
use crate::schema::{ClaimRequest, ClaimSubmission};

/// Stateless claim triage over a fixed rule set
///
/// Holds no mutable state, so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct ClaimTriage {
    rules: RuleSet,
}

impl ClaimTriage {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Builds a triage service over the standard rules with custom thresholds
    ///
    /// # Errors
    ///
    /// Returns `TriageError::Core` if the thresholds are unusable
    pub fn with_thresholds(thresholds: RuleThresholds) -> Result<Self, TriageError> {
        thresholds.validate()?;
        Ok(Self::new(RuleSet::with_thresholds(thresholds)))
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Scores and classifies an already validated claim
    pub fn assess(&self, claim: &ClaimRequest) -> ClaimResponse {
        let evaluation = self.rules.evaluate(claim);
        let classification = classify(&evaluation);

        info!(
            claim_id = %claim.claim_id,
            claim_type = %claim.claim_type,
            amount = %claim.claimed_money(),
            policy_age_days = claim.policy_age_days(),
            risk_score = evaluation.risk_score,
            fraud_score = evaluation.fraud_score,
            factors = evaluation.factors.len(),
            path = %classification.recommended_path,
            "Claim triaged"
        );

        ClaimResponse::new(
            claim.claim_id.clone(),
            evaluation,
            classification,
            self.rules.version(),
        )
    }

    /// Validates a raw submission, then assesses it
    pub fn assess_submission(
        &self,
        submission: ClaimSubmission,
    ) -> Result<ClaimResponse, TriageError> {
        debug!(claim_id = %submission.claim_id, "Validating claim submission");

        let claim = ClaimRequest::try_from(submission).map_err(|e| {
            warn!(error = %e, "Claim submission rejected");
            e
        })?;

        Ok(self.assess(&claim))
    }
}
