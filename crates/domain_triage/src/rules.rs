//! Triage rule table and evaluator
//!
//! Rules are data: each [`TriageRule`] pairs a predicate with the score it
//! adds and the decision factor it explains itself with. A [`RuleSet`]
//! walks its rules in declaration order, so the factor list always follows
//! rule order rather than severity.
//!
//! | Code | Condition | risk | fraud |
//! |---|---|---|---|
//! | `NEW_POLICY_HIGH_AMOUNT` | policy age < 60 days and amount > 5000 | +0.3 | +0.2 |
//! | `MULTIPLE_PRIOR_CLAIMS` | prior claims >= 3 | +0.2 | |
//! | `LOW_PHOTO_EVIDENCE` | photos < 2 | | +0.2 |
//!
//! Evaluation never fails and has no side effects.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::CoreError;
use crate::schema::ClaimRequest;

/// Version stamped into every response produced by the standard table
pub const RULES_VERSION: &str = "1.0.0";

/// Tunable limits referenced by the standard rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleThresholds {
    /// Policies younger than this many days count as new
    pub new_policy_days: i64,
    /// Amounts strictly above this count as high
    pub high_claim_amount: Decimal,
    /// This many prior claims or more counts as multiple
    pub prior_claims_limit: u32,
    /// Fewer photos than this counts as weak evidence
    pub min_supporting_photos: u32,
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            new_policy_days: 60,
            high_claim_amount: dec!(5000),
            prior_claims_limit: 3,
            min_supporting_photos: 2,
        }
    }
}

impl RuleThresholds {
    /// Rejects thresholds that would make a rule meaningless
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.new_policy_days <= 0 {
            return Err(CoreError::configuration(format!(
                "new_policy_days must be positive, got {}",
                self.new_policy_days
            )));
        }
        if self.high_claim_amount.is_sign_negative() {
            return Err(CoreError::configuration(format!(
                "high_claim_amount must not be negative, got {}",
                self.high_claim_amount
            )));
        }
        if self.prior_claims_limit == 0 {
            return Err(CoreError::configuration(
                "prior_claims_limit must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Predicate deciding whether a rule fires for a claim
pub type RulePredicate = fn(&ClaimRequest, &RuleThresholds) -> bool;

/// A single entry in the rule table
#[derive(Clone, Copy)]
pub struct TriageRule {
    /// Stable identifier
    pub code: &'static str,
    /// Decision factor appended when the rule fires
    pub factor: &'static str,
    /// Added to the risk score when the rule fires
    pub risk_delta: f64,
    /// Added to the fraud score when the rule fires
    pub fraud_delta: f64,
    predicate: RulePredicate,
}

impl TriageRule {
    pub const fn new(
        code: &'static str,
        factor: &'static str,
        risk_delta: f64,
        fraud_delta: f64,
        predicate: RulePredicate,
    ) -> Self {
        Self {
            code,
            factor,
            risk_delta,
            fraud_delta,
            predicate,
        }
    }

    /// Returns true if this rule fires for the claim
    pub fn applies(&self, claim: &ClaimRequest, thresholds: &RuleThresholds) -> bool {
        (self.predicate)(claim, thresholds)
    }
}

impl fmt::Debug for TriageRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriageRule")
            .field("code", &self.code)
            .field("factor", &self.factor)
            .field("risk_delta", &self.risk_delta)
            .field("fraud_delta", &self.fraud_delta)
            .finish_non_exhaustive()
    }
}

fn new_policy_high_amount(claim: &ClaimRequest, t: &RuleThresholds) -> bool {
    claim.policy_age_days() < t.new_policy_days
        && claim.claimed_money().exceeds(t.high_claim_amount)
}

fn multiple_prior_claims(claim: &ClaimRequest, t: &RuleThresholds) -> bool {
    claim.claimant.prior_claims_count >= t.prior_claims_limit
}

fn low_photo_evidence(claim: &ClaimRequest, t: &RuleThresholds) -> bool {
    claim.attachments.photos_count < t.min_supporting_photos
}

/// The standard rule table, in evaluation order
pub const STANDARD_RULES: [TriageRule; 3] = [
    TriageRule::new(
        "NEW_POLICY_HIGH_AMOUNT",
        "New policy with high claim amount",
        0.3,
        0.2,
        new_policy_high_amount,
    ),
    TriageRule::new(
        "MULTIPLE_PRIOR_CLAIMS",
        "Multiple prior claims",
        0.2,
        0.0,
        multiple_prior_claims,
    ),
    TriageRule::new(
        "LOW_PHOTO_EVIDENCE",
        "Low number of supporting photos",
        0.0,
        0.2,
        low_photo_evidence,
    ),
];

/// Scores and factors produced by a rule set
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RuleEvaluation {
    pub risk_score: f64,
    pub fraud_score: f64,
    /// Factors of the rules that fired, in rule order
    pub factors: Vec<String>,
}

impl RuleEvaluation {
    /// Returns true if no rule fired
    pub fn is_clean(&self) -> bool {
        self.factors.is_empty()
    }

    /// Splits into `(risk_score, fraud_score, factors)`
    pub fn into_parts(self) -> (f64, f64, Vec<String>) {
        (self.risk_score, self.fraud_score, self.factors)
    }
}

impl From<RuleEvaluation> for (f64, f64, Vec<String>) {
    fn from(evaluation: RuleEvaluation) -> Self {
        evaluation.into_parts()
    }
}

/// An ordered rule table plus the thresholds its predicates read
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<TriageRule>,
    thresholds: RuleThresholds,
}

impl RuleSet {
    /// The standard table with default thresholds
    pub fn standard() -> Self {
        Self::with_thresholds(RuleThresholds::default())
    }

    /// The standard table with custom thresholds
    pub fn with_thresholds(thresholds: RuleThresholds) -> Self {
        Self {
            rules: STANDARD_RULES.to_vec(),
            thresholds,
        }
    }

    pub fn rules(&self) -> &[TriageRule] {
        &self.rules
    }

    pub fn thresholds(&self) -> &RuleThresholds {
        &self.thresholds
    }

    pub fn version(&self) -> &'static str {
        RULES_VERSION
    }

    /// Evaluates every rule in order and accumulates the scores
    ///
    /// Scores start at zero and are not capped.
    pub fn evaluate(&self, claim: &ClaimRequest) -> RuleEvaluation {
        self.rules
            .iter()
            .filter(|rule| rule.applies(claim, &self.thresholds))
            .fold(RuleEvaluation::default(), |mut acc, rule| {
                acc.risk_score += rule.risk_delta;
                acc.fraud_score += rule.fraud_delta;
                acc.factors.push(rule.factor.to_string());
                acc
            })
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

/// Evaluates the standard rule table against a claim
pub fn evaluate_rules(claim: &ClaimRequest) -> RuleEvaluation {
    RuleSet::standard().evaluate(claim)
}
