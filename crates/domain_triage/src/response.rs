//! Triage response

use serde::{Deserialize, Serialize};

use crate::classification::{Classification, Complexity, RecommendedPath, SlaPriority};
use crate::rules::RuleEvaluation;

/// Result of triaging a single claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimResponse {
    pub claim_id: String,
    pub risk_score: f64,
    pub fraud_score: f64,
    pub complexity: Complexity,
    pub recommended_path: RecommendedPath,
    pub sla_priority: SlaPriority,
    /// Factors of the rules that fired, in rule order
    pub decision_factors: Vec<String>,
    pub rules_version: String,
}

impl ClaimResponse {
    /// Assembles a response from its evaluated parts
    pub fn new(
        claim_id: impl Into<String>,
        evaluation: RuleEvaluation,
        classification: Classification,
        rules_version: impl Into<String>,
    ) -> Self {
        Self {
            claim_id: claim_id.into(),
            risk_score: evaluation.risk_score,
            fraud_score: evaluation.fraud_score,
            complexity: classification.complexity,
            recommended_path: classification.recommended_path,
            sla_priority: classification.sla_priority,
            decision_factors: evaluation.factors,
            rules_version: rules_version.into(),
        }
    }
}
