//! Rule table DTOs

use domain_triage::{RuleSet, RuleThresholds, TriageRule};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct RuleResponse {
    pub code: String,
    pub factor: String,
    pub risk_delta: f64,
    pub fraud_delta: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RuleSetResponse {
    pub rules_version: String,
    pub thresholds: RuleThresholds,
    pub rules: Vec<RuleResponse>,
}

impl From<&TriageRule> for RuleResponse {
    fn from(rule: &TriageRule) -> Self {
        Self {
            code: rule.code.to_string(),
            factor: rule.factor.to_string(),
            risk_delta: rule.risk_delta,
            fraud_delta: rule.fraud_delta,
        }
    }
}

impl From<&RuleSet> for RuleSetResponse {
    fn from(rules: &RuleSet) -> Self {
        Self {
            rules_version: rules.version().to_string(),
            thresholds: rules.thresholds().clone(),
            rules: rules.rules().iter().map(RuleResponse::from).collect(),
        }
    }
}
