//! Custom Test Assertions
//!
//! Score assertions that tolerate float accumulation error and give
//! readable messages on failure.

use domain_triage::{ClaimResponse, RuleEvaluation};

/// Tolerance used when comparing accumulated scores
pub const SCORE_TOLERANCE: f64 = 1e-9;

/// Risk scores the standard table can produce
pub const ALLOWED_RISK_SCORES: [f64; 4] = [0.0, 0.2, 0.3, 0.5];

/// Fraud scores the standard table can produce
pub const ALLOWED_FRAUD_SCORES: [f64; 3] = [0.0, 0.2, 0.4];

/// Asserts that a score is within [`SCORE_TOLERANCE`] of the expected value
///
/// # Panics
///
/// Panics with both values and the difference if they are too far apart
pub fn assert_score_eq(actual: f64, expected: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= SCORE_TOLERANCE,
        "Scores differ: actual={}, expected={}, diff={}",
        actual,
        expected,
        diff
    );
}

/// Asserts both scores and the exact factor list of an evaluation
pub fn assert_evaluation(evaluation: &RuleEvaluation, risk: f64, fraud: f64, factors: &[&str]) {
    assert_score_eq(evaluation.risk_score, risk);
    assert_score_eq(evaluation.fraud_score, fraud);
    assert_eq!(
        evaluation.factors, factors,
        "Decision factors differ"
    );
}

/// Asserts both scores and the exact factor list of a response
pub fn assert_response_scores(response: &ClaimResponse, risk: f64, fraud: f64, factors: &[&str]) {
    assert_score_eq(response.risk_score, risk);
    assert_score_eq(response.fraud_score, fraud);
    assert_eq!(
        response.decision_factors, factors,
        "Decision factors differ for claim {}",
        response.claim_id
    );
}

/// Returns true if `score` matches one of `allowed` within tolerance
pub fn is_allowed_score(score: f64, allowed: &[f64]) -> bool {
    allowed.iter().any(|a| (score - a).abs() <= SCORE_TOLERANCE)
}

/// Asserts that the scores are sums the standard table can produce
pub fn assert_scores_from_standard_table(evaluation: &RuleEvaluation) {
    assert!(
        is_allowed_score(evaluation.risk_score, &ALLOWED_RISK_SCORES),
        "Unexpected risk score {}",
        evaluation.risk_score
    );
    assert!(
        is_allowed_score(evaluation.fraud_score, &ALLOWED_FRAUD_SCORES),
        "Unexpected fraud score {}",
        evaluation.fraud_score
    );
}
