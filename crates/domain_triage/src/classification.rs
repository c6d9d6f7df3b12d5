//! Routing classification derived from rule scores
//!
//! Maps a [`RuleEvaluation`] onto the categorical fields of the response:
//!
//! - complexity: `high` at risk >= 0.5, `medium` at risk >= 0.2, else `low`
//! - recommended path: `special_investigation` at fraud >= 0.4,
//!   `manual_review` when any rule fired, else `fast_track`
//! - SLA priority: `high` for special investigation or high complexity,
//!   `normal` for manual review, `low` for fast track

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::rules::RuleEvaluation;

/// Absorbs float accumulation error such as 0.1 + 0.2 = 0.30000000000000004
const SCORE_EPSILON: f64 = 1e-9;

const HIGH_COMPLEXITY_RISK: f64 = 0.5;
const MEDIUM_COMPLEXITY_RISK: f64 = 0.2;
const INVESTIGATION_FRAUD: f64 = 0.4;

fn at_least(score: f64, threshold: f64) -> bool {
    score + SCORE_EPSILON >= threshold
}

/// Expected handling effort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Low => "low",
            Complexity::Medium => "medium",
            Complexity::High => "high",
        }
    }
}

/// Where the claim should go next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedPath {
    /// No rule fired, straight-through processing
    FastTrack,
    /// Adjuster review
    ManualReview,
    /// Special investigation unit
    SpecialInvestigation,
}

impl RecommendedPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendedPath::FastTrack => "fast_track",
            RecommendedPath::ManualReview => "manual_review",
            RecommendedPath::SpecialInvestigation => "special_investigation",
        }
    }
}

/// Service-level urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlaPriority {
    Low,
    Normal,
    High,
}

impl SlaPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlaPriority::Low => "low",
            SlaPriority::Normal => "normal",
            SlaPriority::High => "high",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(Complexity, RecommendedPath, SlaPriority);

/// Categorical outcome of a triage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub complexity: Complexity,
    pub recommended_path: RecommendedPath,
    pub sla_priority: SlaPriority,
}

/// Derives complexity, path and priority from an evaluation
pub fn classify(evaluation: &RuleEvaluation) -> Classification {
    let complexity = if at_least(evaluation.risk_score, HIGH_COMPLEXITY_RISK) {
        Complexity::High
    } else if at_least(evaluation.risk_score, MEDIUM_COMPLEXITY_RISK) {
        Complexity::Medium
    } else {
        Complexity::Low
    };

    let recommended_path = if at_least(evaluation.fraud_score, INVESTIGATION_FRAUD) {
        RecommendedPath::SpecialInvestigation
    } else if !evaluation.is_clean() {
        RecommendedPath::ManualReview
    } else {
        RecommendedPath::FastTrack
    };

    let sla_priority = match (recommended_path, complexity) {
        (RecommendedPath::SpecialInvestigation, _) | (_, Complexity::High) => SlaPriority::High,
        (RecommendedPath::ManualReview, _) => SlaPriority::Normal,
        (RecommendedPath::FastTrack, _) => SlaPriority::Low,
    };

    Classification {
        complexity,
        recommended_path,
        sla_priority,
    }
}
