//! Triage domain errors

use chrono::NaiveDate;
use thiserror::Error;

use core_kernel::CoreError;

/// Errors raised while turning a submission into a triage result
#[derive(Debug, Error)]
pub enum TriageError {
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    #[error("Submission date {submission_date} is before policy start date {policy_start_date}")]
    SubmissionBeforePolicyStart {
        policy_start_date: NaiveDate,
        submission_date: NaiveDate,
    },

    #[error("Incident date {incident_date} is after submission date {submission_date}")]
    IncidentAfterSubmission {
        incident_date: NaiveDate,
        submission_date: NaiveDate,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl TriageError {
    pub fn validation(message: impl Into<String>) -> Self {
        TriageError::Validation(vec![message.into()])
    }

    /// Returns true if the error stems from bad input rather than configuration
    pub fn is_client_error(&self) -> bool {
        !matches!(self, TriageError::Core(CoreError::Configuration(_)))
    }

    /// Human-readable details, one entry per failed check
    pub fn details(&self) -> Vec<String> {
        match self {
            TriageError::Validation(messages) => messages.clone(),
            other => vec![other.to_string()],
        }
    }
}
