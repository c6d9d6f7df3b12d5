//! Claim submission schema
//!
//! Two shapes live here. [`ClaimSubmission`] is what arrives on the wire:
//! currency as free text and counts as signed integers, so bad values can be
//! reported field by field. [`ClaimRequest`] is the validated, typed form the
//! rule evaluator consumes; the only way to get one from untrusted input is
//! `ClaimRequest::try_from(submission)`.

use std::borrow::Cow;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use core_kernel::{ensure_positive, Currency, DateSpan, Money};
use crate::error::TriageError;

/// Reference data for the insured policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Policy {
    /// Policy identifier
    #[validate(length(min = 1, message = "must not be empty"))]
    pub policy_id: String,
    /// Date the policy came into force
    pub policy_start_date: NaiveDate,
}

/// Summary of the claimant's claim history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Claimant {
    /// Number of claims filed before this one
    pub prior_claims_count: u32,
}

/// Evidence submitted with the claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Attachments {
    /// Number of supporting photos
    pub photos_count: u32,
    /// Number of supporting documents
    pub documents_count: u32,
}

/// A validated claim, ready for rule evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimRequest {
    pub claim_id: String,
    pub claim_type: String,
    /// Claimed amount, strictly positive
    pub claim_amount: Decimal,
    pub currency: Currency,
    pub incident_date: NaiveDate,
    pub submission_date: NaiveDate,
    pub policy: Policy,
    pub claimant: Claimant,
    pub attachments: Attachments,
}

impl ClaimRequest {
    /// Calendar days between policy start and claim submission
    ///
    /// Signed: a request built in code with a submission date before the
    /// policy start yields a negative age. Requests built from a
    /// [`ClaimSubmission`] never do, validation rejects them.
    pub fn policy_age_days(&self) -> i64 {
        DateSpan::new(self.policy.policy_start_date, self.submission_date).days()
    }

    /// The claimed amount together with its currency
    pub fn claimed_money(&self) -> Money {
        Money::new(self.claim_amount, self.currency)
    }
}

/// Wire form of the claimant section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ClaimantSubmission {
    #[validate(range(min = 0, message = "must not be negative"))]
    pub prior_claims_count: i64,
}

/// Wire form of the attachments section; both counts default to zero
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate)]
pub struct AttachmentsSubmission {
    #[serde(default)]
    #[validate(range(min = 0, message = "must not be negative"))]
    pub photos_count: i64,
    #[serde(default)]
    #[validate(range(min = 0, message = "must not be negative"))]
    pub documents_count: i64,
}

/// An unvalidated claim submission as received from a caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ClaimSubmission {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub claim_id: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub claim_type: String,
    #[validate(custom(function = "validate_positive_amount"))]
    pub claim_amount: Decimal,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub currency: String,
    pub incident_date: NaiveDate,
    pub submission_date: NaiveDate,
    #[validate(nested)]
    pub policy: Policy,
    #[validate(nested)]
    pub claimant: ClaimantSubmission,
    #[validate(nested)]
    pub attachments: AttachmentsSubmission,
}

impl ClaimSubmission {
    /// Validates the submission and converts it into a [`ClaimRequest`]
    pub fn into_request(self) -> Result<ClaimRequest, TriageError> {
        ClaimRequest::try_from(self)
    }
}

impl TryFrom<ClaimSubmission> for ClaimRequest {
    type Error = TriageError;

    fn try_from(submission: ClaimSubmission) -> Result<Self, Self::Error> {
        if let Err(errors) = submission.validate() {
            return Err(TriageError::Validation(validation_messages(&errors)));
        }

        let currency: Currency = submission
            .currency
            .parse()
            .map_err(|_| TriageError::UnsupportedCurrency(submission.currency.clone()))?;

        let policy_start_date = submission.policy.policy_start_date;
        let submission_date = submission.submission_date;
        DateSpan::ordered(policy_start_date, submission_date).map_err(|_| {
            TriageError::SubmissionBeforePolicyStart {
                policy_start_date,
                submission_date,
            }
        })?;

        // An incident dated after its own submission is a data-entry error
        let incident_date = submission.incident_date;
        DateSpan::ordered(incident_date, submission_date).map_err(|_| {
            TriageError::IncidentAfterSubmission {
                incident_date,
                submission_date,
            }
        })?;

        Ok(ClaimRequest {
            claim_id: submission.claim_id,
            claim_type: submission.claim_type,
            claim_amount: submission.claim_amount,
            currency,
            incident_date,
            submission_date,
            policy: submission.policy,
            claimant: Claimant {
                prior_claims_count: to_count(
                    "claimant.prior_claims_count",
                    submission.claimant.prior_claims_count,
                )?,
            },
            attachments: Attachments {
                photos_count: to_count(
                    "attachments.photos_count",
                    submission.attachments.photos_count,
                )?,
                documents_count: to_count(
                    "attachments.documents_count",
                    submission.attachments.documents_count,
                )?,
            },
        })
    }
}

fn validate_positive_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if ensure_positive(*amount).is_ok() {
        return Ok(());
    }
    let mut error = ValidationError::new("positive_amount");
    error.message = Some(Cow::Borrowed("must be greater than zero"));
    Err(error)
}

fn to_count(field: &str, value: i64) -> Result<u32, TriageError> {
    u32::try_from(value)
        .map_err(|_| TriageError::validation(format!("{}: {} is out of range", field, value)))
}

/// Flattens validator output into sorted `path: message` strings
fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages = Vec::new();
    collect_messages("", errors, &mut messages);
    messages.sort();
    messages
}

fn collect_messages(prefix: &str, errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    match &error.message {
                        Some(message) => out.push(format!("{}: {}", path, message)),
                        None => out.push(format!("{}: failed {}", path, error.code)),
                    }
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_messages(&path, nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_messages(&format!("{}[{}]", path, index), nested, out);
                }
            }
        }
    }
}
