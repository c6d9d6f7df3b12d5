//! Claim triage handlers

use axum::{extract::{rejection::JsonRejection, State}, Json};

use domain_triage::{ClaimResponse, ClaimSubmission};

use crate::{AppState, error::ApiError};

/// Validates, scores and classifies a claim submission
pub async fn triage_claim(
    State(state): State<AppState>,
    payload: Result<Json<ClaimSubmission>, JsonRejection>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let Json(submission) = payload?;
    let response = state.triage.assess_submission(submission)?;
    Ok(Json(response))
}
