//! Rule table handlers

use axum::{extract::State, Json};

use crate::AppState;
use crate::dto::rules::RuleSetResponse;

/// Lists the active rule table and its thresholds
pub async fn list_rules(State(state): State<AppState>) -> Json<RuleSetResponse> {
    Json(RuleSetResponse::from(state.triage.rules()))
}
