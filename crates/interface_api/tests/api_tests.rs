//! HTTP tests for the triage API
//!
//! Requests go through the full router, middleware stack included.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use tower::ServiceExt;

use domain_triage::{ClaimTriage, RuleThresholds};
use interface_api::{config::ApiConfig, create_router};
use test_utils::{
    builders::ClaimBuilder,
    fixtures::{LOW_PHOTOS_FACTOR, NEW_POLICY_FACTOR, PRIOR_CLAIMS_FACTOR},
};

fn app() -> Router {
    create_router(ClaimTriage::default(), ApiConfig::default())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn triage_request(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/claims/triage")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn triage(app: Router, builder: &ClaimBuilder) -> (StatusCode, Value) {
    send(app, triage_request(builder.to_json().to_string())).await
}

// ============================================================================
// Health Tests
// ============================================================================

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(app(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_readiness_with_standard_rules() {
        let request = Request::builder()
            .uri("/health/ready")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
    }

    #[tokio::test]
    async fn test_readiness_fails_on_invalid_config() {
        let config = ApiConfig {
            port: 0,
            ..ApiConfig::default()
        };
        let app = create_router(ClaimTriage::default(), config);
        let request = Request::builder()
            .uri("/health/ready")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(app, request).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_readiness_fails_when_thresholds_diverge() {
        let config = ApiConfig {
            rules: RuleThresholds {
                high_claim_amount: dec!(7500),
                ..RuleThresholds::default()
            },
            ..ApiConfig::default()
        };
        let app = create_router(ClaimTriage::default(), config);
        let request = Request::builder()
            .uri("/health/ready")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(app, request).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_readiness_with_matching_custom_thresholds() {
        let thresholds = RuleThresholds {
            high_claim_amount: dec!(7500),
            ..RuleThresholds::default()
        };
        let config = ApiConfig {
            rules: thresholds.clone(),
            ..ApiConfig::default()
        };
        let app = create_router(ClaimTriage::with_thresholds(thresholds).unwrap(), config);
        let request = Request::builder()
            .uri("/health/ready")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(app, request).await;

        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_request_id_is_propagated() {
        let request = Request::builder()
            .uri("/health")
            .header("x-request-id", "req-42")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.headers()["x-request-id"], "req-42");
    }

    #[tokio::test]
    async fn test_request_id_is_generated() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert!(response.headers().contains_key("x-request-id"));
    }
}

// ============================================================================
// Triage Tests
// ============================================================================

mod triage_tests {
    use super::*;

    #[tokio::test]
    async fn test_clean_claim_is_fast_tracked() {
        let (status, body) = triage(app(), &ClaimBuilder::new()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["claim_id"], "CLM-0001");
        assert_eq!(body["risk_score"], 0.0);
        assert_eq!(body["fraud_score"], 0.0);
        assert_eq!(body["decision_factors"], json!([]));
        assert_eq!(body["complexity"], "low");
        assert_eq!(body["recommended_path"], "fast_track");
        assert_eq!(body["sla_priority"], "low");
        assert_eq!(body["rules_version"], "1.0.0");
    }

    #[tokio::test]
    async fn test_new_policy_high_amount() {
        let builder = ClaimBuilder::new()
            .with_policy_age_days(30)
            .with_amount(dec!(12000));
        let (status, body) = triage(app(), &builder).await;

        assert_eq!(status, StatusCode::OK);
        assert!((body["risk_score"].as_f64().unwrap() - 0.3).abs() < 1e-9);
        assert!((body["fraud_score"].as_f64().unwrap() - 0.2).abs() < 1e-9);
        assert_eq!(body["decision_factors"], json!([NEW_POLICY_FACTOR]));
        assert_eq!(body["recommended_path"], "manual_review");
    }

    #[tokio::test]
    async fn test_all_rules_go_to_special_investigation() {
        let builder = ClaimBuilder::new()
            .with_policy_age_days(10)
            .with_amount(dec!(9000))
            .with_prior_claims(4)
            .with_photos(0);
        let (status, body) = triage(app(), &builder).await;

        assert_eq!(status, StatusCode::OK);
        assert!((body["risk_score"].as_f64().unwrap() - 0.5).abs() < 1e-9);
        assert!((body["fraud_score"].as_f64().unwrap() - 0.4).abs() < 1e-9);
        assert_eq!(
            body["decision_factors"],
            json!([NEW_POLICY_FACTOR, PRIOR_CLAIMS_FACTOR, LOW_PHOTOS_FACTOR])
        );
        assert_eq!(body["complexity"], "high");
        assert_eq!(body["recommended_path"], "special_investigation");
        assert_eq!(body["sla_priority"], "high");
    }

    #[tokio::test]
    async fn test_numeric_amount_is_accepted() {
        let mut payload = ClaimBuilder::new().to_json();
        payload["claim_amount"] = json!(1200.5);
        let (status, _) = send(app(), triage_request(payload.to_string())).await;

        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_numeric_amount_boundary() {
        let builder = ClaimBuilder::new().with_policy_age_days(10);

        let mut at = builder.to_json();
        at["claim_amount"] = json!(5000.0);
        let (status, body) = send(app(), triage_request(at.to_string())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["decision_factors"], json!([]));

        let mut over = builder.to_json();
        over["claim_amount"] = json!(5000.01);
        let (status, body) = send(app(), triage_request(over.to_string())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["decision_factors"], json!([NEW_POLICY_FACTOR]));
    }

    #[tokio::test]
    async fn test_missing_attachment_counts_default_to_zero() {
        let mut payload = ClaimBuilder::new().to_json();
        payload["attachments"] = json!({});
        let (status, body) = send(app(), triage_request(payload.to_string())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["decision_factors"], json!([LOW_PHOTOS_FACTOR]));
    }

    #[tokio::test]
    async fn test_configured_thresholds_apply() {
        let thresholds = RuleThresholds {
            min_supporting_photos: 5,
            ..RuleThresholds::default()
        };
        let triage_service = ClaimTriage::with_thresholds(thresholds).unwrap();
        let app = create_router(triage_service, ApiConfig::default());

        let (status, body) = triage(app, &ClaimBuilder::new().with_photos(4)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["decision_factors"], json!([LOW_PHOTOS_FACTOR]));
    }
}

// ============================================================================
// Error Tests
// ============================================================================

mod error_tests {
    use super::*;

    #[tokio::test]
    async fn test_negative_prior_claims_is_unprocessable() {
        let builder = ClaimBuilder::new().with_prior_claims(-1);
        let (status, body) = triage(app(), &builder).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation_error");
        let details = body["details"].as_array().unwrap();
        assert!(details
            .iter()
            .any(|d| d.as_str().unwrap().contains("claimant.prior_claims_count")));
    }

    #[tokio::test]
    async fn test_zero_amount_is_unprocessable() {
        let builder = ClaimBuilder::new().with_amount(dec!(0));
        let (status, body) = triage(app(), &builder).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation_error");
    }

    #[tokio::test]
    async fn test_unknown_currency_is_unprocessable() {
        let builder = ClaimBuilder::new().with_currency("XYZ");
        let (status, body) = triage(app(), &builder).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation_error");
    }

    #[tokio::test]
    async fn test_submission_before_policy_start_is_unprocessable() {
        let builder = ClaimBuilder::new().with_policy_age_days(-3);
        let (status, _) = triage(app(), &builder).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_missing_field_is_unprocessable() {
        let mut payload = ClaimBuilder::new().to_json();
        payload.as_object_mut().unwrap().remove("policy");
        let (status, body) = send(app(), triage_request(payload.to_string())).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["details"].is_array());
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let (status, body) = send(app(), triage_request("{\"claim_id\": ".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");
    }

    #[tokio::test]
    async fn test_missing_content_type_is_unsupported() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/claims/triage")
            .body(Body::from(ClaimBuilder::new().to_json().to_string()))
            .unwrap();
        let (status, body) = send(app(), request).await;

        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body["error"], "unsupported_media_type");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let request = Request::builder()
            .uri("/api/v1/claims")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

// ============================================================================
// Rule Listing Tests
// ============================================================================

mod rules_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_standard_rules() {
        let request = Request::builder()
            .uri("/api/v1/rules")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rules_version"], "1.0.0");
        assert_eq!(body["thresholds"]["new_policy_days"], 60);
        assert_eq!(body["thresholds"]["prior_claims_limit"], 3);
        assert_eq!(body["thresholds"]["min_supporting_photos"], 2);

        let codes: Vec<&str> = body["rules"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["code"].as_str().unwrap())
            .collect();
        assert_eq!(
            codes,
            vec!["NEW_POLICY_HIGH_AMOUNT", "MULTIPLE_PRIOR_CLAIMS", "LOW_PHOTO_EVIDENCE"]
        );
        assert_eq!(body["rules"][0]["factor"], NEW_POLICY_FACTOR);
    }
}
